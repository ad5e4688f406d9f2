use {
    super::error::CheckoutError,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// PayPal SDK services, keyed by the name the SDK client exposes them under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "orders")]
    Orders,
    #[serde(rename = "auth")]
    OAuthToken,
    #[serde(rename = "partner")]
    Partner,
    #[serde(rename = "captures")]
    PaymentCapture,
    #[serde(rename = "authorizations")]
    PaymentAuthorization,
    #[serde(rename = "billingAgreements")]
    BillingAgreement,
    #[serde(rename = "billingAgreementTokens")]
    BillingAgreementToken,
    #[serde(rename = "webhooks")]
    Webhook,
    #[serde(rename = "paymentTokens")]
    PaymentToken,
    #[serde(rename = "paymentTokensV3")]
    PaymentTokenV3,
    #[serde(rename = "tracking")]
    Tracking,
    #[serde(rename = "setupTokens")]
    SetupToken,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 12] = [
        Self::Orders,
        Self::OAuthToken,
        Self::Partner,
        Self::PaymentCapture,
        Self::PaymentAuthorization,
        Self::BillingAgreement,
        Self::BillingAgreementToken,
        Self::Webhook,
        Self::PaymentToken,
        Self::PaymentTokenV3,
        Self::Tracking,
        Self::SetupToken,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::OAuthToken => "auth",
            Self::Partner => "partner",
            Self::PaymentCapture => "captures",
            Self::PaymentAuthorization => "authorizations",
            Self::BillingAgreement => "billingAgreements",
            Self::BillingAgreementToken => "billingAgreementTokens",
            Self::Webhook => "webhooks",
            Self::PaymentToken => "paymentTokens",
            Self::PaymentTokenV3 => "paymentTokensV3",
            Self::Tracking => "tracking",
            Self::SetupToken => "setupTokens",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CheckoutError::UnknownService(s.to_string()))
    }
}
