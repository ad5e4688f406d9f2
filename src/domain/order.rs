use {
    super::error::CheckoutError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Link relation PayPal uses for the step the payer must complete.
pub const PAYER_ACTION_REL: &str = "payer-action";

/// Response code the card processor uses for an approved transaction.
pub const APPROVED_RESPONSE_CODE: &str = "0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderIntent {
    Capture,
    Authorize,
}

impl OrderIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capture => "CAPTURE",
            Self::Authorize => "AUTHORIZE",
        }
    }
}

impl fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for OrderIntent {
    type Error = CheckoutError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "CAPTURE" => Ok(Self::Capture),
            "AUTHORIZE" => Ok(Self::Authorize),
            other => Err(CheckoutError::Precondition(format!(
                "unsupported order intent: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for OrderIntent {
    type Error = CheckoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<OrderIntent> for String {
    fn from(intent: OrderIntent) -> Self {
        intent.as_str().to_string()
    }
}

/// Declares a PayPal status enum whose unknown values land in `Other`
/// instead of failing to parse.
macro_rules! remote_status {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($wire => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                status.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

remote_status!(
    /// Status of the order as a whole.
    OrderStatus {
        Created => "CREATED",
        Saved => "SAVED",
        Approved => "APPROVED",
        Voided => "VOIDED",
        Completed => "COMPLETED",
        PayerActionRequired => "PAYER_ACTION_REQUIRED",
        OrderNotApproved => "ORDER_NOT_APPROVED",
    }
);

remote_status!(
    CaptureStatus {
        Completed => "COMPLETED",
        Pending => "PENDING",
        Declined => "DECLINED",
        PartiallyRefunded => "PARTIALLY_REFUNDED",
        Refunded => "REFUNDED",
        Failed => "FAILED",
    }
);

remote_status!(
    AuthorizationStatus {
        Created => "CREATED",
        Captured => "CAPTURED",
        Denied => "DENIED",
        PartiallyCaptured => "PARTIALLY_CAPTURED",
        Voided => "VOIDED",
        Pending => "PENDING",
        Expired => "EXPIRED",
    }
);

impl OrderStatus {
    /// Statuses where the payer still has a step to complete on PayPal.
    pub fn is_action_required(&self) -> bool {
        matches!(self, Self::Created | Self::PayerActionRequired)
    }

    pub fn needs_approval(&self) -> bool {
        self.is_action_required() || matches!(self, Self::OrderNotApproved)
    }
}

impl CaptureStatus {
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Completed | Self::Pending)
    }
}

impl AuthorizationStatus {
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Created | Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorResponse {
    pub response_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_code: Option<String>,
}

impl ProcessorResponse {
    /// A decline code worth surfacing: anything but the approved code.
    pub fn decline_code(&self) -> Option<&str> {
        (self.response_code != APPROVED_RESPONSE_CODE).then_some(self.response_code.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub id: String,
    pub status: CaptureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_response: Option<ProcessorResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub id: String,
    pub status: AuthorizationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_response: Option<ProcessorResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub captures: Vec<Capture>,
    #[serde(default)]
    pub authorizations: Vec<Authorization>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Payments>,
}

/// Order as returned by the PayPal orders API. Only the first purchase
/// unit is ever consulted. The id is kept as PayPal sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOrder {
    pub id: String,
    pub intent: OrderIntent,
    pub status: OrderStatus,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

impl RemoteOrder {
    /// Parses a raw orders-API payload. An intent other than CAPTURE or
    /// AUTHORIZE is a precondition violation; any other shape problem is a
    /// validation error.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, CheckoutError> {
        if let Some(intent) = raw.get("intent").and_then(|v| v.as_str()) {
            OrderIntent::try_from(intent)?;
        }
        serde_json::from_value(raw)
            .map_err(|e| CheckoutError::Validation(format!("invalid order: {e}")))
    }

    fn payments(&self) -> Option<&Payments> {
        self.purchase_units.first()?.payments.as_ref()
    }

    pub fn first_capture(&self) -> Option<&Capture> {
        self.payments()?.captures.first()
    }

    pub fn first_authorization(&self) -> Option<&Authorization> {
        self.payments()?.authorizations.first()
    }

    pub fn capture_id(&self) -> Option<&str> {
        self.first_capture().map(|c| c.id.as_str())
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.first_authorization().map(|a| a.id.as_str())
    }

    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }
}

/// Error reported by the upstream call instead of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub code: String,
    pub message: String,
}

impl RemoteError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Whatever the create/capture/authorize call handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResponse {
    Order(RemoteOrder),
    Error(RemoteError),
    /// The call produced no object at all, which is not the same as an error.
    Absent,
}

impl From<RemoteOrder> for UpstreamResponse {
    fn from(order: RemoteOrder) -> Self {
        Self::Order(order)
    }
}

impl From<RemoteError> for UpstreamResponse {
    fn from(err: RemoteError) -> Self {
        Self::Error(err)
    }
}

impl From<Option<RemoteOrder>> for UpstreamResponse {
    fn from(order: Option<RemoteOrder>) -> Self {
        order.map_or(Self::Absent, Self::Order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paypal_order_json() {
        let json = serde_json::json!({
            "id": "5O190127TN364715T",
            "intent": "CAPTURE",
            "status": "COMPLETED",
            "links": [{
                "href": "https://api.paypal.com/v2/checkout/orders/5O190127TN364715T",
                "rel": "self",
                "method": "GET"
            }],
            "purchase_units": [{
                "reference_id": "default",
                "payments": {
                    "captures": [{
                        "id": "3C679366HH908993F",
                        "status": "DECLINED",
                        "processor_response": {"response_code": "5120", "avs_code": "Y"}
                    }]
                }
            }]
        });

        let order: RemoteOrder = serde_json::from_value(json).unwrap();
        assert_eq!(order.intent, OrderIntent::Capture);
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.capture_id(), Some("3C679366HH908993F"));
        assert_eq!(order.authorization_id(), None);
        let capture = order.first_capture().unwrap();
        assert_eq!(capture.status, CaptureStatus::Declined);
        assert_eq!(
            capture
                .processor_response
                .as_ref()
                .and_then(|p| p.decline_code()),
            Some("5120")
        );
    }

    #[test]
    fn unknown_statuses_keep_raw_value() {
        assert_eq!(
            CaptureStatus::from("SOMETHING_NEW"),
            CaptureStatus::Other("SOMETHING_NEW".into())
        );
        assert!(!CaptureStatus::from("SOMETHING_NEW").is_successful());
        assert_eq!(OrderStatus::from("SOMETHING_NEW").as_str(), "SOMETHING_NEW");
    }

    #[test]
    fn unsupported_intent_is_a_precondition_error() {
        let err = OrderIntent::try_from("SALE").unwrap_err();
        assert!(matches!(err, CheckoutError::Precondition(_)));

        let json = serde_json::json!({"id": "X1", "intent": "SALE", "status": "CREATED"});
        let err = RemoteOrder::from_value(json).unwrap_err();
        assert!(matches!(err, CheckoutError::Precondition(_)));
    }

    #[test]
    fn malformed_order_is_a_validation_error() {
        let err =
            RemoteOrder::from_value(serde_json::json!({"intent": "CAPTURE"})).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }

    #[test]
    fn order_id_is_taken_verbatim() {
        let json = serde_json::json!({
            "id": " 5O1 90 ",
            "intent": "AUTHORIZE",
            "status": "COMPLETED"
        });
        let order = RemoteOrder::from_value(json).unwrap();
        assert_eq!(order.id, " 5O1 90 ");
        assert_eq!(order.intent, OrderIntent::Authorize);
    }

    #[test]
    fn approved_code_is_not_a_decline() {
        let pr = ProcessorResponse {
            response_code: APPROVED_RESPONSE_CODE.into(),
            avs_code: None,
            cvv_code: None,
        };
        assert_eq!(pr.decline_code(), None);
    }
}
