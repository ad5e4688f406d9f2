use {
    super::error::CheckoutError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

pub const PAYPAL_CHECKOUT_URL: &str = "https://paypal.com/checkoutnow";
pub const PAYPAL_SANDBOX_CHECKOUT_URL: &str = "https://sandbox.paypal.com/checkoutnow";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }

    pub fn checkout_url(&self) -> &'static str {
        match self {
            Self::Production => PAYPAL_CHECKOUT_URL,
            Self::Sandbox => PAYPAL_SANDBOX_CHECKOUT_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Environment {
    type Error = CheckoutError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "live" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(CheckoutError::Config(format!(
                "unknown environment: {other}"
            ))),
        }
    }
}
