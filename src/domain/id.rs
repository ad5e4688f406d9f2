use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::CheckoutError;

/// PayPal order identifier, as returned when the order was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, CheckoutError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "OrderId must not be empty".into(),
            ));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(CheckoutError::Validation(format!(
                "OrderId must not contain whitespace, got: {id:?}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for OrderId {
    type Error = CheckoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
