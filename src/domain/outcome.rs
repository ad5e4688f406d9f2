use serde::{Deserialize, Serialize};

pub const ORDER_ALREADY_CAPTURED: &str = "ORDER_ALREADY_CAPTURED";
pub const ORDER_ALREADY_AUTHORIZED: &str = "ORDER_ALREADY_AUTHORIZED";
pub const PAYER_ACTION_REQUIRED: &str = "PAYER_ACTION_REQUIRED";
pub const ORDER_NOT_APPROVED: &str = "ORDER_NOT_APPROVED";
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// Classification of one payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    NeedsApproval { redirect_url: String },
    Failure { code: String, message: String },
}

impl Outcome {
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn failure_code(&self) -> Option<&str> {
        match self {
            Self::Failure { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn already_captured(&self) -> bool {
        self.failure_code() == Some(ORDER_ALREADY_CAPTURED)
    }

    pub fn already_authorized(&self) -> bool {
        self.failure_code() == Some(ORDER_ALREADY_AUTHORIZED)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NeedsApproval { .. } => "needs_approval",
            Self::Failure { .. } => "failure",
        }
    }
}

pub fn already_captured(outcome: &Outcome) -> bool {
    outcome.already_captured()
}

pub fn already_authorized(outcome: &Outcome) -> bool {
    outcome.already_authorized()
}

/// What the host store knows about the checkout being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutContext {
    /// Store-side order reference.
    pub order_ref: String,
    /// Id of the gateway the shopper picked.
    #[serde(default)]
    pub payment_method: String,
    /// Order-confirmation page the shopper lands on after a successful payment.
    pub return_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseResult {
    Success,
    Failure,
}

/// Flat shape the checkout UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub result: ResponseResult,
    pub redirect: String,
    #[serde(
        rename = "ppcpErrorMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

impl CheckoutResponse {
    /// A payer-approval redirect still counts as "success" for the transport:
    /// the shopper is sent on to finish a step on PayPal.
    pub fn from_outcome(outcome: &Outcome, ctx: &CheckoutContext) -> Self {
        match outcome {
            Outcome::Success => Self {
                result: ResponseResult::Success,
                redirect: ctx.return_url.clone(),
                error_message: None,
            },
            Outcome::NeedsApproval { redirect_url } => Self {
                result: ResponseResult::Success,
                redirect: redirect_url.clone(),
                error_message: None,
            },
            Outcome::Failure { message, .. } => Self {
                result: ResponseResult::Failure,
                redirect: String::new(),
                error_message: Some(message.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CheckoutContext {
        CheckoutContext {
            order_ref: "1042".into(),
            payment_method: "ppcp".into(),
            return_url: "https://shop.test/checkout/order-received/1042".into(),
        }
    }

    #[test]
    fn failure_shape_carries_message_and_empty_redirect() {
        let resp = CheckoutResponse::from_outcome(
            &Outcome::failure("5120", "Insufficient funds"),
            &ctx(),
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": "failure",
                "redirect": "",
                "ppcpErrorMessage": "Insufficient funds"
            })
        );
    }

    #[test]
    fn success_redirects_to_return_url() {
        let resp = CheckoutResponse::from_outcome(&Outcome::Success, &ctx());
        assert_eq!(resp.result, ResponseResult::Success);
        assert_eq!(resp.redirect, ctx().return_url);
        assert!(
            serde_json::to_value(&resp)
                .unwrap()
                .get("ppcpErrorMessage")
                .is_none()
        );
    }

    #[test]
    fn predicates_only_match_failures() {
        assert!(Outcome::failure(ORDER_ALREADY_CAPTURED, "").already_captured());
        assert!(!Outcome::failure(ORDER_ALREADY_CAPTURED, "").already_authorized());
        assert!(already_authorized(&Outcome::failure(
            ORDER_ALREADY_AUTHORIZED,
            ""
        )));
        assert!(!already_captured(&Outcome::Success));
    }
}
