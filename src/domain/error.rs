use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("validation: {0}")]
    Validation(String),

    /// Caller handed the resolver data it can never classify, e.g. an
    /// order intent other than CAPTURE or AUTHORIZE.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("config: {0}")]
    Config(String),

    #[error("unknown service: {0}")]
    UnknownService(String),
}
