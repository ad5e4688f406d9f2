use {
    crate::domain::{environment::Environment, error::CheckoutError},
    std::env,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ERROR_MESSAGE: &str = "There was an error processing your payment.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub bind_addr: String,
    /// Used when the upstream call returned nothing and the caller gave no message.
    pub default_error_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            default_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Reads `PPCP_*` variables from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, CheckoutError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CheckoutError> {
        let defaults = Self::default();

        let environment = match lookup("PPCP_ENVIRONMENT") {
            Some(raw) => Environment::try_from(raw.as_str())?,
            None => defaults.environment,
        };

        let bind_addr = match lookup("PPCP_BIND_ADDR") {
            Some(addr) if addr.trim().is_empty() => {
                return Err(CheckoutError::Config("PPCP_BIND_ADDR is empty".into()));
            }
            Some(addr) => addr,
            None => defaults.bind_addr,
        };

        let default_error_message = lookup("PPCP_DEFAULT_ERROR_MESSAGE")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.default_error_message);

        Ok(Self {
            environment,
            bind_addr,
            default_error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_sandbox() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.environment, Environment::Sandbox);
    }

    #[test]
    fn reads_production_and_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PPCP_ENVIRONMENT", "Production"),
            ("PPCP_BIND_ADDR", "127.0.0.1:8080"),
            ("PPCP_DEFAULT_ERROR_MESSAGE", "Payment failed"),
        ]))
        .unwrap();
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.default_error_message, "Payment failed");
    }

    #[test]
    fn rejects_unknown_environment() {
        let err =
            Settings::from_lookup(lookup_from(&[("PPCP_ENVIRONMENT", "staging")])).unwrap_err();
        assert!(matches!(err, CheckoutError::Config(_)));
    }
}
