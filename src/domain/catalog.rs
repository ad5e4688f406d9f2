use std::collections::HashMap;

pub const GENERIC_DECLINE_MESSAGE: &str =
    "There was an error processing your payment. Please try again or use a different payment method.";

/// Turns a card-processor response code into something a shopper can read.
pub trait MessageCatalog: Send + Sync {
    /// Must return a non-empty message for every input, known or not.
    fn lookup(&self, code: &str) -> String;
}

/// Built-in table of PayPal processor response codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorCodeCatalog;

impl ProcessorCodeCatalog {
    pub fn message(code: &str) -> Option<&'static str> {
        let msg = match code {
            "00N7" | "5110" | "PCVV" | "1382" => {
                "The card security code (CVV) could not be verified. Please check it and try again."
            }
            "0100" => "Your card issuer requires a referral. Please contact your bank.",
            "0390" | "1330" | "6300" => {
                "The card account could not be found. Please use a different card."
            }
            "0500" | "5100" | "9540" => {
                "Your card was declined by the issuer. Please use a different payment method."
            }
            "0580" | "1312" | "5210" => {
                "This transaction is not valid for the card. Please use a different card."
            }
            "0800" | "0880" | "0890" | "0960" | "8000" | "8100" | "8110" | "8220" => {
                "The payment processor is temporarily unavailable. Please try again shortly."
            }
            "0R00" => "The transaction was cancelled.",
            "1000" => "The card was only partially authorized.",
            "10BR" => "Your card issuer rejected the transaction. Please contact your bank.",
            "1300" | "PPFV" | "PPVE" => {
                "Some of the payment details are invalid. Please review them and try again."
            }
            "1310" | "PPAI" => "The payment amount is invalid for this card.",
            "1320" | "PPCU" | "PPUC" => "The currency is not supported for this card.",
            "1380" | "5400" | "PPEX" => "The card has expired. Please use a different card.",
            "5120" => "Insufficient funds. Please use a different payment method.",
            "5130" | "5500" | "7900" => "The PIN entered is incorrect.",
            "5135" => "The number of PIN attempts has been exceeded.",
            "5140" | "PP06" => "The card account has been closed. Please use a different card.",
            "5150" | "9520" => "The card was reported lost or stolen.",
            "5160" => "The cardholder is not authorized to use this card.",
            "5170" | "5190" | "PPAD" | "PPAV" => {
                "The billing address does not match the card's address. Please check it and try again."
            }
            "5180" | "PPFR" => "The card is invalid or restricted. Please use a different card.",
            "5200" => "This looks like a duplicate transaction.",
            "5650" | "PCNR" | "PPD3" => {
                "Your bank requires additional authentication. Please try again."
            }
            "5700" | "PPTT" => "This transaction is not permitted for the card.",
            "5710" | "PPEL" | "PPNL" => "The card has exceeded its transaction attempt limit.",
            "5910" | "5920" => "The card issuer is unavailable. Please try again shortly.",
            "5930" => "The card has not been activated.",
            "7700" | "7710" => "3D Secure authentication failed. Please try again.",
            "9100" | "PPRN" => "The transaction was declined. Please retry.",
            "9500" | "9510" | "PPMD" => "The transaction was declined for security reasons.",
            "9530" => "Please contact your card issuer to complete this payment.",
            "PPAB" => "The card account is blocked by the issuer.",
            "PPCT" | "PPDI" | "PPAE" => "This card type is not supported.",
            "PPEF" => "The funding instrument has expired.",
            "PPFI" | "PPPM" => "The payment method is invalid.",
            "PPIF" => "The payment could not be processed because of a duplicate request.",
            "PPMC" => "This Mastercard transaction was blocked.",
            "PPSE" => "This American Express transaction was denied.",
            _ => return None,
        };
        Some(msg)
    }
}

impl MessageCatalog for ProcessorCodeCatalog {
    fn lookup(&self, code: &str) -> String {
        Self::message(code).unwrap_or(GENERIC_DECLINE_MESSAGE).to_string()
    }
}

/// Store-specific wording layered on top of another catalog.
#[derive(Debug, Clone, Default)]
pub struct OverrideCatalog<C> {
    inner: C,
    overrides: HashMap<String, String>,
}

impl<C: MessageCatalog> OverrideCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            overrides: HashMap::new(),
        }
    }

    /// Blank messages are ignored so `lookup` stays non-empty.
    pub fn with(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.overrides.insert(code.into(), message);
        }
        self
    }
}

impl<C: MessageCatalog> MessageCatalog for OverrideCatalog<C> {
    fn lookup(&self, code: &str) -> String {
        match self.overrides.get(code) {
            Some(msg) => msg.clone(),
            None => self.inner.lookup(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_codes() {
        let catalog = ProcessorCodeCatalog;
        assert!(catalog.lookup("5120").contains("Insufficient funds"));
        assert_eq!(catalog.lookup("ZZZZ"), GENERIC_DECLINE_MESSAGE);
        assert_eq!(catalog.lookup(""), GENERIC_DECLINE_MESSAGE);
    }

    #[test]
    fn overrides_win_and_blank_overrides_are_dropped() {
        let catalog = OverrideCatalog::new(ProcessorCodeCatalog)
            .with("5120", "Card balance too low")
            .with("0500", "  ");
        assert_eq!(catalog.lookup("5120"), "Card balance too low");
        assert_eq!(catalog.lookup("0500"), ProcessorCodeCatalog.lookup("0500"));
    }
}
