//! Payment method model
//!
//! The fixed set of payment methods an expense can be attributed to, and
//! the case-insensitive lookup used when reading `via <method>` phrases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Card,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Other,
}

/// Outcome of matching a free-text phrase against the known methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMatch {
    Found(PaymentMethod),
    NotFound,
}

impl PaymentMatch {
    /// The matched method, or `Other` when nothing matched
    pub fn resolve(self) -> PaymentMethod {
        match self {
            Self::Found(method) => method,
            Self::NotFound => PaymentMethod::Other,
        }
    }
}

impl PaymentMethod {
    /// Every method, in the order they are offered to users
    pub const ALL: [PaymentMethod; 5] = [
        Self::Cash,
        Self::Upi,
        Self::Card,
        Self::BankTransfer,
        Self::Other,
    ];

    /// Canonical display name, also the value stored in the ledger
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::Card => "Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive exact match of a phrase against every method
    pub fn match_phrase(phrase: &str) -> PaymentMatch {
        let phrase = phrase.trim();
        for method in Self::ALL {
            if method.name().eq_ignore_ascii_case(phrase) {
                return PaymentMatch::Found(method);
            }
        }
        PaymentMatch::NotFound
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_every_method() {
        for method in PaymentMethod::ALL {
            let phrase = method.name().to_lowercase();
            assert_eq!(PaymentMethod::match_phrase(&phrase), PaymentMatch::Found(method));
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            PaymentMethod::match_phrase("upi"),
            PaymentMatch::Found(PaymentMethod::Upi)
        );
        assert_eq!(
            PaymentMethod::match_phrase("BANK transfer"),
            PaymentMatch::Found(PaymentMethod::BankTransfer)
        );
    }

    #[test]
    fn test_unknown_resolves_to_other() {
        let matched = PaymentMethod::match_phrase("xyz");
        assert_eq!(matched, PaymentMatch::NotFound);
        assert_eq!(matched.resolve(), PaymentMethod::Other);
        assert_eq!(PaymentMethod::match_phrase("").resolve(), PaymentMethod::Other);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "Bank Transfer");
        let json = serde_json::to_string(&PaymentMethod::Upi).unwrap();
        assert_eq!(json, "\"UPI\"");
    }
}
