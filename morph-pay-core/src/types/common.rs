//! Miscellaneous common types used throughout the Morph Pay codebase.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Opaque transaction identifier returned by a wallet after submission.
///
/// On EVM networks this is the `0x`-prefixed transaction hash.
///
/// ```
/// use morph_pay_core::types::TransactionId;
///
/// let tx = TransactionId::from("0xdeadbeef");
/// assert_eq!(tx.to_string(), "0xdeadbeef");
/// assert_eq!(serde_json::to_value(&tx).unwrap(), serde_json::json!("0xdeadbeef"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        TransactionId(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        TransactionId(value.to_string())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionId({})", self.0)
    }
}
