use crate::types::AmountError;

/// Errors that end a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// No wallet session is available; the user needs to connect first.
    #[error("Please connect your wallet.")]
    NoWalletSession,

    /// Another attempt is still waiting on the wallet.
    #[error("A payment is already in progress")]
    AttemptInFlight,

    /// The currency is unknown, or not deployed on the configured network.
    #[error("Unsupported currency: {0}")]
    UnsupportedAsset(String),

    /// The request could not be turned into a transaction.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The user declined the request in their wallet.
    #[error("{0}")]
    SubmissionRejected(String),

    /// The wallet or the network failed to accept the transaction.
    #[error("{0}")]
    SubmissionFailed(String),
}

impl PaymentError {
    /// Whether this error is reported to error callbacks.
    ///
    /// A missing wallet session is shown as a connect prompt instead, and an attempt
    /// rejected for being concurrent leaves the running one untouched.
    pub fn is_reportable(&self) -> bool {
        !matches!(
            self,
            PaymentError::NoWalletSession | PaymentError::AttemptInFlight
        )
    }
}

impl From<AmountError> for PaymentError {
    fn from(err: AmountError) -> Self {
        PaymentError::Encoding(EncodingError::Amount(err))
    }
}

/// Failures while building the transfer payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("Invalid destination address '{input}': {reason}")]
    Address { input: String, reason: String },
}

/// A specialized `Result` type for payment attempts.
pub type Result<T> = std::result::Result<T, PaymentError>;
