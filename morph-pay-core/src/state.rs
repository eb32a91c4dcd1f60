//! Submission state of a single payment attempt.

use serde::{Deserialize, Serialize};

use crate::types::TransactionId;

/// Where the current attempt stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    /// No wallet session; the user was asked to connect.
    AwaitingWallet,
    /// The transaction was handed to the wallet and has not resolved yet.
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Outcome of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionResult {
    Success(TransactionId),
    Failure(String),
}

impl SubmissionResult {
    pub fn transaction(&self) -> Option<&TransactionId> {
        match self {
            SubmissionResult::Success(tx) => Some(tx),
            SubmissionResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success(_) => None,
            SubmissionResult::Failure(message) => Some(message),
        }
    }

    /// The state an attempt ends in with this result.
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmissionResult::Success(_) => SubmissionState::Succeeded,
            SubmissionResult::Failure(_) => SubmissionState::Failed,
        }
    }
}
