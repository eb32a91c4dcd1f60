//! The wallet session collaborator that signs and submits transfers.

use std::sync::Arc;

use crate::{
    errors::PaymentError,
    transfer::{ContractCall, NativeTransfer, TransferTx},
    types::TransactionId,
};

#[cfg(feature = "provider")]
mod provider;

#[cfg(feature = "provider")]
pub use provider::ProviderSession;

/// EIP-1193 error code for a request the user rejected.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors reported by a wallet session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// No account is connected.
    #[error("Wallet is not connected")]
    NotConnected,
    /// The user declined to sign.
    #[error("{0}")]
    Rejected(String),
    /// Anything else: transport, node or signing failures.
    #[error("{0}")]
    Failed(String),
}

impl WalletError {
    /// Classifies a JSON-RPC error by its code.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            WalletError::Rejected(message.into())
        } else {
            WalletError::Failed(message.into())
        }
    }
}

impl From<WalletError> for PaymentError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NotConnected => PaymentError::NoWalletSession,
            WalletError::Rejected(message) => PaymentError::SubmissionRejected(message),
            WalletError::Failed(message) => PaymentError::SubmissionFailed(message),
        }
    }
}

/// A connected, authorized signing identity able to submit transactions.
///
/// Implementations own connection management; submission futures resolve once the wallet
/// has accepted or rejected the transaction, not when it is confirmed on chain.
pub trait WalletSession {
    /// Whether a signing session is currently available.
    fn has_session(&self) -> bool;

    /// Submits a native value transfer.
    fn send_native(
        &self,
        transfer: &NativeTransfer,
    ) -> impl Future<Output = Result<TransactionId, WalletError>>;

    /// Submits a contract call with encoded call data.
    fn send_contract_call(
        &self,
        call: &ContractCall,
    ) -> impl Future<Output = Result<TransactionId, WalletError>>;

    /// Submits whichever kind of transfer `tx` is.
    fn submit(&self, tx: &TransferTx) -> impl Future<Output = Result<TransactionId, WalletError>> {
        async move {
            match tx {
                TransferTx::Native(transfer) => self.send_native(transfer).await,
                TransferTx::ContractCall(call) => self.send_contract_call(call).await,
            }
        }
    }
}

impl<W: WalletSession> WalletSession for &W {
    fn has_session(&self) -> bool {
        (**self).has_session()
    }

    fn send_native(
        &self,
        transfer: &NativeTransfer,
    ) -> impl Future<Output = Result<TransactionId, WalletError>> {
        (**self).send_native(transfer)
    }

    fn send_contract_call(
        &self,
        call: &ContractCall,
    ) -> impl Future<Output = Result<TransactionId, WalletError>> {
        (**self).send_contract_call(call)
    }
}

impl<W: WalletSession> WalletSession for Arc<W> {
    fn has_session(&self) -> bool {
        (**self).has_session()
    }

    fn send_native(
        &self,
        transfer: &NativeTransfer,
    ) -> impl Future<Output = Result<TransactionId, WalletError>> {
        (**self).send_native(transfer)
    }

    fn send_contract_call(
        &self,
        call: &ContractCall,
    ) -> impl Future<Output = Result<TransactionId, WalletError>> {
        (**self).send_contract_call(call)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy_primitives::{Bytes, U256, address};

    use crate::networks::evm::EvmAddress;

    use super::*;

    #[derive(Default)]
    struct RecordingWallet {
        sent: Mutex<Vec<TransferTx>>,
    }

    impl WalletSession for RecordingWallet {
        fn has_session(&self) -> bool {
            true
        }

        async fn send_native(&self, transfer: &NativeTransfer) -> Result<TransactionId, WalletError> {
            self.sent
                .lock()
                .unwrap()
                .push(TransferTx::Native(transfer.clone()));
            Ok(TransactionId::from("0x01"))
        }

        async fn send_contract_call(&self, call: &ContractCall) -> Result<TransactionId, WalletError> {
            self.sent
                .lock()
                .unwrap()
                .push(TransferTx::ContractCall(call.clone()));
            Err(WalletError::from_rpc(4001, "User rejected the request."))
        }
    }

    #[tokio::test]
    async fn test_submit_dispatches_by_kind() {
        let wallet = Arc::new(RecordingWallet::default());
        let to = EvmAddress(address!("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20"));

        let native = TransferTx::Native(NativeTransfer {
            to,
            value: U256::from(1u64),
            chain_id: 2810,
        });
        let call = TransferTx::ContractCall(ContractCall {
            contract: to,
            data: Bytes::from_static(&[0xa9, 0x05, 0x9c, 0xbb]),
            chain_id: 2810,
        });

        assert_eq!(
            wallet.submit(&native).await,
            Ok(TransactionId::from("0x01"))
        );
        assert_eq!(
            wallet.submit(&call).await,
            Err(WalletError::Rejected("User rejected the request.".to_string()))
        );
        assert_eq!(*wallet.sent.lock().unwrap(), vec![native, call]);
    }

    #[test]
    fn test_wallet_error_mapping() {
        assert_eq!(
            PaymentError::from(WalletError::from_rpc(4001, "denied")),
            PaymentError::SubmissionRejected("denied".to_string())
        );
        assert_eq!(
            PaymentError::from(WalletError::from_rpc(-32000, "insufficient funds")),
            PaymentError::SubmissionFailed("insufficient funds".to_string())
        );
        assert_eq!(
            PaymentError::from(WalletError::NotConnected),
            PaymentError::NoWalletSession
        );
    }
}
