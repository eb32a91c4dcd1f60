use alloy_network::TransactionBuilder;
use alloy_primitives::Address as AlloyAddress;
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_transport::TransportError;

use crate::{
    networks::evm::EvmAddress,
    transfer::{ContractCall, NativeTransfer},
    types::TransactionId,
    wallet::{WalletError, WalletSession},
};

/// A wallet session backed by an alloy [`Provider`] whose node or filler signs for `account`.
///
/// The session is connected once an account is set, either explicitly with
/// [`connect`](ProviderSession::connect) or from the provider's own accounts with
/// [`connect_first_account`](ProviderSession::connect_first_account).
#[derive(Debug, Clone)]
pub struct ProviderSession<P> {
    provider: P,
    account: Option<AlloyAddress>,
}

impl<P: Provider> ProviderSession<P> {
    /// A session that is not connected yet.
    pub fn new(provider: P) -> Self {
        ProviderSession {
            provider,
            account: None,
        }
    }

    pub fn connect(&mut self, account: impl Into<EvmAddress>) {
        self.account = Some(account.into().0);
    }

    pub fn disconnect(&mut self) {
        self.account = None;
    }

    pub fn account(&self) -> Option<EvmAddress> {
        self.account.map(EvmAddress)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Connects to the first account exposed by the provider, if it has any.
    pub async fn connect_first_account(&mut self) -> Result<Option<EvmAddress>, WalletError> {
        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(transport_error)?;
        self.account = accounts.first().copied();
        Ok(self.account())
    }

    async fn send(&self, request: TransactionRequest) -> Result<TransactionId, WalletError> {
        let from = self.account.ok_or(WalletError::NotConnected)?;
        let pending = self
            .provider
            .send_transaction(request.with_from(from))
            .await
            .map_err(transport_error)?;
        let hash = *pending.tx_hash();

        #[cfg(feature = "tracing")]
        tracing::debug!("Transaction submitted: from='{}', hash='{}'", from, hash);

        Ok(TransactionId(hash.to_string()))
    }
}

impl<P: Provider> WalletSession for ProviderSession<P> {
    fn has_session(&self) -> bool {
        self.account.is_some()
    }

    async fn send_native(&self, transfer: &NativeTransfer) -> Result<TransactionId, WalletError> {
        let request = TransactionRequest::default()
            .with_to(transfer.to.0)
            .with_value(transfer.value)
            .with_chain_id(transfer.chain_id);
        self.send(request).await
    }

    async fn send_contract_call(&self, call: &ContractCall) -> Result<TransactionId, WalletError> {
        let request = TransactionRequest::default()
            .with_to(call.contract.0)
            .with_input(call.data.clone())
            .with_chain_id(call.chain_id);
        self.send(request).await
    }
}

fn transport_error(err: TransportError) -> WalletError {
    match err.as_error_resp() {
        Some(payload) => WalletError::from_rpc(payload.code, payload.message.to_string()),
        None => WalletError::Failed(err.to_string()),
    }
}
