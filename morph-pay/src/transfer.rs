//! Transfer construction: a [`PaymentRequest`] becomes either a native value transfer or
//! an ERC-20 `transfer` call directed at the token contract.

use alloy_core::{sol, sol_types::SolCall};
use alloy_primitives::{Bytes, U256};
use serde::Serialize;

use crate::{
    config::ChainConfig,
    currency::{AssetKind, Currency, Stablecoin},
    errors::{EncodingError, PaymentError},
    networks::evm::EvmAddress,
    types::{DecimalAmount, PaymentRequest},
};

sol!(
    /// The subset of the ERC-20 interface used to pay with a token.
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
    }
);

/// A plain value transfer of the native coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
    pub to: EvmAddress,
    /// Value in the native coin's smallest unit (wei).
    pub value: U256,
    pub chain_id: u64,
}

/// A call to a token contract carrying encoded call data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub contract: EvmAddress,
    pub data: Bytes,
    pub chain_id: u64,
}

/// A transaction ready to be handed to a wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransferTx {
    Native(NativeTransfer),
    ContractCall(ContractCall),
}

impl TransferTx {
    /// Builds the transfer for `request` on the configured network.
    ///
    /// `selected` resolves the `USD` meta-currency. The asset is resolved first, so an
    /// unsupported currency is reported even when the address or amount is also invalid.
    pub fn build(
        config: &ChainConfig,
        request: &PaymentRequest,
        selected: Stablecoin,
    ) -> Result<Self, PaymentError> {
        let currency: Currency = request.currency.parse()?;
        let kind = currency.resolve(selected);

        let token = match kind {
            AssetKind::Native => None,
            AssetKind::Stablecoin(stablecoin) => Some(
                config
                    .stablecoin(stablecoin)
                    .ok_or_else(|| PaymentError::UnsupportedAsset(stablecoin.to_string()))?,
            ),
        };

        let to: EvmAddress =
            request
                .pay_to
                .parse()
                .map_err(|err: alloy_primitives::AddressError| EncodingError::Address {
                    input: request.pay_to.clone(),
                    reason: err.to_string(),
                })?;
        let amount = DecimalAmount::try_from(&request.amount)?;

        let tx = match token {
            None => TransferTx::Native(NativeTransfer {
                to,
                value: amount.to_base_units(config.native_currency.decimals)?,
                chain_id: config.chain_id(),
            }),
            Some(asset) => {
                let call = IERC20::transferCall {
                    to: to.0,
                    amount: amount.to_base_units(asset.decimals)?,
                };
                TransferTx::ContractCall(ContractCall {
                    contract: asset.address,
                    data: call.abi_encode().into(),
                    chain_id: config.chain_id(),
                })
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Built {} transfer: to='{}', amount='{}', chain_id={}",
            currency,
            to,
            amount,
            config.chain_id()
        );

        Ok(tx)
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            TransferTx::Native(native) => native.chain_id,
            TransferTx::ContractCall(call) => call.chain_id,
        }
    }
}
