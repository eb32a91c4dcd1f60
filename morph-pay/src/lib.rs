//! # Morph Pay
//!
//! Morph Pay builds native coin and stablecoin payments and submits them through a connected
//! EVM wallet. It is the engine behind the `morph-pay-widget` crate, and can be used directly by
//! anything that holds a wallet session.
//!
//! ## Core Components Overview
//!
//! - **[`core`]**, **[`types`]**, **[`state`]**, **[`errors`]**: Network-agnostic types shared
//!   with `morph-pay-core`.
//! - **[`networks`]**: EVM networks, addresses and token presets, e.g. Morph Holesky USDT / USDC.
//! - **[`config`]**: The explicit [`ChainConfig`](config::ChainConfig) passed to the builder.
//! - **[`currency`]**: Currency codes (`ETH`, `USDT`, `USDC`, `USD`) and their resolution.
//! - **[`transfer`]**: Turning a payment request into a native transfer or an ERC-20 call.
//! - **[`wallet`]**: The [`WalletSession`](wallet::WalletSession) collaborator, and a
//!   provider-backed session behind the `provider` feature.
//!
//! ## Building a Transfer
//!
//! ```
//! use alloy_primitives::U256;
//! use morph_pay::{
//!     config::ChainConfig,
//!     currency::Stablecoin,
//!     transfer::TransferTx,
//!     types::PaymentRequest,
//! };
//!
//! let config = ChainConfig::morph_holesky();
//! let request = PaymentRequest::builder()
//!     .pay_to("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
//!     .amount("1.5")
//!     .currency("ETH")
//!     .build();
//!
//! let TransferTx::Native(transfer) = TransferTx::build(&config, &request, Stablecoin::Usdc).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(transfer.value, U256::from(1_500_000_000_000_000_000u128));
//! assert_eq!(transfer.chain_id, 2810);
//! ```
//!
//! ## New Networks and Assets
//!
//! Networks and tokens are declared, not registered. Any EVM network can be targeted by
//! declaring it and building a [`ChainConfig`](config::ChainConfig) for it:
//!
//! ```
//! use std::borrow::Cow;
//!
//! use alloy_primitives::address;
//! use morph_pay::{
//!     config::ChainConfig,
//!     currency::Stablecoin,
//!     networks::evm::{EvmAddress, EvmAsset, EvmNetwork, ExplicitEvmAsset, ExplicitEvmNetwork},
//! };
//!
//! struct Polygon;
//! impl ExplicitEvmNetwork for Polygon {
//!     const NETWORK: EvmNetwork = EvmNetwork {
//!         name: Cow::Borrowed("polygon"),
//!         chain_id: 137,
//!         network_id: Cow::Borrowed("eip155:137"),
//!     };
//! }
//!
//! struct UsdcPolygon;
//! impl ExplicitEvmAsset for UsdcPolygon {
//!     type Network = Polygon;
//!     const ASSET: EvmAsset = EvmAsset {
//!         address: EvmAddress(address!("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359")),
//!         decimals: 6,
//!         name: Cow::Borrowed("USD Coin"),
//!         symbol: Cow::Borrowed("USDC"),
//!     };
//! }
//!
//! let config = ChainConfig::for_network::<Polygon>().with_stablecoin(Stablecoin::Usdc, UsdcPolygon);
//! assert_eq!(config.chain_id(), 137);
//! ```

pub mod core {
    pub use morph_pay_core::core::*;
}

pub mod types {
    pub use morph_pay_core::types::*;
}

pub mod state {
    pub use morph_pay_core::state::*;
}

pub mod errors {
    pub use morph_pay_core::errors::*;
}

pub mod config;
pub mod currency;
pub mod networks;
pub mod transfer;
pub mod wallet;
