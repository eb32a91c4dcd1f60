//! Explicit chain configuration passed to the payment builder.

use bon::Builder;
use serde::{Deserialize, Serialize};
use url::Url;
use url_macro::url;

use crate::{
    core::NativeCurrency,
    currency::Stablecoin,
    networks::evm::{
        EvmAsset, EvmNetwork, ExplicitEvmAsset, ExplicitEvmNetwork,
        assets::{UsdcBaseSepolia, UsdcMorphHolesky, UsdtMorphHolesky},
        networks::{BaseSepolia, MorphHolesky},
    },
    types::TransactionId,
};

/// Everything the payment builder needs to know about the target network.
///
/// ```
/// use morph_pay::{config::ChainConfig, currency::Stablecoin};
///
/// let config = ChainConfig::morph_holesky();
/// assert_eq!(config.chain_id(), 2810);
/// assert_eq!(config.stablecoin(Stablecoin::Usdt).unwrap().decimals, 6);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// The target network.
    #[builder(into)]
    pub network: EvmNetwork,
    /// Native currency metadata; decimals drive native value scaling.
    #[builder(default = NativeCurrency::ETHER)]
    #[serde(default = "ether")]
    pub native_currency: NativeCurrency,
    /// JSON-RPC endpoint for wallets that need one.
    pub rpc_url: Option<Url>,
    /// Block explorer base URL, used for transaction links.
    pub explorer_url: Option<Url>,
    /// USDT deployment, if any.
    pub usdt: Option<EvmAsset>,
    /// USDC deployment, if any.
    pub usdc: Option<EvmAsset>,
}

fn ether() -> NativeCurrency {
    NativeCurrency::ETHER
}

impl ChainConfig {
    /// Morph Holesky testnet with its USDT and USDC deployments.
    pub fn morph_holesky() -> Self {
        ChainConfig {
            network: MorphHolesky::NETWORK,
            native_currency: MorphHolesky::NATIVE_CURRENCY,
            rpc_url: Some(url!("https://rpc-quicknode-holesky.morphl2.io")),
            explorer_url: Some(url!("https://explorer-holesky.morphl2.io")),
            usdt: Some(UsdtMorphHolesky::ASSET),
            usdc: Some(UsdcMorphHolesky::ASSET),
        }
    }

    /// Base Sepolia testnet. Only USDC is deployed.
    pub fn base_sepolia() -> Self {
        ChainConfig {
            network: BaseSepolia::NETWORK,
            native_currency: BaseSepolia::NATIVE_CURRENCY,
            rpc_url: Some(url!("https://sepolia.base.org")),
            explorer_url: Some(url!("https://sepolia.basescan.org")),
            usdt: None,
            usdc: Some(UsdcBaseSepolia::ASSET),
        }
    }

    /// A configuration for any compile-time network, without stablecoins.
    pub fn for_network<N: ExplicitEvmNetwork>() -> Self {
        ChainConfig {
            network: N::NETWORK,
            native_currency: N::NATIVE_CURRENCY,
            rpc_url: None,
            explorer_url: None,
            usdt: None,
            usdc: None,
        }
    }

    /// Sets a stablecoin deployment from a compile-time asset.
    pub fn with_stablecoin<A: ExplicitEvmAsset>(mut self, stablecoin: Stablecoin, _asset: A) -> Self {
        let asset = Some(A::ASSET);
        match stablecoin {
            Stablecoin::Usdt => self.usdt = asset,
            Stablecoin::Usdc => self.usdc = asset,
        }
        self
    }

    /// Loads a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn chain_id(&self) -> u64 {
        self.network.chain_id
    }

    /// The deployment of `stablecoin` on this network, if there is one.
    pub fn stablecoin(&self, stablecoin: Stablecoin) -> Option<&EvmAsset> {
        match stablecoin {
            Stablecoin::Usdt => self.usdt.as_ref(),
            Stablecoin::Usdc => self.usdc.as_ref(),
        }
    }

    /// Explorer link for a transaction: `<explorer>/tx/<id>`.
    pub fn tx_url(&self, tx: &TransactionId) -> Option<Url> {
        let mut url = self.explorer_url.clone()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("tx")
            .push(tx.as_str());
        Some(url)
    }
}
