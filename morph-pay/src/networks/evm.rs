use std::{
    borrow::Cow,
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::core::{Address, Asset, NativeCurrency, NetworkFamily};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmNetwork {
    pub name: Cow<'static, str>,
    pub chain_id: u64,
    pub network_id: Cow<'static, str>,
}

impl NetworkFamily for EvmNetwork {
    fn network_name(&self) -> &str {
        &self.name
    }

    fn network_id(&self) -> &str {
        &self.network_id
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(pub alloy_primitives::Address);

impl From<alloy_primitives::Address> for EvmAddress {
    fn from(addr: alloy_primitives::Address) -> Self {
        EvmAddress(addr)
    }
}

impl From<EvmAddress> for alloy_primitives::Address {
    fn from(addr: EvmAddress) -> Self {
        addr.0
    }
}

impl FromStr for EvmAddress {
    type Err = alloy_primitives::AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = alloy_primitives::Address::from_str(s.trim())?;
        Ok(EvmAddress(addr))
    }
}

impl Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EvmAddress({})", self.0)
    }
}

impl Serialize for EvmAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EvmAddress::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Address for EvmAddress {
    type Network = EvmNetwork;
}

pub type EvmAsset = Asset<EvmAddress>;

/// An EVM network known at compile time.
pub trait ExplicitEvmNetwork {
    const NETWORK: EvmNetwork;
    const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::ETHER;
}

/// A token contract known at compile time, bound to its network.
pub trait ExplicitEvmAsset {
    type Network: ExplicitEvmNetwork;

    const ASSET: EvmAsset;
}

impl<T> From<T> for EvmNetwork
where
    T: ExplicitEvmNetwork,
{
    fn from(_: T) -> Self {
        T::NETWORK
    }
}

pub mod networks {
    use super::*;

    macro_rules! define_explicit_evm_network {
        ($struct_name:ident, $name:literal, $chain_id:literal) => {
            pub struct $struct_name;

            impl ExplicitEvmNetwork for $struct_name {
                const NETWORK: EvmNetwork = EvmNetwork {
                    name: Cow::Borrowed($name),
                    chain_id: $chain_id,
                    network_id: Cow::Borrowed(concat!("eip155:", $chain_id)),
                };
            }
        };
    }

    define_explicit_evm_network!(MorphHolesky, "morph-holesky", 2810);
    define_explicit_evm_network!(Ethereum, "ethereum", 1);
    define_explicit_evm_network!(EthereumSepolia, "ethereum-sepolia", 11155111);
    define_explicit_evm_network!(Base, "base", 8453);
    define_explicit_evm_network!(BaseSepolia, "base-sepolia", 84532);
}

pub mod assets {
    use alloy_primitives::address;

    use super::*;

    macro_rules! define_explicit_evm_asset {
        (
            $struct_name:ident,
            $network_struct:ty,
            $addr:expr,
            $decimals:expr,
            $name:expr,
            $symbol:expr
        ) => {
            pub struct $struct_name;

            impl ExplicitEvmAsset for $struct_name {
                type Network = $network_struct;

                const ASSET: EvmAsset = EvmAsset {
                    address: EvmAddress(address!($addr)),
                    decimals: $decimals,
                    name: Cow::Borrowed($name),
                    symbol: Cow::Borrowed($symbol),
                };
            }
        };
    }

    macro_rules! define_explicit_usdc {
        ($struct_name:ident, $network_struct:ty, $addr:expr) => {
            define_explicit_evm_asset!($struct_name, $network_struct, $addr, 6, "USD Coin", "USDC");
        };
    }

    macro_rules! define_explicit_usdt {
        ($struct_name:ident, $network_struct:ty, $addr:expr) => {
            define_explicit_evm_asset!(
                $struct_name,
                $network_struct,
                $addr,
                6,
                "Tether USD",
                "USDT"
            );
        };
    }

    define_explicit_usdt!(
        UsdtMorphHolesky,
        networks::MorphHolesky,
        "0x07d9b60c7F719994c07C96a7f87460a0cC94379F"
    );

    define_explicit_usdc!(
        UsdcMorphHolesky,
        networks::MorphHolesky,
        "0xe3B620B1557696DA5324EFcA934Ea6c27ad69e00"
    );

    define_explicit_usdt!(
        UsdtEthereum,
        networks::Ethereum,
        "0xdAC17F958D2ee523a2206206994597C13D831ec7"
    );

    define_explicit_usdc!(
        UsdcEthereum,
        networks::Ethereum,
        "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
    );

    define_explicit_usdc!(
        UsdcEthereumSepolia,
        networks::EthereumSepolia,
        "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"
    );

    define_explicit_usdc!(
        UsdcBase,
        networks::Base,
        "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"
    );

    define_explicit_usdc!(
        UsdcBaseSepolia,
        networks::BaseSepolia,
        "0x036CbD53842c5426634e7929541eC2318f3dCF7e"
    );
}

#[cfg(test)]
mod tests {
    use super::{assets::*, networks::*, *};

    #[test]
    fn test_morph_holesky_presets() {
        let network = MorphHolesky::NETWORK;
        assert_eq!(network.network_name(), "morph-holesky");
        assert_eq!(network.network_id(), "eip155:2810");
        assert_eq!(network.chain_id, 2810);
        assert_eq!(MorphHolesky::NATIVE_CURRENCY.decimals, 18);

        let usdt = UsdtMorphHolesky::ASSET;
        assert_eq!(usdt.decimals, 6);
        assert_eq!(usdt.symbol, "USDT");
        assert!(
            usdt.address
                .to_string()
                .eq_ignore_ascii_case("0x07d9b60c7F719994c07C96a7f87460a0cC94379F")
        );

        let usdc: EvmAsset = UsdcMorphHolesky::ASSET;
        assert_eq!(usdc.decimals, 6);
        assert_eq!(usdc.symbol, "USDC");
    }

    #[test]
    fn test_address_serde() {
        let addr: EvmAddress = "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20".parse().unwrap();
        let json = serde_json::to_value(addr).unwrap();
        assert_eq!(
            json.as_str().map(str::to_lowercase).as_deref(),
            Some("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
        );

        let back: EvmAddress = serde_json::from_value(json).unwrap();
        assert_eq!(back, addr);

        assert!("0x1234".parse::<EvmAddress>().is_err());
    }
}
