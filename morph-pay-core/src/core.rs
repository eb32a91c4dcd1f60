//! Core traits and types used across Morph Pay.

use std::{borrow::Cow, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// A series of network families, e.g. EVM.
pub trait NetworkFamily {
    /// The name of the network in the family.
    fn network_name(&self) -> &str;

    /// The Blockchain network identifier in CAIP-2 format (e.g., "eip155:2810")
    fn network_id(&self) -> &str;
}

/// Network-specific address type.
pub trait Address: FromStr + Display + Copy {
    /// The network family this address belongs to.
    type Network: NetworkFamily;
}

/// Represents a token deployed at a given address.
///
/// Names are `Cow` so that assets can be declared as constants and also loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset<A: Address> {
    pub address: A,
    pub decimals: u8,
    pub name: Cow<'static, str>,
    pub symbol: Cow<'static, str>,
}

/// The base currency of a network, transferred by value rather than through a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: Cow<'static, str>,
    pub symbol: Cow<'static, str>,
    pub decimals: u8,
}

impl NativeCurrency {
    /// Ether with 18 decimals, used by Ethereum and most EVM rollups.
    pub const ETHER: NativeCurrency = NativeCurrency {
        name: Cow::Borrowed("Ether"),
        symbol: Cow::Borrowed("ETH"),
        decimals: 18,
    };
}
