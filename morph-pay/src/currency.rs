//! Caller-facing currency codes and their resolution to a concrete asset.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::PaymentError;

/// A supported stablecoin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stablecoin {
    Usdt,
    #[default]
    Usdc,
}

impl Stablecoin {
    pub const ALL: [Stablecoin; 2] = [Stablecoin::Usdt, Stablecoin::Usdc];

    pub fn symbol(&self) -> &'static str {
        match self {
            Stablecoin::Usdt => "USDT",
            Stablecoin::Usdc => "USDC",
        }
    }
}

impl Display for Stablecoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Currency code accepted from integrators.
///
/// `Usd` is a meta-currency: the stablecoin is picked by the user at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// The network's native coin.
    Eth,
    Usdt,
    Usdc,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eth => "ETH",
            Currency::Usdt => "USDT",
            Currency::Usdc => "USDC",
            Currency::Usd => "USD",
        }
    }

    /// Resolves to the asset that will actually be transferred.
    ///
    /// `selected` is only consulted for [`Currency::Usd`].
    pub fn resolve(&self, selected: Stablecoin) -> AssetKind {
        match self {
            Currency::Eth => AssetKind::Native,
            Currency::Usdt => AssetKind::Stablecoin(Stablecoin::Usdt),
            Currency::Usdc => AssetKind::Stablecoin(Stablecoin::Usdc),
            Currency::Usd => AssetKind::Stablecoin(selected),
        }
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Currency::Eth, Currency::Usdt, Currency::Usdc, Currency::Usd]
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaymentError::UnsupportedAsset(s.to_string()))
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The transfer path exercised by a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Native,
    Stablecoin(Stablecoin),
}
