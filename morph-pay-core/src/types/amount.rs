//! Payment amounts: caller input, exact decimal parsing and scaling to base units.
//!
//! Amounts always pass through their string form before conversion, so a numeric input
//! such as `1.1` is converted from `"1.1"` rather than from its binary float value.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount as supplied by the caller, either as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<u64> for AmountInput {
    fn from(value: u64) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<u32> for AmountInput {
    fn from(value: u32) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Text(text) => write!(f, "{}", text.trim()),
            AmountInput::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Errors that can occur when converting an amount to base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input is not a plain decimal number.
    #[error("Invalid amount '{input}'")]
    InvalidFormat { input: String },
    /// Negative values are not allowed.
    #[error("Negative amount is not allowed")]
    Negative,
    /// The input has more fractional digits than the asset supports.
    #[error("Too big of a precision: {scale} decimal places vs {decimals} on asset")]
    TooPrecise { scale: u32, decimals: u8 },
    /// The scaled value does not fit in 256 bits.
    #[error("Amount overflows 256 bits when scaled by 10^{decimals}")]
    Overflow { decimals: u8 },
    /// More than 28 significant digits.
    #[error("Amount '{input}' has more significant digits than supported")]
    TooManyDigits { input: String },
}

/// A non-negative decimal amount in whole units of an asset, e.g. `1.5` ETH.
///
/// Trailing zeros are dropped on parse, so `"2.500000"` has scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAmount(Decimal);

impl DecimalAmount {
    /// Parses a decimal string without rounding.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if !is_plain_decimal(trimmed) {
            return Err(AmountError::InvalidFormat {
                input: trimmed.to_string(),
            });
        }
        // Syntax is already checked, so a failure here is the 96-bit mantissa limit.
        let parsed = Decimal::from_str_exact(trimmed).map_err(|_| AmountError::TooManyDigits {
            input: trimmed.to_string(),
        })?;

        if parsed.is_sign_negative() && !parsed.is_zero() {
            return Err(AmountError::Negative);
        }

        Ok(DecimalAmount(parsed.abs().normalize()))
    }

    /// Number of significant decimal places.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// The value without its decimal point, e.g. `12.34` returns `1234`.
    pub fn mantissa(&self) -> u128 {
        self.0.mantissa().unsigned_abs()
    }

    /// Converts to the integer count of the asset's smallest unit.
    ///
    /// Fails rather than truncating when the amount is more precise than `decimals`.
    pub fn to_base_units(&self, decimals: u8) -> Result<U256, AmountError> {
        let scale = self.scale();
        let token_scale = u32::from(decimals);
        if scale > token_scale {
            return Err(AmountError::TooPrecise { scale, decimals });
        }

        U256::from(10u8)
            .checked_pow(U256::from(token_scale - scale))
            .and_then(|multiplier| U256::from(self.mantissa()).checked_mul(multiplier))
            .ok_or(AmountError::Overflow { decimals })
    }
}

/// An optional leading `-`, then ASCII digits with at most one `.` and at least one digit.
fn is_plain_decimal(input: &str) -> bool {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    let mut digits = 0;
    let mut dots = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

impl FromStr for DecimalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecimalAmount::parse(s)
    }
}

impl TryFrom<&AmountInput> for DecimalAmount {
    type Error = AmountError;

    fn try_from(value: &AmountInput) -> Result<Self, Self::Error> {
        DecimalAmount::parse(&value.to_string())
    }
}

impl Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
