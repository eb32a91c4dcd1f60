//! Network-specific implementations.

pub mod evm;
