//! Core types used across Morph Pay.

mod amount;
mod common;
mod request;

pub use amount::*;
pub use common::*;
pub use request::*;
