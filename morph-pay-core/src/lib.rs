//! Morph Pay core library.
//!
//! This library provides the network-agnostic types shared by the Morph Pay crates:
//! payment requests, amount scaling, submission state and the error taxonomy.

pub mod core;
pub mod errors;
pub mod state;
pub mod types;
