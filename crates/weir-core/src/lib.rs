//! # weir-core
//! Foundation types for the Weir fee-bumping toolkit: transactions,
//! fee-rate arithmetic, and the ancestor-aware unconfirmed transaction
//! pool.

pub mod constants;
pub mod error;
pub mod feerate;
pub mod mempool;
pub mod types;
