//! # weir-wallet — wallet-side fee logic for Weir.
//!
//! Provides package-aware bump fee estimation: given wallet UTXOs that sit
//! on unconfirmed transactions, compute how much additional fee a spending
//! transaction must contribute to lift those transactions (and their
//! unconfirmed ancestors) to a target fee rate.
//!
//! # Modules
//!
//! - [`fee_bump`] — `BumpFeeCalculator`, block-template simulation over a
//!   pool snapshot

pub mod fee_bump;

// Re-exports for convenient access
pub use fee_bump::BumpFeeCalculator;
