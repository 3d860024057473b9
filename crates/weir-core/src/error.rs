//! Error types for weir-core.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("serialization: {0}")] Serialization(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MempoolError {
    #[error("transaction already in pool: {0}")] AlreadyExists(String),
    #[error("conflicts with pool tx {existing_txid} on outpoint {outpoint}")] Conflict { new_txid: String, existing_txid: String, outpoint: String },
    #[error("fee too low: {fee} < minimum {minimum}")] FeeTooLow { fee: u64, minimum: u64 },
    #[error("coinbase transactions cannot enter the pool")] Coinbase,
    #[error("internal: {0}")] Internal(String),
}
