//! In-memory pool of unconfirmed transactions.
//!
//! The pool stores validated transactions indexed by txid and by spent
//! outpoint, and tracks for every entry the fee and size of its ancestor
//! package: the transaction plus all of its in-pool ancestors. Ancestor
//! data is computed once at insertion; later insertions can only add
//! descendants, which never change an existing entry's ancestor set, so
//! the aggregates stay exact without invalidation. Removal is recursive
//! (a transaction leaves together with all of its descendants) for the
//! same reason.
//!
//! It provides:
//! - O(1) lookup by txid
//! - O(1) conflict detection via the spent-outpoint index
//! - cluster and descendant enumeration over the parent/child graph
//!
//! Transactions must be validated by the caller before insertion. The
//! pool only checks for duplicates, input conflicts, coinbase shape, and
//! the minimum fee. Inputs whose prevout transaction is not in the pool
//! are treated as confirmed.
//!
//! Not thread-safe — callers that share a pool across threads wrap it in
//! a `Mutex`. The fee-bump estimator in `weir-wallet` does exactly that
//! and holds the lock only while snapshotting.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::constants::MIN_TX_FEE;
use crate::error::MempoolError;
use crate::types::{Hash256, OutPoint, Transaction};

/// A transaction stored in the pool with precomputed metadata.
#[derive(Debug, Clone)]
pub struct MempoolEntry {
    /// The unconfirmed transaction.
    pub tx: Transaction,
    /// Precomputed transaction ID.
    pub txid: Hash256,
    /// Transaction fee in rills.
    pub fee: u64,
    /// Serialized size in bytes.
    pub size: usize,
    /// Fee of this transaction plus all of its in-pool ancestors.
    ancestor_fee: u64,
    /// Size of this transaction plus all of its in-pool ancestors.
    ancestor_size: usize,
}

impl MempoolEntry {
    /// Fee of this transaction plus all of its in-pool ancestors, in rills.
    pub fn ancestor_fee(&self) -> u64 {
        self.ancestor_fee
    }

    /// Serialized size of this transaction plus all of its in-pool
    /// ancestors, in bytes.
    pub fn ancestor_size(&self) -> usize {
        self.ancestor_size
    }
}

/// In-memory pool of unconfirmed transactions with ancestor tracking.
pub struct Mempool {
    /// Primary storage: txid → entry.
    entries: HashMap<Hash256, MempoolEntry>,
    /// Spent outpoint → txid of the pool transaction that spends it.
    by_outpoint: HashMap<OutPoint, Hash256>,
    /// Parent txid → in-pool transactions spending its outputs. Sorted so
    /// graph walks are deterministic.
    children: HashMap<Hash256, BTreeSet<Hash256>>,
}

impl Mempool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            by_outpoint: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// Insert a validated transaction into the pool.
    ///
    /// `fee` is the transaction fee in rills, as established by contextual
    /// validation. The pool checks for coinbase shape, the minimum fee,
    /// duplicates, and input conflicts, then computes the entry's ancestor
    /// aggregates from the in-pool ancestors reachable through its inputs.
    ///
    /// Returns the txid on success.
    pub fn insert(&mut self, tx: Transaction, fee: u64) -> Result<Hash256, MempoolError> {
        if tx.is_coinbase() {
            return Err(MempoolError::Coinbase);
        }
        if fee < MIN_TX_FEE {
            return Err(MempoolError::FeeTooLow { fee, minimum: MIN_TX_FEE });
        }

        // Compute txid and size from a single serialization.
        let encoded = bincode::encode_to_vec(&tx, bincode::config::standard())
            .map_err(|e| MempoolError::Internal(e.to_string()))?;
        let txid = Hash256(blake3::hash(&encoded).into());
        let size = encoded.len();

        if self.entries.contains_key(&txid) {
            return Err(MempoolError::AlreadyExists(txid.to_string()));
        }

        // Check for input conflicts with existing pool entries.
        for input in &tx.inputs {
            if let Some(conflicting) = self.by_outpoint.get(&input.previous_output) {
                return Err(MempoolError::Conflict {
                    new_txid: txid.to_string(),
                    existing_txid: conflicting.to_string(),
                    outpoint: input.previous_output.to_string(),
                });
            }
        }

        // Ancestor package: this transaction plus every in-pool ancestor,
        // found by walking input prevouts transitively.
        let mut ancestor_fee = fee;
        let mut ancestor_size = size;
        for ancestor in self.collect_ancestors(&tx) {
            let entry = &self.entries[&ancestor];
            ancestor_fee += entry.fee;
            ancestor_size += entry.size;
        }

        // Insert into all indices.
        for input in &tx.inputs {
            self.by_outpoint.insert(input.previous_output.clone(), txid);
            let parent = input.previous_output.txid;
            if self.entries.contains_key(&parent) {
                self.children.entry(parent).or_default().insert(txid);
            }
        }
        self.entries.insert(
            txid,
            MempoolEntry {
                tx,
                txid,
                fee,
                size,
                ancestor_fee,
                ancestor_size,
            },
        );

        Ok(txid)
    }

    /// Check if a transaction with the given txid is in the pool.
    pub fn contains(&self, txid: &Hash256) -> bool {
        self.entries.contains_key(txid)
    }

    /// Get a pool entry by txid.
    pub fn get(&self, txid: &Hash256) -> Option<&MempoolEntry> {
        self.entries.get(txid)
    }

    /// The pool transaction, if any, that spends the given outpoint.
    pub fn find_conflict(&self, outpoint: &OutPoint) -> Option<Hash256> {
        self.by_outpoint.get(outpoint).copied()
    }

    /// All pool transactions connected to the seed set through the
    /// parent/child spending relation (the seeds' connected components).
    ///
    /// Returns an empty vector only if a seed txid is not in the pool.
    /// Enumeration order is deterministic: breadth-first from the seeds in
    /// the order given, parents in input order, children in txid order.
    pub fn compute_cluster(&self, seeds: &[Hash256]) -> Vec<&MempoolEntry> {
        let mut visited: HashSet<Hash256> = HashSet::new();
        let mut order: Vec<Hash256> = Vec::new();
        let mut queue: VecDeque<Hash256> = VecDeque::new();
        for seed in seeds {
            if !self.entries.contains_key(seed) {
                return Vec::new();
            }
            if visited.insert(*seed) {
                queue.push_back(*seed);
            }
        }
        while let Some(txid) = queue.pop_front() {
            order.push(txid);
            let entry = &self.entries[&txid];
            for input in &entry.tx.inputs {
                let parent = input.previous_output.txid;
                if self.entries.contains_key(&parent) && visited.insert(parent) {
                    queue.push_back(parent);
                }
            }
            if let Some(kids) = self.children.get(&txid) {
                for child in kids {
                    if visited.insert(*child) {
                        queue.push_back(*child);
                    }
                }
            }
        }
        order.iter().map(|txid| &self.entries[txid]).collect()
    }

    /// The given transaction plus all of its in-pool descendants.
    ///
    /// Returns an empty vector if the txid is not in the pool. Enumeration
    /// order is deterministic (breadth-first, children in txid order).
    pub fn compute_descendants(&self, txid: &Hash256) -> Vec<&MempoolEntry> {
        if !self.entries.contains_key(txid) {
            return Vec::new();
        }
        let mut visited: HashSet<Hash256> = HashSet::new();
        let mut order: Vec<Hash256> = Vec::new();
        let mut queue: VecDeque<Hash256> = VecDeque::new();
        visited.insert(*txid);
        queue.push_back(*txid);
        while let Some(current) = queue.pop_front() {
            order.push(current);
            if let Some(kids) = self.children.get(&current) {
                for child in kids {
                    if visited.insert(*child) {
                        queue.push_back(*child);
                    }
                }
            }
        }
        order.iter().map(|txid| &self.entries[txid]).collect()
    }

    /// Remove a transaction and all of its descendants from the pool.
    ///
    /// Descendants must leave with their ancestor or the remaining entries'
    /// ancestor aggregates would go stale; removing the whole subtree keeps
    /// every aggregate exact. Returns the removed entries; empty if the
    /// txid is not in the pool.
    pub fn remove_recursive(&mut self, txid: &Hash256) -> Vec<MempoolEntry> {
        let to_remove: Vec<Hash256> =
            self.compute_descendants(txid).iter().map(|e| e.txid).collect();
        let mut removed = Vec::with_capacity(to_remove.len());
        for txid in to_remove {
            if let Some(entry) = self.remove_entry(txid) {
                removed.push(entry);
            }
        }
        removed
    }

    /// Internal: remove one entry and clean up all indices.
    fn remove_entry(&mut self, txid: Hash256) -> Option<MempoolEntry> {
        let entry = self.entries.remove(&txid)?;
        for input in &entry.tx.inputs {
            self.by_outpoint.remove(&input.previous_output);
            let parent = input.previous_output.txid;
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.remove(&txid);
                if siblings.is_empty() {
                    self.children.remove(&parent);
                }
            }
        }
        self.children.remove(&txid);
        Some(entry)
    }

    /// In-pool ancestors of a not-yet-inserted transaction, found by
    /// breadth-first traversal over input prevouts. Exclusive of the
    /// transaction itself.
    fn collect_ancestors(&self, tx: &Transaction) -> BTreeSet<Hash256> {
        let mut ancestors: BTreeSet<Hash256> = BTreeSet::new();
        let mut queue: VecDeque<Hash256> =
            tx.inputs.iter().map(|input| input.previous_output.txid).collect();
        while let Some(txid) = queue.pop_front() {
            if !self.entries.contains_key(&txid) || !ancestors.insert(txid) {
                continue;
            }
            for input in &self.entries[&txid].tx.inputs {
                queue.push_back(input.previous_output.txid);
            }
        }
        ancestors
    }

    /// Number of transactions in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Mempool {
    fn default() -> Self {
        Self::new()
    }
}
