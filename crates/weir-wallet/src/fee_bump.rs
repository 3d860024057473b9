//! Package-aware bump fee estimation.
//!
//! A wallet that wants to spend an output sitting on an unconfirmed
//! transaction may need to attach extra fee so that the transaction (and
//! its unconfirmed ancestors) would be picked up at a target fee rate.
//! [`BumpFeeCalculator`] answers "how much extra": it snapshots the
//! cluster of pool transactions connected to the requested outpoints,
//! then simulates greedy block building over the snapshot — repeatedly
//! taking the highest-ancestor-feerate package — until everything left is
//! below the target. Whatever was not mined needs a bump.
//!
//! The pool lock is taken exactly once, for the duration of the snapshot.
//! Simulation and the result phases run on the private snapshot alone.
//! Simulation is destructive, so a calculator answers a single query:
//! both result methods consume `self`, and each target rate gets its own
//! instance.
//!
//! Bump fees are fail-soft where the answer is knowable without
//! simulation: outpoints of confirmed or unknown transactions, and
//! outputs of transactions slated for replacement, resolve to zero.
//! Internal-consistency violations are fatal assertions, never silently
//! degraded results — an understated bump fee costs the user money.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use parking_lot::Mutex;
use tracing::{debug, trace};

use weir_core::feerate::FeeRate;
use weir_core::mempool::Mempool;
use weir_core::types::{Hash256, OutPoint, Transaction};

/// Per-transaction snapshot taken from the pool at construction time.
///
/// `fee` and `size` are fixed; the ancestor aggregates start at the
/// pool's cached values and are decremented as ancestors are mined out of
/// the working set. `sequence` is the insertion order within the
/// snapshot, used as a deterministic tie-break when ancestor feerates
/// compare equal.
#[derive(Debug, Clone)]
struct TxSnapshot {
    tx: Transaction,
    fee: i64,
    size: usize,
    ancestor_fee: i64,
    ancestor_size: usize,
    sequence: u64,
}

impl TxSnapshot {
    fn ancestor_feerate(&self) -> FeeRate {
        FeeRate::from_fee_and_size(self.ancestor_fee, self.ancestor_size)
    }

    /// Remove a mined ancestor's contribution from the aggregates.
    /// Aggregates only ever decrease and must never go negative.
    fn deduct_mined_ancestor(&mut self, fee: i64, size: usize) {
        self.ancestor_fee -= fee;
        assert!(self.ancestor_fee >= 0, "ancestor fee aggregate went negative");
        self.ancestor_size = self
            .ancestor_size
            .checked_sub(size)
            .expect("ancestor size aggregate went negative");
    }
}

/// Computes the additional fees needed to lift unconfirmed transactions
/// (and their unconfirmed ancestors) to a target fee rate.
///
/// Construction snapshots everything under one pool lock; the answer
/// methods [`calculate_bump_fees`](Self::calculate_bump_fees) and
/// [`calculate_total_bump_fees`](Self::calculate_total_bump_fees) never
/// touch the pool again. Each instance answers one query.
pub struct BumpFeeCalculator {
    /// Snapshot entries by txid.
    entries: HashMap<Hash256, TxSnapshot>,
    /// Txids still eligible for mining, resorted before each extraction.
    ordering: Vec<Hash256>,
    /// Inclusive descendant lists: the entries whose ancestor aggregates
    /// shrink when the keyed transaction is mined. Built once; stays
    /// valid because a descendant is never snapshotted without its
    /// ancestor.
    descendants_of: HashMap<Hash256, Vec<Hash256>>,
    /// Transactions conflicting with a requested outpoint, assumed
    /// slated for eviction together with their descendants.
    to_be_replaced: HashSet<Hash256>,
    /// Requested outpoints grouped by the transaction that created them.
    requested_by_txid: HashMap<Hash256, Vec<OutPoint>>,
    /// Accumulating answer, pre-populated with the fail-soft zeros.
    bump_fees: HashMap<OutPoint, i64>,
    /// Transactions mined by the simulation.
    in_block: HashSet<Hash256>,
    /// Running template totals.
    total_fee: i64,
    total_size: usize,
}

impl BumpFeeCalculator {
    /// Snapshot the pool state relevant to `outpoints`.
    ///
    /// Takes the pool lock once and holds it across conflict lookup,
    /// membership checks, cluster computation, and descendant
    /// computation, so the snapshot is a consistent view. Duplicate
    /// outpoints and multiple outpoints of the same transaction are
    /// permitted.
    ///
    /// Outpoints whose transaction is not in the pool (confirmed or
    /// never broadcast) are answered with bump fee 0 up front.
    pub fn new(mempool: &Mutex<Mempool>, outpoints: &[OutPoint]) -> Self {
        let mut calc = Self {
            entries: HashMap::new(),
            ordering: Vec::new(),
            descendants_of: HashMap::new(),
            to_be_replaced: HashSet::new(),
            requested_by_txid: HashMap::new(),
            bump_fees: HashMap::new(),
            in_block: HashSet::new(),
            total_fee: 0,
            total_size: 0,
        };

        let mempool = mempool.lock();

        // Seed txids for the cluster walk, in first-request order.
        let mut txids_needed: Vec<Hash256> = Vec::new();
        for outpoint in outpoints {
            // Another pool transaction already spends this outpoint: the
            // caller intends to replace it, so it and its descendants are
            // excluded from the snapshot below.
            if let Some(conflicting) = mempool.find_conflict(outpoint) {
                calc.to_be_replaced.insert(conflicting);
            }
            if !mempool.contains(&outpoint.txid) {
                // Confirmed or unknown: nothing to bump.
                calc.bump_fees.insert(outpoint.clone(), 0);
                continue;
            }
            match calc.requested_by_txid.entry(outpoint.txid) {
                std::collections::hash_map::Entry::Occupied(mut e) => {
                    e.get_mut().push(outpoint.clone());
                }
                std::collections::hash_map::Entry::Vacant(e) => {
                    e.insert(vec![outpoint.clone()]);
                    txids_needed.push(outpoint.txid);
                }
            }
        }

        // Nothing left to simulate: every requested outpoint already has
        // its zero-fee answer.
        if calc.requested_by_txid.is_empty() {
            return calc;
        }

        let cluster = mempool.compute_cluster(&txids_needed);
        assert!(
            !cluster.is_empty(),
            "cluster of confirmed pool members cannot be empty"
        );

        // Snapshot the cluster. To-be-replaced transactions are not
        // snapshotted; spending their outputs is impossible once they
        // are evicted, so any of their requested outpoints resolve to 0.
        for entry in &cluster {
            if calc.to_be_replaced.contains(&entry.txid) {
                if let Some(requested) = calc.requested_by_txid.remove(&entry.txid) {
                    for outpoint in requested {
                        calc.bump_fees.insert(outpoint, 0);
                    }
                }
                continue;
            }
            let sequence = calc.ordering.len() as u64;
            calc.ordering.push(entry.txid);
            calc.entries.insert(
                entry.txid,
                TxSnapshot {
                    tx: entry.tx.clone(),
                    fee: i64::try_from(entry.fee).expect("fee fits in i64"),
                    size: entry.size,
                    ancestor_fee: i64::try_from(entry.ancestor_fee())
                        .expect("fee fits in i64"),
                    ancestor_size: entry.ancestor_size(),
                    sequence,
                },
            );
        }

        // Descendants of a to-be-replaced transaction are poisoned: they
        // leave the pool with it, so they can neither be mined nor
        // contribute to anyone's bump fee. Drop them before descendant
        // lists are recorded so the lists never hold stale keys.
        for txid in &calc.to_be_replaced {
            for desc in mempool.compute_descendants(txid) {
                if calc.entries.remove(&desc.txid).is_some() {
                    calc.ordering.retain(|t| t != &desc.txid);
                }
                if let Some(requested) = calc.requested_by_txid.remove(&desc.txid) {
                    for outpoint in requested {
                        calc.bump_fees.insert(outpoint, 0);
                    }
                }
            }
        }

        // Inclusive descendant lists over the surviving entries.
        for txid in &calc.ordering {
            let descendants: Vec<Hash256> = mempool
                .compute_descendants(txid)
                .iter()
                .map(|e| e.txid)
                .filter(|d| calc.entries.contains_key(d))
                .collect();
            calc.descendants_of.insert(*txid, descendants);
        }

        assert_eq!(calc.entries.len(), calc.ordering.len());
        assert_eq!(calc.entries.len(), calc.descendants_of.len());

        debug!(
            "bump fee snapshot: {} cluster transactions, {} kept, {} to be replaced, {} requested txids",
            cluster.len(),
            calc.entries.len(),
            calc.to_be_replaced.len(),
            calc.requested_by_txid.len()
        );

        calc
    }

    /// Greedy block-template simulation against `target_feerate`.
    ///
    /// Repeatedly mines the package with the highest ancestor feerate
    /// until the working set is empty or the best remaining package falls
    /// below the target. Deterministic for a given snapshot.
    fn build_template(&mut self, target_feerate: FeeRate) {
        while !self.ordering.is_empty() {
            // Highest ancestor feerate first; ties broken by snapshot
            // insertion order so runs are reproducible.
            let entries = &self.entries;
            self.ordering.sort_by(|a, b| {
                let ea = &entries[a];
                let eb = &entries[b];
                eb.ancestor_feerate()
                    .cmp(&ea.ancestor_feerate())
                    .then(ea.sequence.cmp(&eb.sequence))
            });

            let head = self.ordering[0];
            let (package_fee, package_size) = {
                let entry = &self.entries[&head];
                (entry.ancestor_fee, entry.ancestor_size)
            };
            if package_fee < target_feerate.fee_for_size(package_size) {
                // Everything else is at an equal or lower ancestor
                // feerate and needs bumping too.
                trace!(
                    "template done: best remaining package pays {} for {} bytes, below {}",
                    package_fee, package_size, target_feerate
                );
                break;
            }

            // The cached aggregates must agree with an on-the-fly
            // traversal of the snapshot graph.
            let ancestors = self.calculate_ancestors(&head);
            let mut traversed_fee: i64 = 0;
            let mut traversed_size: usize = 0;
            for txid in &ancestors {
                let entry = &self.entries[txid];
                traversed_fee += entry.fee;
                traversed_size += entry.size;
            }
            assert_eq!(
                traversed_fee, package_fee,
                "cached ancestor fee disagrees with traversal"
            );
            assert_eq!(
                traversed_size, package_size,
                "cached ancestor size disagrees with traversal"
            );

            self.mine_package(&ancestors);
            trace!(
                "mined package of {} transactions; template now pays {} for {} bytes",
                ancestors.len(),
                self.total_fee,
                self.total_size
            );
        }
    }

    /// The given entry plus all of its ancestors still in the working
    /// set, found by breadth-first traversal over input prevouts.
    fn calculate_ancestors(&self, txid: &Hash256) -> BTreeSet<Hash256> {
        let mut ancestors: BTreeSet<Hash256> = BTreeSet::new();
        let mut queue: VecDeque<Hash256> = VecDeque::new();
        queue.push_back(*txid);
        while let Some(current) = queue.pop_front() {
            if !ancestors.insert(current) {
                continue;
            }
            let entry = self
                .entries
                .get(&current)
                .expect("ancestor traversal only visits live entries");
            for input in &entry.tx.inputs {
                let parent = input.previous_output.txid;
                if self.entries.contains_key(&parent) {
                    queue.push_back(parent);
                }
            }
        }
        ancestors
    }

    /// Mine a complete ancestor package: mark each member in-block, add
    /// its fee and size to the template totals, deduct it from every
    /// tracked descendant's aggregates, and drop it from the working set.
    fn mine_package(&mut self, package: &BTreeSet<Hash256>) {
        let mined: Vec<(Hash256, i64, usize)> = package
            .iter()
            .map(|txid| {
                let entry = &self.entries[txid];
                (*txid, entry.fee, entry.size)
            })
            .collect();

        for (txid, fee, size) in &mined {
            self.in_block.insert(*txid);
            self.total_fee += fee;
            self.total_size += size;
            let descendants = self
                .descendants_of
                .get(txid)
                .expect("every entry has a descendant list");
            for desc in descendants {
                // A mined entry's remaining descendants are all live: an
                // entry is only ever mined together with its ancestors.
                self.entries
                    .get_mut(desc)
                    .expect("descendant lists only reference live entries")
                    .deduct_mined_ancestor(*fee, *size);
            }
        }

        for (txid, _, _) in &mined {
            self.entries.remove(txid);
            self.descendants_of.remove(txid);
        }
        let in_block = &self.in_block;
        self.ordering.retain(|txid| !in_block.contains(txid));

        assert_eq!(self.entries.len(), self.ordering.len());
        assert_eq!(self.entries.len(), self.descendants_of.len());
    }

    /// Bump fee for each requested outpoint at `target_feerate`.
    ///
    /// Outpoints of transactions the simulation mined resolve to 0 (their
    /// package already clears the bar). Every other requested outpoint
    /// gets the shortfall of its transaction's remaining ancestor
    /// package: `target_feerate.fee_for_size(ancestor_size) -
    /// ancestor_fee`, strictly positive by the stopping condition.
    ///
    /// The returned map has exactly one entry per distinct requested
    /// outpoint, zeros included.
    pub fn calculate_bump_fees(mut self, target_feerate: FeeRate) -> HashMap<OutPoint, i64> {
        self.build_template(target_feerate);

        let mined: Vec<Hash256> = self
            .requested_by_txid
            .keys()
            .filter(|txid| self.in_block.contains(*txid))
            .copied()
            .collect();
        for txid in mined {
            let requested = self
                .requested_by_txid
                .remove(&txid)
                .expect("txid was taken from the requested map");
            for outpoint in requested {
                self.bump_fees.insert(outpoint, 0);
            }
        }

        for (txid, requested) in &self.requested_by_txid {
            let entry = self
                .entries
                .get(txid)
                .expect("unmined requested transactions stay in the working set");
            let bump_fee =
                target_feerate.fee_for_size(entry.ancestor_size) - entry.ancestor_fee;
            assert!(
                bump_fee > 0,
                "stopping condition guarantees a positive bump fee"
            );
            for outpoint in requested {
                self.bump_fees.insert(outpoint.clone(), bump_fee);
            }
        }

        self.bump_fees
    }

    /// The single additional fee that would lift the union of all
    /// remaining requested ancestor packages to `target_feerate`.
    ///
    /// Unlike summing per-outpoint bump fees, ancestors shared between
    /// requested transactions are counted once. Returns `None` when no
    /// requested outpoint was eligible for simulation (all confirmed,
    /// unknown, or on to-be-replaced transactions), and `Some(0)` when
    /// the simulation mined every requested transaction. The result is
    /// signed and can be negative when the remaining packages already
    /// overshoot the target.
    pub fn calculate_total_bump_fees(mut self, target_feerate: FeeRate) -> Option<i64> {
        if self.requested_by_txid.is_empty() {
            return None;
        }
        self.build_template(target_feerate);

        // Union of the ancestor sets of every unmined requested
        // transaction, shared ancestors once.
        let mut union: BTreeSet<Hash256> = BTreeSet::new();
        let mut queue: VecDeque<Hash256> = self
            .requested_by_txid
            .keys()
            .filter(|txid| !self.in_block.contains(*txid))
            .copied()
            .collect();
        while let Some(txid) = queue.pop_front() {
            if !union.insert(txid) {
                continue;
            }
            let entry = self
                .entries
                .get(&txid)
                .expect("unmined requested transactions stay in the working set");
            for input in &entry.tx.inputs {
                let parent = input.previous_output.txid;
                if self.entries.contains_key(&parent) {
                    queue.push_back(parent);
                }
            }
        }

        let mut union_fee: i64 = 0;
        let mut union_size: usize = 0;
        for txid in &union {
            let entry = &self.entries[txid];
            union_fee += entry.fee;
            union_size += entry.size;
        }
        Some(target_feerate.fee_for_size(union_size) - union_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weir_core::types::{TxInput, TxOutput};

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn make_tx(outpoints: &[OutPoint], n_outputs: usize) -> Transaction {
        Transaction {
            version: 1,
            inputs: outpoints
                .iter()
                .map(|op| TxInput {
                    previous_output: op.clone(),
                    signature: vec![0; 64],
                    public_key: vec![0; 32],
                })
                .collect(),
            outputs: (0..n_outputs)
                .map(|i| TxOutput {
                    value: (i as u64 + 1) * 1_000_000,
                    pubkey_hash: Hash256::ZERO,
                })
                .collect(),
            lock_time: 0,
        }
    }

    fn confirmed(seed: u8, index: u64) -> OutPoint {
        OutPoint {
            txid: Hash256([seed; 32]),
            index,
        }
    }

    fn out(txid: Hash256, index: u64) -> OutPoint {
        OutPoint { txid, index }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    #[test]
    fn snapshot_covers_whole_cluster() {
        let mut pool = Mempool::new();
        let parent = pool.insert(make_tx(&[confirmed(1, 0)], 1), 2_000).unwrap();
        let child = pool.insert(make_tx(&[out(parent, 0)], 1), 3_000).unwrap();
        let pool = Mutex::new(pool);

        // Requesting only the child still snapshots the parent.
        let calc = BumpFeeCalculator::new(&pool, &[out(child, 0)]);
        assert_eq!(calc.entries.len(), 2);
        assert_eq!(calc.ordering.len(), 2);
        assert_eq!(calc.descendants_of.len(), 2);
        assert!(calc.entries.contains_key(&parent));
    }

    #[test]
    fn snapshot_sequences_are_insertion_order() {
        let mut pool = Mempool::new();
        let a = pool.insert(make_tx(&[confirmed(1, 0)], 2), 2_000).unwrap();
        let b = pool.insert(make_tx(&[out(a, 0)], 1), 3_000).unwrap();
        let c = pool.insert(make_tx(&[out(a, 1)], 1), 4_000).unwrap();
        let pool = Mutex::new(pool);

        let calc = BumpFeeCalculator::new(&pool, &[out(b, 0), out(c, 0)]);
        let mut sequences: Vec<u64> = calc.entries.values().map(|e| e.sequence).collect();
        sequences.sort_unstable();
        assert_eq!(sequences, vec![0, 1, 2]);
        for (i, txid) in calc.ordering.iter().enumerate() {
            assert_eq!(calc.entries[txid].sequence, i as u64);
        }
    }

    #[test]
    fn descendant_lists_are_inclusive() {
        let mut pool = Mempool::new();
        let parent = pool.insert(make_tx(&[confirmed(1, 0)], 1), 2_000).unwrap();
        let child = pool.insert(make_tx(&[out(parent, 0)], 1), 3_000).unwrap();
        let pool = Mutex::new(pool);

        let calc = BumpFeeCalculator::new(&pool, &[out(child, 0)]);
        let parent_list = &calc.descendants_of[&parent];
        assert!(parent_list.contains(&parent));
        assert!(parent_list.contains(&child));
        assert_eq!(calc.descendants_of[&child], vec![child]);
    }

    #[test]
    fn unknown_outpoints_prefilled_with_zero() {
        let pool = Mutex::new(Mempool::new());
        let op = confirmed(9, 0);

        let calc = BumpFeeCalculator::new(&pool, &[op.clone()]);
        assert_eq!(calc.bump_fees.get(&op), Some(&0));
        assert!(calc.entries.is_empty());
        assert!(calc.requested_by_txid.is_empty());
    }

    #[test]
    fn replaced_transactions_and_descendants_are_dropped() {
        // a has two outputs; t1 spends a:0 and d spends t1's output.
        // Requesting a:0 marks t1 to-be-replaced, which poisons d too.
        let mut pool = Mempool::new();
        let a = pool.insert(make_tx(&[confirmed(1, 0)], 2), 2_000).unwrap();
        let t1 = pool.insert(make_tx(&[out(a, 0)], 1), 3_000).unwrap();
        let d = pool.insert(make_tx(&[out(t1, 0)], 1), 4_000).unwrap();
        let pool = Mutex::new(pool);

        let calc =
            BumpFeeCalculator::new(&pool, &[out(a, 0), out(a, 1), out(t1, 0), out(d, 0)]);

        assert!(calc.to_be_replaced.contains(&t1));
        assert_eq!(calc.entries.len(), 1);
        assert!(calc.entries.contains_key(&a));
        // Outputs of the replaced tx and of its poisoned descendant are
        // answered with zero up front.
        assert_eq!(calc.bump_fees.get(&out(t1, 0)), Some(&0));
        assert_eq!(calc.bump_fees.get(&out(d, 0)), Some(&0));
        // a's own outputs are still pending simulation.
        assert_eq!(calc.requested_by_txid.len(), 1);
        assert_eq!(calc.requested_by_txid[&a].len(), 2);
    }

    #[test]
    fn descendants_of_replaced_transactions_are_poisoned() {
        // d itself conflicts with nothing, but it descends from the
        // to-be-replaced t1 and leaves the snapshot with it.
        let mut pool = Mempool::new();
        let a = pool.insert(make_tx(&[confirmed(1, 0)], 2), 2_000).unwrap();
        let t1 = pool.insert(make_tx(&[out(a, 0)], 1), 3_000).unwrap();
        let d = pool.insert(make_tx(&[out(t1, 0)], 1), 4_000).unwrap();
        let pool = Mutex::new(pool);

        let calc = BumpFeeCalculator::new(&pool, &[out(a, 0), out(a, 1)]);

        assert_eq!(calc.to_be_replaced, HashSet::from([t1]));
        assert_eq!(calc.entries.len(), 1);
        assert!(calc.entries.contains_key(&a));
        assert!(!calc.entries.contains_key(&d));
        assert_eq!(calc.ordering, vec![a]);
        assert_eq!(calc.descendants_of.len(), 1);
    }

    #[test]
    fn requested_outpoint_on_poisoned_descendant_is_zero() {
        let mut pool = Mempool::new();
        let a = pool.insert(make_tx(&[confirmed(1, 0)], 2), 2_000).unwrap();
        let t1 = pool.insert(make_tx(&[out(a, 0)], 1), 3_000).unwrap();
        let d = pool.insert(make_tx(&[out(t1, 0)], 1), 4_000).unwrap();
        let pool = Mutex::new(pool);

        // a:0 declares t1 replaced; d's output is requested but d is a
        // descendant of t1, so it is written off during construction.
        let calc = BumpFeeCalculator::new(&pool, &[out(a, 0), out(d, 0)]);
        assert_eq!(calc.bump_fees.get(&out(d, 0)), Some(&0));
        assert!(!calc.requested_by_txid.contains_key(&d));
        assert_eq!(calc.requested_by_txid.len(), 1);
    }

    // ------------------------------------------------------------------
    // Template simulation
    // ------------------------------------------------------------------

    #[test]
    fn mining_parent_updates_child_aggregates() {
        let mut pool = Mempool::new();
        let parent = pool.insert(make_tx(&[confirmed(1, 0)], 1), 1_000_000).unwrap();
        let child = pool.insert(make_tx(&[out(parent, 0)], 1), 1_000).unwrap();
        let parent_fee = pool.get(&parent).unwrap().fee as i64;
        let parent_size = pool.get(&parent).unwrap().size;
        let pool = Mutex::new(pool);

        let mut calc = BumpFeeCalculator::new(&pool, &[out(child, 0)]);
        // Parent feerate is far above target, the child package far below.
        calc.build_template(FeeRate::new(50_000));

        assert!(calc.in_block.contains(&parent));
        assert!(!calc.in_block.contains(&child));
        assert_eq!(calc.total_fee, parent_fee);
        assert_eq!(calc.total_size, parent_size);

        let child_entry = &calc.entries[&child];
        assert_eq!(child_entry.ancestor_fee, child_entry.fee);
        assert_eq!(child_entry.ancestor_size, child_entry.size);
    }

    #[test]
    fn template_stops_when_everything_is_below_target() {
        let mut pool = Mempool::new();
        let a = pool.insert(make_tx(&[confirmed(1, 0)], 1), 1_000).unwrap();
        let b = pool.insert(make_tx(&[confirmed(2, 0)], 1), 1_000).unwrap();
        let pool = Mutex::new(pool);

        let mut calc = BumpFeeCalculator::new(&pool, &[out(a, 0), out(b, 0)]);
        calc.build_template(FeeRate::new(1_000_000));

        assert!(calc.in_block.is_empty());
        assert_eq!(calc.entries.len(), 2);
        assert_eq!(calc.total_fee, 0);
        assert_eq!(calc.total_size, 0);
    }

    #[test]
    fn cpfp_package_is_mined_as_a_unit() {
        // Low-feerate parent carried over the bar by a high-fee child:
        // both are mined in one package.
        let mut pool = Mempool::new();
        let parent = pool.insert(make_tx(&[confirmed(1, 0)], 1), 1_000).unwrap();
        let child = pool.insert(make_tx(&[out(parent, 0)], 1), 200_000).unwrap();
        let pool = Mutex::new(pool);

        let mut calc = BumpFeeCalculator::new(&pool, &[out(child, 0)]);
        calc.build_template(FeeRate::new(100_000));

        assert!(calc.in_block.contains(&parent));
        assert!(calc.in_block.contains(&child));
        assert!(calc.entries.is_empty());
        assert!(calc.ordering.is_empty());
    }
}
