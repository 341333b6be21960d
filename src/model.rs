use crate::candidate::{grow, seed, Candidate};
use crate::item::Item;
use crate::itemizer::{compress, Itemizer};
use crate::key::{canonical_items, canonical_key, key_string};
use crate::support_counter::count_level;
use crate::threshold::Threshold;
use crate::vec_sets::union;
use fnv::FnvHashMap;
use itertools::Itertools;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Value of a metric whose itemsets are not in the model, for callers that
/// want a plain number rather than an `Option`.
pub const NOT_FOUND: f64 = -1.0;

pub fn or_not_found(metric: Option<f64>) -> f64 {
    metric.unwrap_or(NOT_FOUND)
}

/// Frequent itemsets mined from a set of transactions.
///
/// Holds the absolute count of every itemset that met the training threshold,
/// keyed by its items in canonical order, together with the label catalog
/// and the number of transactions trained on. Queries take labels in any
/// order; labels that never appeared in training are ignored.
#[derive(Clone, Debug)]
pub struct Model {
    counts: FnvHashMap<Vec<Item>, u32>,
    itemizer: Itemizer,
    total_transactions: usize,
}

/// Mines every itemset whose count meets `threshold`, level by level. Each
/// level extends the previous level's survivors by one item, so an itemset
/// is only counted when the itemset it grew from was kept.
pub fn train<T, S>(transactions: &[T], threshold: Threshold) -> Model
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let timer = Instant::now();
    let (itemizer, matrix) = compress(transactions);
    let singletons: Vec<Item> = itemizer.items().collect();
    debug!(
        transactions = matrix.len(),
        items = singletons.len(),
        "compressed transactions"
    );

    let mut counts: FnvHashMap<Vec<Item>, u32> = FnvHashMap::default();
    let mut candidates = seed(&itemizer);
    let mut level = 1;
    while !candidates.is_empty() {
        let num_candidates = candidates.len();
        let survivors = count_level(candidates, &matrix, threshold);
        debug!(
            level,
            candidates = num_candidates,
            survivors = survivors.len(),
            "counted level"
        );
        let mut survived: Vec<Candidate> = Vec::with_capacity(survivors.len());
        for (candidate, count) in survivors {
            counts.insert(candidate.items().to_vec(), count);
            survived.push(candidate);
        }
        candidates = grow(&singletons, &survived);
        level += 1;
    }

    info!(
        itemsets = counts.len(),
        levels = level - 1,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "training finished"
    );

    Model {
        counts,
        itemizer,
        total_transactions: matrix.len(),
    }
}

impl Model {
    pub fn train<T, S>(transactions: &[T], threshold: Threshold) -> Model
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        train(transactions, threshold)
    }

    pub fn total_transactions(&self) -> usize {
        self.total_transactions
    }

    /// Number of itemsets held.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Item labels in canonical order.
    pub fn labels(&self) -> &[String] {
        self.itemizer.labels()
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    /// The canonical key for `labels`: the known labels, space separated, in
    /// the order they were first seen during training.
    pub fn canonical_key<S: AsRef<str>>(&self, labels: &[S]) -> String {
        canonical_key(&self.itemizer, labels)
    }

    pub fn count<S: AsRef<str>>(&self, labels: &[S]) -> Option<u32> {
        self.count_of(&canonical_items(&self.itemizer, labels))
    }

    /// Count for items already in canonical order.
    pub fn count_of(&self, items: &[Item]) -> Option<u32> {
        if items.is_empty() {
            return None;
        }
        self.counts.get(items).cloned()
    }

    /// Fraction of transactions containing every item, in (0,1].
    pub fn support<S: AsRef<str>>(&self, labels: &[S]) -> Option<f64> {
        let count = self.count(labels)?;
        Some(count as f64 / self.total_transactions as f64)
    }

    /// count(X ∪ Y) / count(X).
    pub fn confidence<S: AsRef<str>>(&self, x: &[S], y: &[S]) -> Option<f64> {
        let (x_items, y_items) = self.rule_items(x, y)?;
        let x_count = self.count_of(&x_items)?;
        let xy_count = self.count_of(&union(&x_items, &y_items))?;
        Some(xy_count as f64 / x_count as f64)
    }

    /// count(X ∪ Y) / (count(X) · count(Y)). Raw counts, not scaled by the
    /// number of transactions.
    pub fn lift<S: AsRef<str>>(&self, x: &[S], y: &[S]) -> Option<f64> {
        let (x_items, y_items) = self.rule_items(x, y)?;
        let x_count = self.count_of(&x_items)?;
        let y_count = self.count_of(&y_items)?;
        let xy_count = self.count_of(&union(&x_items, &y_items))?;
        Some(xy_count as f64 / (x_count as f64 * y_count as f64))
    }

    fn rule_items<S: AsRef<str>>(&self, x: &[S], y: &[S]) -> Option<(Vec<Item>, Vec<Item>)> {
        let x_items = canonical_items(&self.itemizer, x);
        let y_items = canonical_items(&self.itemizer, y);
        if x_items.is_empty() || y_items.is_empty() {
            return None;
        }
        Some((x_items, y_items))
    }

    /// Removes the itemset named by `labels`. Returns whether anything was
    /// removed; removing an absent itemset is a no-op.
    pub fn delete<S: AsRef<str>>(&mut self, labels: &[S]) -> bool {
        let items = canonical_items(&self.itemizer, labels);
        let removed = self.counts.remove(&items).is_some();
        if removed {
            trace!(key = %key_string(&self.itemizer, &items), "deleted itemset");
        }
        removed
    }

    /// Every itemset held, as (canonical key, count), smallest itemsets first
    /// and then in canonical order.
    pub fn itemsets(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        self.itemsets_by_item()
            .map(move |(items, count)| (key_string(&self.itemizer, items), count))
    }

    pub(crate) fn itemsets_by_item(&self) -> impl Iterator<Item = (&Vec<Item>, u32)> + '_ {
        self.counts
            .iter()
            .sorted_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)))
            .map(|(items, &count)| (items, count))
    }
}
