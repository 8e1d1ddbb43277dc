//! Profit occurrence histogram.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of complete assignments reaching each total profit.
///
/// Sparse: only profits actually reached hold a bucket, so memory does not
/// grow with the magnitude of the profits. Serializes as a list of
/// `[profit, count]` pairs in ascending profit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(u64, u128)>", into = "Vec<(u64, u128)>")]
pub struct ProfitHistogram {
    counts: BTreeMap<u64, u128>,
}

impl ProfitHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more assignment with the given profit.
    #[inline]
    pub fn record(&mut self, profit: u64) {
        *self.counts.entry(profit).or_insert(0) += 1;
    }

    /// Number of assignments with exactly this profit.
    pub fn count(&self, profit: u64) -> u128 {
        self.counts.get(&profit).copied().unwrap_or(0)
    }

    /// Total number of recorded assignments.
    pub fn total(&self) -> u128 {
        self.counts.values().sum()
    }

    /// Highest profit recorded, `None` when empty.
    pub fn max_profit(&self) -> Option<u64> {
        self.counts.keys().next_back().copied()
    }

    /// Number of distinct profits with a non-zero count.
    pub fn distinct_profits(&self) -> usize {
        self.counts.len()
    }

    /// Non-zero buckets in ascending profit order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u64, u128)> + '_ {
        self.counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&profit, &count)| (profit, count))
    }

    /// Count-weighted mean profit. `0.0` when empty.
    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .iter_nonzero()
            .map(|(profit, count)| profit as f64 * count as f64)
            .sum();
        weighted / total as f64
    }

    /// Count-weighted population standard deviation. `0.0` when empty.
    pub fn std_dev(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .iter_nonzero()
            .map(|(profit, count)| {
                let diff = profit as f64 - mean;
                diff * diff * count as f64
            })
            .sum::<f64>()
            / total as f64;
        variance.sqrt()
    }
}

impl From<Vec<(u64, u128)>> for ProfitHistogram {
    fn from(pairs: Vec<(u64, u128)>) -> Self {
        let mut histogram = Self::new();
        for (profit, count) in pairs.into_iter().filter(|&(_, count)| count > 0) {
            *histogram.counts.entry(profit).or_insert(0) += count;
        }
        histogram
    }
}

impl From<ProfitHistogram> for Vec<(u64, u128)> {
    fn from(histogram: ProfitHistogram) -> Self {
        histogram.iter_nonzero().collect()
    }
}
