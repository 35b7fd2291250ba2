//! Thread-safe outcome counters.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts named outcomes (e.g. "verified", "structural") across threads.
///
/// The set of names is fixed at construction; recording an unknown name is a
/// no-op so callers never need to handle a lookup failure.
#[derive(Debug)]
pub struct OutcomeCounter {
    counts: BTreeMap<&'static str, AtomicU64>,
}

impl OutcomeCounter {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            counts: names.iter().map(|&n| (n, AtomicU64::new(0))).collect(),
        }
    }

    pub fn record(&self, name: &str) {
        if let Some(count) = self.counts.get(name) {
            count.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counts
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    pub fn snapshot(&self) -> BTreeMap<&'static str, u64> {
        self.counts
            .iter()
            .map(|(&name, c)| (name, c.load(Ordering::Relaxed)))
            .collect()
    }
}
