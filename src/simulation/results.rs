// src/simulation/results.rs
use std::collections::HashMap;
use std::fmt;

/// Holds the aggregated outcome counts of a circuit run.
///
/// Maps each measured bit (0 or 1) to the number of shots that produced
/// it. Only outcomes that actually occurred are present, so a run whose
/// shots all landed on one side has a single entry and a zero-shot run
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunResult {
    /// Maps measurement outcomes to their occurrence counts.
    counts: HashMap<u8, u64>,
}

impl RunResult {
    /// Creates a new, empty result set. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Records one occurrence of an outcome bit. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: u8) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Gets the count for a specific outcome bit.
    /// Returns 0 if the outcome never occurred.
    pub fn count_of(&self, outcome: u8) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of shots recorded across all outcomes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Fraction of shots that produced `outcome`, in `[0, 1]`.
    /// Returns 0.0 for an empty result.
    pub fn frequency(&self, outcome: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count_of(outcome) as f64 / total as f64
        }
    }

    /// Returns `true` if no shots were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns a reference to the map containing all recorded counts.
    pub fn counts(&self) -> &HashMap<u8, u64> {
        &self.counts
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Results:")?;
        if self.counts.is_empty() {
            writeln!(f, "  No shots were recorded.")?;
        } else {
            // Sort by outcome for consistent and readable output
            let mut sorted_counts: Vec<_> = self.counts.iter().collect();
            sorted_counts.sort_by_key(|(outcome, _)| **outcome);
            writeln!(f, "  Counts ({} shots):", self.total())?;
            for (outcome, count) in sorted_counts {
                writeln!(f, "    |{}>: {}", outcome, count)?;
            }
        }
        Ok(())
    }
}
