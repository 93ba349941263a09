// src/scene/results.rs
use crate::core::{Outcome, QubitId};
use std::collections::HashMap;
use std::fmt;

/// Accumulated measurement outcomes for a scene.
///
/// Tracks, per qubit, the most recent outcome and the running zero/one
/// tallies. Written to by the scene whenever a measurement is applied;
/// read-only to everyone else.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLog {
    /// Most recent outcome per measured qubit.
    latest: HashMap<QubitId, Outcome>,
    /// Running `(zeros, ones)` tallies per measured qubit.
    tallies: HashMap<QubitId, (u64, u64)>,
}

impl MeasurementLog {
    /// Creates an empty log. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            latest: HashMap::new(),
            tallies: HashMap::new(),
        }
    }

    /// Records one measurement outcome. (Internal visibility)
    pub(crate) fn record(&mut self, qubit_id: QubitId, outcome: Outcome) {
        self.latest.insert(qubit_id, outcome);
        let tally = self.tallies.entry(qubit_id).or_insert((0, 0));
        match outcome {
            Outcome::Zero => tally.0 += 1,
            Outcome::One => tally.1 += 1,
        }
    }

    /// The most recent outcome for a qubit, if it has ever been measured.
    pub fn latest(&self, qubit_id: &QubitId) -> Option<Outcome> {
        self.latest.get(qubit_id).copied()
    }

    /// Running `(zeros, ones)` tallies for a qubit; `(0, 0)` if unmeasured.
    pub fn counts(&self, qubit_id: &QubitId) -> (u64, u64) {
        self.tallies.get(qubit_id).copied().unwrap_or((0, 0))
    }

    /// Total number of measurements recorded for a qubit.
    pub fn total(&self, qubit_id: &QubitId) -> u64 {
        let (zeros, ones) = self.counts(qubit_id);
        zeros + ones
    }

    /// True if no measurement has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

impl fmt::Display for MeasurementLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Log:")?;
        if self.latest.is_empty() {
            writeln!(f, "  No measurements recorded.")?;
        } else {
            // Sort by QubitId for consistent and readable output
            let mut sorted: Vec<_> = self.latest.iter().collect();
            sorted.sort_by_key(|(id, _)| *id);
            for (id, outcome) in sorted {
                let (zeros, ones) = self.counts(id);
                writeln!(f, "  {}: latest {} (zeros: {}, ones: {})", id, outcome, zeros, ones)?;
            }
        }
        Ok(())
    }
}
