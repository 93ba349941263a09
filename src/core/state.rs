// src/core/state.rs

use crate::core::constants::qvis_constants::{DISPLAY_SCALE, FRAC_1_SQRT_2};
use crate::core::sample::DrawSource;
use crate::gates::Gate;
use std::fmt;
use std::mem;

/// The quantum state of one two-level system.
///
/// Amplitudes are real-valued `f64`s, reproducing the pedagogical
/// simplification of the visualization this engine serves: true qubit states
/// carry complex coefficients, but phases play no role in the supported gate
/// set, so the real pair is the behavior to model. `amplitude0` and
/// `amplitude1` are the coefficients of the basis outcomes `|0>` and `|1>`.
///
/// Invariants, maintained by every operation:
/// - `amplitude0^2 + amplitude1^2 == 1` within floating-point tolerance.
/// - While `collapsed`, the pair is exactly `(1.0, 0.0)` or `(0.0, 1.0)`.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point amplitudes
pub struct QubitState {
    /// Coefficient of the `|0>` basis outcome.
    amplitude0: f64,
    /// Coefficient of the `|1>` basis outcome.
    amplitude1: f64,
    /// True once a measurement has run and no gate has been applied since.
    collapsed: bool,
}

impl QubitState {
    /// Creates a qubit in the `|0>` basis state, uncollapsed.
    pub fn new() -> Self {
        Self {
            amplitude0: 1.0,
            amplitude1: 0.0,
            collapsed: false,
        }
    }

    /// Applies one gate from the closed gate set.
    ///
    /// The unitary gates transform the amplitude pair and return the qubit to
    /// the superposed lifecycle state; `Gate::Measure` delegates to
    /// [`measure`](Self::measure) and is the only probabilistic, irreversible
    /// member of the set.
    ///
    /// # Arguments
    /// * `gate` - The gate to apply.
    /// * `draws` - Uniform draw source consumed only by `Gate::Measure`.
    ///
    /// # Returns
    /// * `Some(outcome)` for `Gate::Measure`, `None` for the unitary gates.
    pub fn apply_gate<S>(&mut self, gate: Gate, draws: &mut S) -> Option<Outcome>
    where
        S: DrawSource + ?Sized,
    {
        match gate {
            Gate::Hadamard => {
                let (a0, a1) = (self.amplitude0, self.amplitude1);
                self.amplitude0 = (a0 + a1) * FRAC_1_SQRT_2;
                self.amplitude1 = (a0 - a1) * FRAC_1_SQRT_2;
                self.collapsed = false;
                None
            }
            Gate::PauliX => {
                mem::swap(&mut self.amplitude0, &mut self.amplitude1);
                self.collapsed = false;
                None
            }
            Gate::Measure => Some(self.measure(draws)),
        }
    }

    /// Performs the probabilistic projection onto a basis outcome.
    ///
    /// Draws `r` uniformly from `[0, 1)`; the state collapses to `(1, 0)`
    /// when `r < amplitude0^2` and to `(0, 1)` otherwise. Measuring an
    /// already-collapsed state runs the same rule: the surviving outcome has
    /// probability 1, so the re-sample is deterministic without being
    /// special-cased.
    pub fn measure<S>(&mut self, draws: &mut S) -> Outcome
    where
        S: DrawSource + ?Sized,
    {
        let r = draws.draw_unit();
        let outcome = if r < self.amplitude0 * self.amplitude0 {
            self.amplitude0 = 1.0;
            self.amplitude1 = 0.0;
            Outcome::Zero
        } else {
            self.amplitude0 = 0.0;
            self.amplitude1 = 1.0;
            Outcome::One
        };
        self.collapsed = true;
        outcome
    }

    /// Unconditionally returns the qubit to `|0>`, uncollapsed. Idempotent.
    pub fn reset(&mut self) {
        self.amplitude0 = 1.0;
        self.amplitude1 = 0.0;
        self.collapsed = false;
    }

    /// Basis-outcome probabilities `(amplitude0^2, amplitude1^2)`, each
    /// rounded to two decimal digits for presentation. The stored amplitudes
    /// are never rounded.
    pub fn probabilities(&self) -> (f64, f64) {
        (
            round_for_display(self.amplitude0 * self.amplitude0),
            round_for_display(self.amplitude1 * self.amplitude1),
        )
    }

    /// Raw amplitude pair, unrounded. Intended for tests and validation.
    pub fn amplitudes(&self) -> (f64, f64) {
        (self.amplitude0, self.amplitude1)
    }

    /// True once a measurement has run and no gate has been applied since.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The definite basis value while collapsed, `None` while superposed.
    ///
    /// Collapse assigns exact basis constants, so the comparison here is
    /// exact rather than tolerance-based.
    pub fn collapsed_value(&self) -> Option<u64> {
        if self.collapsed {
            Some(if self.amplitude0 == 1.0 { 0 } else { 1 })
        } else {
            None
        }
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.collapsed_value() {
            Some(value) => write!(f, "Qubit[|{}>]", value),
            None => {
                let (p0, p1) = self.probabilities();
                write!(f, "Qubit[|0>: {:.2}, |1>: {:.2}]", p0, p1)
            }
        }
    }
}

/// Rounds a probability to the fixed display precision (2 decimal digits).
fn round_for_display(p: f64) -> f64 {
    (p * DISPLAY_SCALE).round() / DISPLAY_SCALE
}

/// A resolved, definite measurement outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The qubit collapsed to `|0>`.
    Zero,
    /// The qubit collapsed to `|1>`.
    One,
}

impl Outcome {
    /// The numerical basis value of this outcome.
    pub fn value(&self) -> u64 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}>", self.value())
    }
}
