// src/lib.rs

//! `qvis` - A didactic single-qubit state engine
//!
//! This library models independent two-level quantum systems with real-valued
//! amplitudes, the small gate set a teaching visualization needs (Hadamard,
//! Pauli-X, measurement), and a headless scene that routes pointer input into
//! engine calls and hands render data back out.

pub mod core;
pub mod gates;
pub mod scene;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{DrawSource, Outcome, QubitId, QubitState, QvisError};
pub use gates::Gate;
pub use scene::{MeasurementLog, PressAction, Scene};
pub use validation::{check_collapse_consistency, check_normalization, validate_state};

// Example 1: Superposition and measurement on one qubit
// Demonstrates the full engine lifecycle: prepare a superposition, observe
// the display probabilities, collapse by measurement, and resume with a gate.
/// ```
/// use qvis::{Gate, QubitState};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// // The engine never owns randomness; measurement draws come from outside.
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut qubit = QubitState::new();
///
/// // |0> -> H -> equal superposition.
/// qubit.apply_gate(Gate::Hadamard, &mut rng);
/// assert_eq!(qubit.probabilities(), (0.5, 0.5));
///
/// // Measurement collapses onto a definite basis outcome.
/// let outcome = qubit
///     .apply_gate(Gate::Measure, &mut rng)
///     .expect("measurement always yields an outcome");
/// assert!(qubit.is_collapsed());
/// assert_eq!(qubit.collapsed_value(), Some(outcome.value()));
///
/// // Any unitary gate clears the collapse.
/// qubit.apply_gate(Gate::PauliX, &mut rng);
/// assert!(!qubit.is_collapsed());
/// assert_eq!(qubit.collapsed_value(), None);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Pointer-driven session through the scene
// Demonstrates the select-then-apply dispatch of the original visualization:
// a gate control arms the selection, the next qubit press consumes it.
/// ```
/// use qvis::{Gate, PressAction, Scene};
/// use qvis::scene::layout::SceneLayout;
///
/// let mut scene = Scene::with_seed(SceneLayout::two_qubit_default(), 42)
///     .expect("default layout has qubits");
///
/// // Press the H control, then the left qubit's circle.
/// assert_eq!(
///     scene.handle_press((90.0, 520.0).into()),
///     PressAction::GateSelected(Gate::Hadamard)
/// );
/// match scene.handle_press((200.0, 300.0).into()) {
///     PressAction::GateApplied { gate, outcome, .. } => {
///         assert_eq!(gate, Gate::Hadamard);
///         assert!(outcome.is_none());
///     }
///     other => panic!("expected a gate application, got {:?}", other),
/// }
///
/// // Applying a gate consumes the selection.
/// assert_eq!(scene.selected_gate(), None);
///
/// // The untouched right qubit still reads |0> with certainty.
/// let views = scene.views();
/// assert_eq!(views[0].probabilities, (0.5, 0.5));
/// assert_eq!(views[1].probabilities, (1.0, 0.0));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
