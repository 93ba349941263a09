// src/scene/mod.rs

//! The display collaborator: owns the qubits and controls, routes pointer
//! input into engine calls, and exposes everything a renderer needs as plain
//! data. All quantum semantics live in [`crate::core`]; this module is glue.

pub mod layout;
mod results;

// Re-export the main public interface types
pub use results::MeasurementLog;

use crate::core::{Outcome, QubitId, QubitState, QvisError};
use crate::gates::Gate;
use layout::{ButtonAction, GateButton, Point, SceneLayout};
use num_complex::Complex;
use num_traits::One;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Degrees the indicator needle advances per frame while superposed.
const INDICATOR_STEP_DEGREES: f64 = 4.0;

/// One qubit as the scene sees it: engine state plus hit-circle geometry and
/// the rotating indicator phasor.
///
/// The phasor is a unit complex number whose argument is the needle angle; it
/// is a presentation-only animation counter with no quantum meaning and never
/// feeds back into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitVisual {
    id: QubitId,
    center: Point,
    radius: f64,
    state: QubitState,
    indicator: Complex<f64>,
}

impl QubitVisual {
    fn new(id: QubitId, placement: layout::QubitPlacement) -> Self {
        Self {
            id,
            center: placement.center,
            radius: placement.radius,
            state: QubitState::new(),
            indicator: Complex::one(),
        }
    }

    /// The qubit's scene id.
    pub fn id(&self) -> QubitId {
        self.id
    }

    /// Center of the hit circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the hit circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Read-only view of the engine state.
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Current needle angle in radians.
    pub fn indicator_angle(&self) -> f64 {
        self.indicator.arg()
    }

    /// Where the indicator needle ends, on the circle's rim.
    pub fn needle_endpoint(&self) -> Point {
        Point::new(
            self.center.x + self.radius * self.indicator.re,
            self.center.y + self.radius * self.indicator.im,
        )
    }

    /// Hit test against the qubit circle. The rim counts as inside.
    pub fn contains(&self, pos: Point) -> bool {
        let dx = pos.x - self.center.x;
        let dy = pos.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Advances the needle one frame step while superposed; a collapsed
    /// qubit holds its needle still.
    fn tick(&mut self, rotor: Complex<f64>) {
        if !self.state.is_collapsed() {
            self.indicator *= rotor;
            // Keep the phasor on the unit circle despite repeated rotation.
            self.indicator = self.indicator.unscale(self.indicator.norm());
        }
    }
}

/// What a pointer press did, reported so callers and tests can observe
/// dispatch without reaching into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    /// A gate-selector control was activated; the gate is now pending.
    GateSelected(Gate),
    /// The reset control was activated; every qubit was reset.
    SceneReset,
    /// A pending gate was applied to the qubit under the pointer.
    GateApplied {
        /// The qubit the gate was applied to.
        qubit_id: QubitId,
        /// The gate that was applied.
        gate: Gate,
        /// The measurement outcome, for `Gate::Measure`.
        outcome: Option<Outcome>,
    },
    /// The press hit nothing actionable.
    Ignored,
}

/// Everything a renderer needs to draw one qubit this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitView {
    /// The qubit's scene id.
    pub id: QubitId,
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Display-rounded `(p0, p1)`; meaningful while superposed.
    pub probabilities: (f64, f64),
    /// The fixed label to draw instead of the needle, once collapsed.
    pub collapsed_value: Option<u64>,
    /// Endpoint of the rotating needle.
    pub needle: Point,
}

/// The scene: a fixed list of qubits and controls, the pending gate
/// selection, the crate RNG, and the measurement log.
///
/// All state a session needs lives here, owned and explicit; nothing is
/// process-global. Engine calls run synchronously inside
/// [`handle_press`](Self::handle_press) / [`apply_to`](Self::apply_to), so
/// each completes before the next frame is drawn.
pub struct Scene {
    qubits: Vec<QubitVisual>,
    buttons: Vec<GateButton>,
    selected: Option<Gate>,
    rng: StdRng,
    log: MeasurementLog,
}

impl Scene {
    /// Builds a scene from a layout, seeding the RNG from OS entropy.
    ///
    /// # Errors
    /// Returns `QvisError::InvalidScene` if the layout has no qubits.
    pub fn new(layout: SceneLayout) -> Result<Self, QvisError> {
        Self::from_rng(layout, rand::make_rng())
    }

    /// Builds a scene with a caller-provided seed, for reproducible sessions.
    ///
    /// # Errors
    /// Returns `QvisError::InvalidScene` if the layout has no qubits.
    pub fn with_seed(layout: SceneLayout, seed: u64) -> Result<Self, QvisError> {
        Self::from_rng(layout, StdRng::seed_from_u64(seed))
    }

    fn from_rng(layout: SceneLayout, rng: StdRng) -> Result<Self, QvisError> {
        if layout.qubits.is_empty() {
            return Err(QvisError::InvalidScene {
                message: "cannot build a scene with zero qubits".to_string(),
            });
        }
        let qubits = layout
            .qubits
            .into_iter()
            .enumerate()
            .map(|(index, placement)| QubitVisual::new(QubitId(index), placement))
            .collect();
        Ok(Self {
            qubits,
            buttons: layout.buttons,
            selected: None,
            rng,
            log: MeasurementLog::new(),
        })
    }

    /// Dispatches a pointer press.
    ///
    /// Controls are tested first: the reset control resets every qubit, a
    /// gate control stores the pending selection. Otherwise the qubit
    /// circles are tested, and a pending gate is applied to the qubit under
    /// the pointer, clearing the selection. A qubit press with nothing
    /// selected, or a press on empty canvas, does nothing.
    pub fn handle_press(&mut self, pos: Point) -> PressAction {
        let hit = self
            .buttons
            .iter()
            .find(|button| button.rect().contains(pos))
            .map(|button| button.action());
        if let Some(action) = hit {
            return match action {
                ButtonAction::ResetAll => {
                    self.reset_all();
                    PressAction::SceneReset
                }
                ButtonAction::Select(gate) => {
                    self.selected = Some(gate);
                    PressAction::GateSelected(gate)
                }
            };
        }

        if let Some(gate) = self.selected {
            if let Some(index) = self.qubits.iter().position(|qubit| qubit.contains(pos)) {
                self.selected = None;
                let outcome = self.apply_at(index, gate);
                return PressAction::GateApplied {
                    qubit_id: self.qubits[index].id,
                    gate,
                    outcome,
                };
            }
        }
        PressAction::Ignored
    }

    /// Applies a gate to one qubit directly, bypassing pointer dispatch.
    /// Measurement outcomes are recorded in the log either way.
    ///
    /// # Errors
    /// Returns `QvisError::UnknownQubit` if the id is not part of this scene.
    pub fn apply_to(&mut self, qubit_id: QubitId, gate: Gate) -> Result<Option<Outcome>, QvisError> {
        let index = self.index_of(qubit_id)?;
        Ok(self.apply_at(index, gate))
    }

    /// Resets every qubit to `|0>`, uncollapsed. The pending gate selection
    /// is left untouched; only applying a gate clears it.
    pub fn reset_all(&mut self) {
        for qubit in &mut self.qubits {
            qubit.state.reset();
        }
    }

    /// Advances one animation frame: every superposed qubit's needle turns
    /// by the fixed step, collapsed qubits hold still. Never touches
    /// amplitudes.
    pub fn tick(&mut self) {
        let rotor = Complex::from_polar(1.0, INDICATOR_STEP_DEGREES.to_radians());
        for qubit in &mut self.qubits {
            qubit.tick(rotor);
        }
    }

    /// The pending gate selection, if any.
    pub fn selected_gate(&self) -> Option<Gate> {
        self.selected
    }

    /// All qubits, in id order.
    pub fn qubits(&self) -> &[QubitVisual] {
        &self.qubits
    }

    /// One qubit by id.
    ///
    /// # Errors
    /// Returns `QvisError::UnknownQubit` if the id is not part of this scene.
    pub fn qubit(&self, qubit_id: QubitId) -> Result<&QubitVisual, QvisError> {
        let index = self.index_of(qubit_id)?;
        Ok(&self.qubits[index])
    }

    /// The control row, for rendering.
    pub fn buttons(&self) -> &[GateButton] {
        &self.buttons
    }

    /// The accumulated measurement log.
    pub fn log(&self) -> &MeasurementLog {
        &self.log
    }

    /// Per-qubit render data for the current frame.
    pub fn views(&self) -> Vec<QubitView> {
        self.qubits
            .iter()
            .map(|qubit| QubitView {
                id: qubit.id,
                center: qubit.center,
                radius: qubit.radius,
                probabilities: qubit.state.probabilities(),
                collapsed_value: qubit.state.collapsed_value(),
                needle: qubit.needle_endpoint(),
            })
            .collect()
    }

    fn index_of(&self, qubit_id: QubitId) -> Result<usize, QvisError> {
        self.qubits
            .iter()
            .position(|qubit| qubit.id == qubit_id)
            .ok_or_else(|| QvisError::UnknownQubit {
                qubit_id,
                message: "not part of this scene".to_string(),
            })
    }

    fn apply_at(&mut self, index: usize, gate: Gate) -> Option<Outcome> {
        let outcome = self.qubits[index].state.apply_gate(gate, &mut self.rng);
        if let Some(outcome) = outcome {
            self.log.record(self.qubits[index].id, outcome);
        }
        outcome
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = match self.selected {
            Some(gate) => gate.symbol(),
            None => "-",
        };
        writeln!(f, "Scene[{} qubits, selected: {}]", self.qubits.len(), selected)?;
        for qubit in &self.qubits {
            match qubit.state.collapsed_value() {
                Some(value) => writeln!(f, "  {}: |{}>", qubit.id, value)?,
                None => {
                    let (p0, p1) = qubit.state.probabilities();
                    writeln!(f, "  {}: |0>: {:.2}, |1>: {:.2}", qubit.id, p0, p1)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::layout::*;
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn rect_edge_semantics() {
        let rect = Rect::new(50.0, 500.0, 80.0, 40.0);
        assert!(rect.contains(Point::new(50.0, 500.0)), "top-left edge is inside");
        assert!(rect.contains(Point::new(129.9, 539.9)));
        assert!(!rect.contains(Point::new(130.0, 520.0)), "right edge is outside");
        assert!(!rect.contains(Point::new(90.0, 540.0)), "bottom edge is outside");
    }

    #[test]
    fn circle_rim_counts_as_inside() {
        let scene = Scene::with_seed(SceneLayout::two_qubit_default(), 1).unwrap();
        let qubit = &scene.qubits()[0];
        let rim = Point::new(qubit.center().x + qubit.radius(), qubit.center().y);
        assert!(qubit.contains(rim));
        let outside = Point::new(qubit.center().x + qubit.radius() + 0.1, qubit.center().y);
        assert!(!qubit.contains(outside));
    }

    #[test]
    fn default_layout_matches_original_arrangement() {
        let layout = SceneLayout::two_qubit_default();
        assert_eq!(layout.qubits.len(), 2);
        assert_eq!(layout.qubits[0].center, Point::new(200.0, 300.0));
        assert_eq!(layout.qubits[1].center, Point::new(600.0, 300.0));

        let rects: Vec<Rect> = layout.buttons.iter().map(|b| b.rect()).collect();
        assert_eq!(rects[0], Rect::new(50.0, 500.0, 80.0, 40.0));
        assert_eq!(rects[1], Rect::new(150.0, 500.0, 80.0, 40.0));
        assert_eq!(rects[2], Rect::new(250.0, 500.0, 100.0, 40.0));
        assert_eq!(rects[3], Rect::new(370.0, 500.0, 80.0, 40.0));

        let labels: Vec<&str> = layout.buttons.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["H", "X", "Measure", "Reset"]);
    }

    #[test]
    fn evenly_spaced_positions() {
        let layout = SceneLayout::evenly_spaced(3);
        let xs: Vec<f64> = layout.qubits.iter().map(|q| q.center.x).collect();
        assert_eq!(xs, [200.0, 400.0, 600.0]);
    }

    #[test]
    fn tick_turns_needle_by_one_step() {
        let mut scene = Scene::with_seed(SceneLayout::two_qubit_default(), 1).unwrap();
        assert!(scene.qubits()[0].indicator_angle().abs() < TEST_TOLERANCE);
        scene.tick();
        let expected = INDICATOR_STEP_DEGREES.to_radians();
        assert!((scene.qubits()[0].indicator_angle() - expected).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn needle_endpoint_sits_on_rim() {
        let mut scene = Scene::with_seed(SceneLayout::two_qubit_default(), 1).unwrap();
        for _ in 0..100 {
            scene.tick();
        }
        let qubit = &scene.qubits()[0];
        let needle = qubit.needle_endpoint();
        let dx = needle.x - qubit.center().x;
        let dy = needle.y - qubit.center().y;
        let distance = (dx * dx + dy * dy).sqrt();
        assert!((distance - qubit.radius()).abs() < 1e-6, "needle drifted off the rim: {}", distance);
    }
}
