// tests/scene_tests.rs

// Import necessary types from the qvis crate
use qvis::scene::layout::{Point, SceneLayout};
use qvis::{Gate, PressAction, QubitId, QvisError, Scene};

// Press positions inside the default arrangement
const H_BUTTON: Point = Point { x: 90.0, y: 520.0 };
const X_BUTTON: Point = Point { x: 190.0, y: 520.0 };
const MEASURE_BUTTON: Point = Point { x: 300.0, y: 520.0 };
const RESET_BUTTON: Point = Point { x: 400.0, y: 520.0 };
const LEFT_QUBIT: Point = Point { x: 200.0, y: 300.0 };
const RIGHT_QUBIT: Point = Point { x: 600.0, y: 300.0 };
const EMPTY_CANVAS: Point = Point { x: 400.0, y: 100.0 };

// Helper building the default scene with a fixed seed
fn scene() -> Scene {
    Scene::with_seed(SceneLayout::two_qubit_default(), 99).expect("default layout has qubits")
}

#[test]
fn test_gate_button_arms_selection() {
    let mut scene = scene();
    assert_eq!(scene.selected_gate(), None);

    assert_eq!(scene.handle_press(H_BUTTON), PressAction::GateSelected(Gate::Hadamard));
    assert_eq!(scene.selected_gate(), Some(Gate::Hadamard));

    // A later control press replaces the pending selection
    assert_eq!(scene.handle_press(X_BUTTON), PressAction::GateSelected(Gate::PauliX));
    assert_eq!(scene.selected_gate(), Some(Gate::PauliX));
}

#[test]
fn test_qubit_press_without_selection_is_ignored() {
    let mut scene = scene();
    assert_eq!(scene.handle_press(LEFT_QUBIT), PressAction::Ignored);
    assert_eq!(scene.qubits()[0].state().probabilities(), (1.0, 0.0));
}

#[test]
fn test_select_then_apply_consumes_selection() {
    let mut scene = scene();
    scene.handle_press(X_BUTTON);

    match scene.handle_press(LEFT_QUBIT) {
        PressAction::GateApplied { qubit_id, gate, outcome } => {
            assert_eq!(qubit_id, QubitId(0));
            assert_eq!(gate, Gate::PauliX);
            assert_eq!(outcome, None);
        }
        other => panic!("expected a gate application, got {:?}", other),
    }

    assert_eq!(scene.selected_gate(), None, "applying a gate clears the selection");
    assert_eq!(scene.qubits()[0].state().probabilities(), (0.0, 1.0));
    assert_eq!(scene.qubits()[1].state().probabilities(), (1.0, 0.0), "qubits are independent");
}

#[test]
fn test_empty_canvas_press_keeps_selection() {
    let mut scene = scene();
    scene.handle_press(H_BUTTON);

    assert_eq!(scene.handle_press(EMPTY_CANVAS), PressAction::Ignored);
    assert_eq!(scene.selected_gate(), Some(Gate::Hadamard), "only applying a gate clears it");
}

#[test]
fn test_reset_button_resets_every_qubit() {
    let mut scene = scene();

    // Put the qubits in distinct non-initial states
    scene.handle_press(X_BUTTON);
    scene.handle_press(LEFT_QUBIT);
    scene.handle_press(MEASURE_BUTTON);
    scene.handle_press(RIGHT_QUBIT);
    assert!(scene.qubits()[1].state().is_collapsed());

    // Arm a selection, then reset: states clear, the selection survives
    scene.handle_press(H_BUTTON);
    assert_eq!(scene.handle_press(RESET_BUTTON), PressAction::SceneReset);

    for qubit in scene.qubits() {
        assert_eq!(qubit.state().amplitudes(), (1.0, 0.0));
        assert!(!qubit.state().is_collapsed());
    }
    assert_eq!(scene.selected_gate(), Some(Gate::Hadamard));
}

#[test]
fn test_measurement_is_recorded_in_the_log() {
    let mut scene = scene();
    assert!(scene.log().is_empty());

    scene.handle_press(MEASURE_BUTTON);
    let outcome = match scene.handle_press(LEFT_QUBIT) {
        PressAction::GateApplied { outcome: Some(outcome), .. } => outcome,
        other => panic!("expected a measurement, got {:?}", other),
    };

    let q0 = QubitId(0);
    assert_eq!(scene.log().latest(&q0), Some(outcome));
    assert_eq!(scene.log().total(&q0), 1);
    let (zeros, ones) = scene.log().counts(&q0);
    assert_eq!(zeros + ones, 1);

    // The untouched qubit has no history
    let q1 = QubitId(1);
    assert_eq!(scene.log().latest(&q1), None);
    assert_eq!(scene.log().counts(&q1), (0, 0));
}

#[test]
fn test_apply_to_unknown_qubit_errors() {
    let mut scene = scene();
    let missing = QubitId(5);

    match scene.apply_to(missing, Gate::Hadamard) {
        Err(QvisError::UnknownQubit { qubit_id, .. }) => assert_eq!(qubit_id, missing),
        other => panic!("expected UnknownQubit, got {:?}", other),
    }
}

#[test]
fn test_zero_qubit_layout_is_rejected() {
    let result = Scene::new(SceneLayout::evenly_spaced(0));
    assert!(
        matches!(result, Err(QvisError::InvalidScene { .. })),
        "zero-qubit layouts must be rejected"
    );
}

#[test]
fn test_tick_freezes_collapsed_needles() {
    let mut scene = scene();
    let q0 = QubitId(0);

    scene.apply_to(q0, Gate::Measure).unwrap();
    let frozen = scene.qubits()[0].indicator_angle();

    scene.tick();
    scene.tick();

    assert_eq!(scene.qubits()[0].indicator_angle(), frozen, "collapsed needle holds still");
    let turning = scene.qubits()[1].indicator_angle();
    assert!(turning > 0.0, "superposed needle keeps turning");
}

#[test]
fn test_views_carry_render_data() {
    let mut scene = scene();
    scene.handle_press(H_BUTTON);
    scene.handle_press(LEFT_QUBIT);
    scene.apply_to(QubitId(1), Gate::Measure).unwrap();

    let views = scene.views();
    assert_eq!(views.len(), 2);

    assert_eq!(views[0].id, QubitId(0));
    assert_eq!(views[0].probabilities, (0.5, 0.5));
    assert_eq!(views[0].collapsed_value, None);
    assert_eq!(views[0].radius, 30.0);

    let recorded = scene.log().latest(&QubitId(1)).expect("q1 was measured");
    assert_eq!(views[1].collapsed_value, Some(recorded.value()));
}

#[test]
fn test_same_seed_same_session() {
    let presses = [H_BUTTON, LEFT_QUBIT, MEASURE_BUTTON, LEFT_QUBIT];

    let mut first = Scene::with_seed(SceneLayout::two_qubit_default(), 7).unwrap();
    let mut second = Scene::with_seed(SceneLayout::two_qubit_default(), 7).unwrap();
    for press in presses {
        assert_eq!(first.handle_press(press), second.handle_press(press));
    }
    assert_eq!(first.log().latest(&QubitId(0)), second.log().latest(&QubitId(0)));
}

#[test]
fn test_scene_display_summary() {
    let mut scene = scene();
    let rendered = scene.to_string();
    assert!(rendered.contains("Scene[2 qubits, selected: -]"), "got: {}", rendered);
    assert!(rendered.contains("q0: |0>: 1.00, |1>: 0.00"), "got: {}", rendered);

    scene.handle_press(H_BUTTON);
    scene.apply_to(QubitId(1), Gate::Measure).unwrap();
    let rendered = scene.to_string();
    assert!(rendered.contains("selected: H"), "got: {}", rendered);
    let value = scene.log().latest(&QubitId(1)).unwrap().value();
    assert!(rendered.contains(&format!("q1: |{}>", value)), "got: {}", rendered);
}
