// src/scene/layout.rs

//! Geometry value objects and the default scene arrangement.
//!
//! Everything here is plain data: positions, hit areas, and the actions the
//! controls trigger. A renderer draws from these values; the scene dispatches
//! pointer input against them. None of it carries quantum semantics.

use crate::gates::Gate;

/// Canvas width of the default arrangement.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas height of the default arrangement.
pub const CANVAS_HEIGHT: f64 = 600.0;
/// Hit/draw radius of a qubit circle.
pub const QUBIT_RADIUS: f64 = 30.0;
/// Vertical position of the control row.
pub const BUTTON_ROW_Y: f64 = 500.0;
/// Height of every control.
pub const BUTTON_HEIGHT: f64 = 40.0;
/// Horizontal gap between adjacent controls.
pub const BUTTON_GAP: f64 = 20.0;

/// A point in canvas coordinates (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned hit rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Hit test. Top and left edges are inside, bottom and right are not.
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.x && pos.x < self.x + self.w && pos.y >= self.y && pos.y < self.y + self.h
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// What activating a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Store the gate as the scene's pending selection.
    Select(Gate),
    /// Reset every qubit in the scene.
    ResetAll,
}

/// One control in the scene: a hit rectangle plus its action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateButton {
    rect: Rect,
    action: ButtonAction,
}

impl GateButton {
    /// Creates a control.
    pub fn new(rect: Rect, action: ButtonAction) -> Self {
        Self { rect, action }
    }

    /// The control's hit rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The control's action.
    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Caption a renderer should draw on the control.
    pub fn label(&self) -> &'static str {
        match self.action {
            ButtonAction::Select(gate) => gate.label(),
            ButtonAction::ResetAll => "Reset",
        }
    }
}

/// Placement of one qubit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitPlacement {
    /// Center of the hit circle.
    pub center: Point,
    /// Radius of the hit circle.
    pub radius: f64,
}

impl QubitPlacement {
    /// Creates a placement.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The fixed arrangement a scene is built from: canvas size, qubit circles,
/// and the control row. Layouts are plain data; callers may construct their
/// own or start from one of the provided arrangements.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Qubit circle placements; scene ids follow this order.
    pub qubits: Vec<QubitPlacement>,
    /// The control row.
    pub buttons: Vec<GateButton>,
}

impl SceneLayout {
    /// The original two-qubit arrangement: an 800x600 canvas with qubits at
    /// a quarter and three quarters of the width, vertically centered, and
    /// the H / X / Measure / Reset row along the bottom.
    pub fn two_qubit_default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            qubits: vec![
                QubitPlacement::new(Point::new(CANVAS_WIDTH / 4.0, CANVAS_HEIGHT / 2.0), QUBIT_RADIUS),
                QubitPlacement::new(Point::new(3.0 * CANVAS_WIDTH / 4.0, CANVAS_HEIGHT / 2.0), QUBIT_RADIUS),
            ],
            buttons: default_button_row(),
        }
    }

    /// An arrangement with `count` qubits spread evenly across the default
    /// canvas, with the same control row.
    pub fn evenly_spaced(count: usize) -> Self {
        let qubits = (0..count)
            .map(|i| {
                let x = (i as f64 + 1.0) * CANVAS_WIDTH / (count as f64 + 1.0);
                QubitPlacement::new(Point::new(x, CANVAS_HEIGHT / 2.0), QUBIT_RADIUS)
            })
            .collect();
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            qubits,
            buttons: default_button_row(),
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::two_qubit_default()
    }
}

/// The H / X / Measure / Reset row along the bottom of the canvas. The
/// Measure control is wider to fit its caption.
fn default_button_row() -> Vec<GateButton> {
    let mut buttons = Vec::with_capacity(Gate::ALL.len() + 1);
    let mut x = 50.0;
    for gate in Gate::ALL {
        let w = if gate == Gate::Measure { 100.0 } else { 80.0 };
        buttons.push(GateButton::new(
            Rect::new(x, BUTTON_ROW_Y, w, BUTTON_HEIGHT),
            ButtonAction::Select(gate),
        ));
        x += w + BUTTON_GAP;
    }
    buttons.push(GateButton::new(
        Rect::new(x, BUTTON_ROW_Y, 80.0, BUTTON_HEIGHT),
        ButtonAction::ResetAll,
    ));
    buttons
}
