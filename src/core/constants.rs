//! Numeric constants shared across the engine and its tests.

/// Constants fixed by the engine's contract
pub mod qvis_constants {
    /// `1/sqrt(2)`, the Hadamard coefficient.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Allowed drift of `amplitude0^2 + amplitude1^2` from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Probabilities are presented at two decimal digits (`p * 100` rounded).
    pub const DISPLAY_SCALE: f64 = 100.0;
}
