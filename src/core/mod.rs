// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod sample;
pub mod state;

// Re-export public types for convenient access via `qvis::core::TypeName`
pub use error::{QubitId, QvisError};
pub use sample::DrawSource;
pub use state::{Outcome, QubitState};

pub mod constants;
pub use constants::qvis_constants::{FRAC_1_SQRT_2, NORM_TOLERANCE}; // Re-export
