//! Error handling logic

use std::fmt;

/// Identifies one qubit within a scene.
///
/// Ids are assigned positionally when the scene is built (the first qubit in
/// the layout is `QubitId(0)`, and so on) and stay stable for the lifetime of
/// the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Error types for the crate.
///
/// The engine itself is infallible: the gate set is a closed enumeration and
/// its arithmetic is defined for every reachable state. Errors arise only at
/// the scene boundary (bad construction, unknown qubit ids) and from the
/// diagnostic validation functions.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QvisError {
    /// Scene construction was asked to manage an unusable set of qubits.
    InvalidScene {
        /// InvalidScene failure message
        message: String,
    },

    /// An operation referenced a qubit id the scene does not own.
    UnknownQubit {
        /// The id that failed to resolve
        qubit_id: QubitId,
        /// UnknownQubit failure message
        message: String,
    },

    /// A qubit state violated the normalization or collapse invariant.
    Normalization {
        /// Normalization failure message
        message: String,
    },
}

impl fmt::Display for QvisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QvisError::InvalidScene { message } => write!(f, "Invalid Scene: {}", message),
            QvisError::UnknownQubit { qubit_id, message } => write!(f, "Unknown Qubit ({}): {}", qubit_id, message),
            QvisError::Normalization { message } => write!(f, "Normalization Violation: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QvisError {}
