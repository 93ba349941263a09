// src/core/sample.rs

//! The injectable randomness seam used by measurement collapse.
//!
//! Production code draws through any [`rand::Rng`] (the scene owns a
//! `StdRng`); tests implement [`DrawSource`] directly to script exact draw
//! sequences and force boundary-probability outcomes.

use rand::{Rng, RngExt};

/// A source of uniform draws in `[0, 1)`.
pub trait DrawSource {
    /// Returns the next uniform draw in `[0, 1)`.
    fn draw_unit(&mut self) -> f64;
}

// Every RNG from the `rand` ecosystem is a draw source.
impl<R: Rng> DrawSource for R {
    fn draw_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
