#![cfg_attr(not(test), no_std)]

mod tools;
pub use tools::*;
pub mod biquad;
pub use biquad::{Biquad, Cascade};
pub mod fir;
pub use fir::Fir;
pub mod iir;
pub use iir::DirectForm;
pub mod testing;

/// Errors raised while building a filter from a coefficient set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Expected {expected} coefficients, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("Leading feedback coefficient must be finite and nonzero")]
    Normalization,
    #[error("Filter order must be at least one")]
    Order,
}

/// A single-input, single-output sampled-data filter.
///
/// Every implementation owns its history. `process()` consumes exactly one
/// input sample per call and produces exactly one output sample; the history
/// only ever advances inside `process()`.
pub trait Filter {
    /// Feed a new input sample, advance the filter state, and return the new
    /// output sample.
    fn process(&mut self, x: f32) -> f32;

    /// Clear the history as if the filter had only ever seen zeros.
    fn reset(&mut self);

    /// Steady-state gain for a constant input.
    fn dc_gain(&self) -> f32;
}

impl<F: Filter + ?Sized> Filter for &mut F {
    fn process(&mut self, x: f32) -> f32 {
        (**self).process(x)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn dc_gain(&self) -> f32 {
        (**self).dc_gain()
    }
}

/// Run a unit impulse through a filter and collect the first `L` output
/// samples.
///
/// The filter is reset before and after.
pub fn impulse_response<F: Filter, const L: usize>(filter: &mut F) -> [f32; L] {
    filter.reset();
    let mut y = [0.; L];
    for (i, y) in y.iter_mut().enumerate() {
        *y = filter.process(if i == 0 { 1. } else { 0. });
    }
    filter.reset();
    y
}
