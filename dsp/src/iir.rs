use super::{macc, Error, Filter};

/// Direct-form I IIR filter of order `N`.
///
/// The output is computed as
/// `y0 = b0*x0 + b1*x1 + .. + bN*xN - a1*y1 - .. - aN*yN`
/// with separate input and output histories of `N` samples each.
///
/// The multiply-accumulate always runs on the history as it was before the
/// current sample: `xs[i]` and `ys[i]` hold `x[n-1-i]` and `y[n-1-i]`.
/// Only after the output is known are both histories shifted and the new
/// `x0`, `y0` stored as the newest entries.
///
/// High orders in direct form are sensitive to coefficient quantization.
/// Prefer [`crate::Cascade`] where the design allows a factorization into
/// second-order sections.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectForm<const N: usize> {
    b0: f32,
    b: [f32; N],
    a: [f32; N],
    xs: [f32; N],
    ys: [f32; N],
}

impl<const N: usize> DirectForm<N> {
    /// Build a filter from transfer function coefficients.
    ///
    /// # Args
    /// * `b` - Feed-forward coefficients `[b0, b1, .., bN]`.
    /// * `a` - Feedback coefficients `[a0, a1, .., aN]`. All coefficients
    ///   are scaled such that `a0 = 1`.
    pub fn new(b: &[f32], a: &[f32]) -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::Order);
        }
        for c in [b, a] {
            if c.len() != N + 1 {
                return Err(Error::Length {
                    expected: N + 1,
                    actual: c.len(),
                });
            }
        }
        let a0 = a[0];
        if a0 == 0. || !a0.is_finite() {
            return Err(Error::Normalization);
        }

        let mut iir = Self {
            b0: b[0] / a0,
            b: [0.; N],
            a: [0.; N],
            xs: [0.; N],
            ys: [0.; N],
        };
        for (bi, b) in iir.b.iter_mut().zip(&b[1..]) {
            *bi = *b / a0;
        }
        for (ai, a) in iir.a.iter_mut().zip(&a[1..]) {
            *ai = *a / a0;
        }
        Ok(iir)
    }

    /// Normalized feed-forward coefficients without `b0`.
    pub fn b(&self) -> &[f32; N] {
        &self.b
    }

    /// Normalized feedback coefficients without `a0`.
    pub fn a(&self) -> &[f32; N] {
        &self.a
    }

    /// Input history, most recent first.
    pub fn inputs(&self) -> &[f32; N] {
        &self.xs
    }

    /// Output history, most recent first.
    pub fn outputs(&self) -> &[f32; N] {
        &self.ys
    }
}

impl<const N: usize> Filter for DirectForm<N> {
    fn process(&mut self, x0: f32) -> f32 {
        let y0 = macc(self.b0 * x0, &self.xs, &self.b)
            - macc(0., &self.ys, &self.a);
        // Advance time        x1 .. xN  ->  x0 x1 .. xN-1
        self.xs.copy_within(0..N - 1, 1);
        self.ys.copy_within(0..N - 1, 1);
        self.xs[0] = x0;
        self.ys[0] = y0;
        y0
    }

    fn reset(&mut self) {
        self.xs = [0.; N];
        self.ys = [0.; N];
    }

    fn dc_gain(&self) -> f32 {
        (self.b0 + self.b.iter().sum::<f32>())
            / (1. + self.a.iter().sum::<f32>())
    }
}
