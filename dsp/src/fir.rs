use super::{macc, Filter};

/// Direct-convolution FIR filter with `N` taps.
///
/// The history holds the most recent inputs, newest first: during the
/// multiply-accumulate `xs[k]` is `x[n - k]`, so tap `k` always weighs a
/// delay of `k` samples.
///
/// ```
/// use dsp::{Filter, Fir};
///
/// let mut fir = Fir::new([0.25, 0.5, 0.25]);
/// assert_eq!(fir.process(1.), 0.25);
/// assert_eq!(fir.process(0.), 0.5);
/// assert_eq!(fir.process(0.), 0.25);
/// assert_eq!(fir.process(0.), 0.);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fir<const N: usize> {
    taps: [f32; N],
    xs: [f32; N],
}

impl<const N: usize> Fir<N> {
    /// An empty filter is rejected at compile time:
    ///
    /// ```compile_fail
    /// let fir = dsp::Fir::<0>::new([]);
    /// ```
    pub const fn new(taps: [f32; N]) -> Self {
        const { assert!(N > 0, "FIR needs at least one tap") };
        Self { taps, xs: [0.; N] }
    }

    pub fn taps(&self) -> &[f32; N] {
        &self.taps
    }

    /// Input history, newest first.
    pub fn history(&self) -> &[f32; N] {
        &self.xs
    }
}

impl<const N: usize> Filter for Fir<N> {
    fn process(&mut self, x0: f32) -> f32 {
        // `xs` contains       x1 x2 .. xN
        // Shift               x1 x1 x2 .. xN-1
        // The oldest sample drops off the end.
        self.xs.copy_within(0..N - 1, 1);
        // Store x0            x0 x1 x2 .. xN-1
        self.xs[0] = x0;
        macc(0., &self.xs, &self.taps)
    }

    fn reset(&mut self) {
        self.xs = [0.; N];
    }

    fn dc_gain(&self) -> f32 {
        self.taps.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::allclose;

    #[test]
    fn impulse() {
        let taps = [0.1, -0.2, 0.4, 0.7];
        let mut fir = Fir::new(taps);
        let y: [f32; 6] = crate::impulse_response(&mut fir);
        assert!(allclose(&y, &[0.1, -0.2, 0.4, 0.7, 0., 0.], 0., 1e-7));
    }

    #[test]
    fn history_fills_with_constant() {
        let mut fir = Fir::new([0.2; 5]);
        for _ in 0..5 {
            fir.process(0.3);
        }
        assert_eq!(fir.history(), &[0.3; 5]);
        assert!((fir.process(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn single_tap_is_gain() {
        let mut fir = Fir::new([-2.]);
        assert_eq!(fir.process(0.25), -0.5);
        assert_eq!(fir.process(0.1), -0.2);
        assert_eq!(fir.history(), &[0.1]);
    }

    #[test]
    fn reset_clears_history() {
        let mut fir = Fir::new([1., 1.]);
        fir.process(0.5);
        fir.reset();
        assert_eq!(fir.history(), &[0.; 2]);
        assert_eq!(fir.process(0.), 0.);
    }
}
