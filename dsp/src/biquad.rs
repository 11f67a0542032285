use super::Filter;

/// Second-order section coefficients.
///
/// Feed-forward coefficients `(b0, b1, b2)` followed by the feedback
/// coefficients `(a1, a2)`, normalized such that `a0 = 1`.
pub type Vec5 = [f32; 5];

/// Second-order section state.
///
/// The two previous inputs followed by the two previous outputs:
/// `(x1, x2, y1, y2)`. Lower indices correspond to more recent samples.
pub type Vec4 = [f32; 4];

/// Biquad (second-order IIR section) coefficients.
///
/// The new output is computed as
/// `y0 = b0*x0 + b1*x1 + b2*x2 - a1*y1 - a2*y2`.
///
/// The coefficients are immutable and carry no state: the state is passed
/// to [`Biquad::update()`] so that one coefficient set could drive any number
/// of independent histories.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Biquad {
    pub ba: Vec5,
}

impl Default for Biquad {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Biquad {
    /// Unity gain passthrough.
    pub const IDENTITY: Self = Self::new([1., 0., 0., 0., 0.]);

    pub const fn new(ba: Vec5) -> Self {
        Self { ba }
    }

    /// Compute the overall (DC feed-forward) gain.
    pub fn dc_gain(&self) -> f32 {
        let [b0, b1, b2, a1, a2] = self.ba;
        (b0 + b1 + b2) / (1. + a1 + a2)
    }

    /// Feed a new input value into the section, update the section state,
    /// and return the new output. Only the state `xy` is modified.
    ///
    /// # Arguments
    /// * `xy` - Current section state.
    /// * `x0` - New input.
    pub fn update(&self, xy: &mut Vec4, x0: f32) -> f32 {
        let [b0, b1, b2, a1, a2] = self.ba;
        let [x1, x2, y1, y2] = *xy;
        let y0 = b0 * x0 + b1 * x1 + b2 * x2 - a1 * y1 - a2 * y2;
        *xy = [x0, x1, y0, y1];
        y0
    }
}

/// Cascade of `S` biquad sections with their state.
///
/// Each sample runs through the sections in index order; a section's output
/// is the next section's input.
///
/// Reordering the sections leaves the ideal transfer function unchanged but
/// changes the rounding: outputs are only bit-reproducible for a fixed order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cascade<const S: usize> {
    sections: [Biquad; S],
    state: [Vec4; S],
}

impl<const S: usize> Cascade<S> {
    pub const fn new(sections: [Biquad; S]) -> Self {
        Self {
            sections,
            state: [[0.; 4]; S],
        }
    }

    /// Build the cascade from raw `[b0, b1, b2, a1, a2]` section coefficients.
    pub const fn from_ba(ba: [Vec5; S]) -> Self {
        let mut sections = [Biquad::IDENTITY; S];
        let mut i = 0;
        while i < S {
            sections[i] = Biquad::new(ba[i]);
            i += 1;
        }
        Self::new(sections)
    }

    pub fn sections(&self) -> &[Biquad; S] {
        &self.sections
    }

    /// Per-section state.
    pub fn state(&self) -> &[Vec4; S] {
        &self.state
    }
}

impl<const S: usize> Filter for Cascade<S> {
    fn process(&mut self, x0: f32) -> f32 {
        self.sections
            .iter()
            .zip(self.state.iter_mut())
            .fold(x0, |x, (section, xy)| section.update(xy, x))
    }

    fn reset(&mut self) {
        self.state = [[0.; 4]; S];
    }

    fn dc_gain(&self) -> f32 {
        self.sections.iter().map(Biquad::dc_gain).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{allclose, isclose};

    #[test]
    fn section_update() {
        let biquad = Biquad::new([0.5, 0.25, 0.125, -0.5, 0.25]);
        let mut xy = [0.; 4];
        assert_eq!(biquad.update(&mut xy, 1.), 0.5);
        assert_eq!(xy, [1., 0., 0.5, 0.]);
        // 0.25*1 + 0.5*0.5
        assert_eq!(biquad.update(&mut xy, 0.), 0.5);
        assert_eq!(xy, [0., 1., 0.5, 0.5]);
        // 0.125*1 + 0.5*0.5 - 0.25*0.5
        assert_eq!(biquad.update(&mut xy, 0.), 0.25);
        assert_eq!(xy, [0., 0., 0.25, 0.5]);
    }

    #[test]
    fn identity() {
        let mut cascade = Cascade::new([Biquad::default(); 3]);
        for x in [0.1, -0.3, 0.49] {
            assert_eq!(cascade.process(x), x);
        }
        assert_eq!(cascade.dc_gain(), 1.);
    }

    #[test]
    fn sections_chain() {
        // Two pure delays make a two sample delay.
        let delay = [0., 1., 0., 0., 0.];
        let mut cascade = Cascade::from_ba([delay; 2]);
        let y: [f32; 4] = crate::impulse_response(&mut cascade);
        assert_eq!(y, [0., 0., 1., 0.]);
    }

    #[test]
    fn order_does_not_change_response() {
        let s0 = [0.2, 0.4, 0.2, -0.5, 0.1];
        let s1 = [1.0, -0.3, 0.0, 0.2, 0.0];
        let mut a = Cascade::from_ba([s0, s1]);
        let mut b = Cascade::from_ba([s1, s0]);
        let ya: [f32; 32] = crate::impulse_response(&mut a);
        let yb: [f32; 32] = crate::impulse_response(&mut b);
        assert!(allclose(&ya, &yb, 1e-5, 1e-7));
        assert!(isclose(a.dc_gain(), b.dc_gain(), 1e-6, 0.));
    }

    #[test]
    fn reset_clears_state() {
        let mut cascade = Cascade::from_ba([[1., 1., 1., 0.5, 0.25]]);
        cascade.process(0.3);
        cascade.reset();
        assert_eq!(cascade.state(), &[[0.; 4]]);
    }
}
