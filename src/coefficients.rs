//! Filter designs.
//!
//! All designs are for a sampling rate of
//! [`crate::design_parameters::SAMPLE_RATE`] (20 kHz).
use dsp::biquad::Vec5;

/// 11 tap symmetric (linear phase) low-pass.
///
/// Windowed sinc, Hamming window, 8 kHz cutoff, unity DC gain. The group
/// delay is 5 samples.
pub const LOWPASS_TAPS: [f32; 11] = [
    0.00008, -0.00799, 0.04029, -0.10310, 0.17003, 0.80139, 0.17003, -0.10310,
    0.04029, -0.00799, 0.00008,
];

/// Order of the band-stop design.
pub const BANDSTOP_ORDER: usize = 12;

/// Chebyshev type I band-stop centered at 5 kHz, 6th order prototype
/// (12th order overall), 1 dB pass-band ripple.
///
/// Feed-forward coefficients `b0..b12`. The numerator is
/// `0.18324247 (1 + z^-2)^6`, placing all zeros at 5 kHz.
pub const BANDSTOP_B: [f32; BANDSTOP_ORDER + 1] = [
    0.18324247, 0., 1.0994548, 0., 2.748637, 0., 3.6648493, 0., 2.748637, 0.,
    1.0994548, 0., 0.18324247,
];

/// Feedback coefficients `a0..a12` of [`BANDSTOP_B`].
pub const BANDSTOP_A: [f32; BANDSTOP_ORDER + 1] = [
    1., 0., 2.8266304, 0., 3.9461521, 0., 3.1150661, 0., 1.6070013, 0.,
    0.52520013, 0., 0.13844145,
];

/// The band-stop of [`BANDSTOP_B`]/[`BANDSTOP_A`] factored into second
/// order sections `[b0, b1, b2, a1, a2]`.
///
/// Sections are ordered by increasing pole radius (increasing Q). The
/// overall gain is spread evenly across the sections.
pub const BANDSTOP_SECTIONS: [Vec5; BANDSTOP_ORDER / 2] = [
    [0.75365229, 0., 0.75365229, -0.90162822, 0.45667645],
    [0.75365229, 0., 0.75365229, 0.90162822, 0.45667645],
    [0.75365229, 0., 0.75365229, -0.72242687, 0.84535466],
    [0.75365229, 0., 0.75365229, 0.72242687, 0.84535466],
    [0.75365229, 0., 0.75365229, 0.60843362, 0.96379683],
    [0.75365229, 0., 0.75365229, -0.60843362, 0.96379683],
];

#[cfg(test)]
mod tests {
    use super::*;
    use dsp::{
        impulse_response,
        testing::{allclose, isclose},
        Cascade, DirectForm, Filter,
    };

    fn direct_form() -> DirectForm<BANDSTOP_ORDER> {
        DirectForm::new(&BANDSTOP_B, &BANDSTOP_A).unwrap()
    }

    /// Peak output magnitude for a 5 kHz (quarter rate) input of amplitude
    /// 0.5, once the transient has decayed.
    fn peak_at_center<F: Filter>(mut filter: F) -> f32 {
        let mut peak = 0f32;
        for n in 0..3000 {
            let y = filter.process([0., 0.5, 0., -0.5][n % 4]);
            if n >= 2000 {
                peak = peak.max(y.abs());
            }
        }
        peak
    }

    #[test]
    fn lowpass_is_symmetric() {
        for (a, b) in LOWPASS_TAPS.iter().zip(LOWPASS_TAPS.iter().rev()) {
            assert_eq!(a, b);
        }
        assert_eq!(LOWPASS_TAPS[5], 0.80139);
        assert!(isclose(LOWPASS_TAPS.iter().sum(), 1., 0., 1e-4));
    }

    #[test]
    fn sections_match_transfer_function() {
        let k: f32 = BANDSTOP_B.iter().sum::<f32>() / BANDSTOP_A.iter().sum::<f32>();
        let ks: f32 = BANDSTOP_SECTIONS
            .iter()
            .map(|&[b0, b1, b2, a1, a2]| (b0 + b1 + b2) / (1. + a1 + a2))
            .product();
        assert!(isclose(k, ks, 1e-4, 0.));
        // -1 dB ripple at DC
        assert!(isclose(k, 0.89125094, 1e-4, 0.));
        let g: f32 = BANDSTOP_SECTIONS.iter().map(|s| s[0]).product();
        assert!(isclose(g, BANDSTOP_B[0], 1e-5, 0.));
    }

    #[test]
    fn structures_agree() {
        let mut direct = direct_form();
        let mut cascade = Cascade::from_ba(BANDSTOP_SECTIONS);
        let yd: [f32; 64] = impulse_response(&mut direct);
        let yc: [f32; 64] = impulse_response(&mut cascade);
        assert!(allclose(&yd, &yc, 0., 1e-3));
        assert!(isclose(direct.dc_gain(), cascade.dc_gain(), 1e-4, 0.));
    }

    #[test]
    fn bandstop_decays() {
        let mut cascade = Cascade::from_ba(BANDSTOP_SECTIONS);
        for i in 0..200 {
            cascade.process(if i % 7 < 3 { 0.45 } else { -0.45 });
        }
        let mut y = 0.;
        for _ in 0..3000 {
            y = cascade.process(0.);
            assert!(y.is_finite());
        }
        assert!(y.abs() < 1e-9, "{y}");
    }

    #[test]
    fn bandstop_rejects_center() {
        assert!(peak_at_center(Cascade::from_ba(BANDSTOP_SECTIONS)) < 1e-4);
        assert!(peak_at_center(direct_form()) < 1e-3);
    }
}
