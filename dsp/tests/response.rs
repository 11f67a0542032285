use dsp::{
    impulse_response,
    testing::{allclose, isclose},
    Cascade, DirectForm, Filter, Fir,
};

/// Pole radius of the quarter-rate notch.
const R: f32 = 0.9;

/// Notch at a quarter of the sampling rate with unity DC gain.
///
/// Zeros at `z = ±j`, poles at `z = ±jR`.
fn notch() -> [f32; 5] {
    let g = (1. + R * R) / 2.;
    [g, 0., g, 0., R * R]
}

/// Coefficients of the product of two polynomials in `z^-1`.
fn convolve(a: &[f32], b: &[f32]) -> Vec<f32> {
    let mut c = vec![0.; a.len() + b.len() - 1];
    for (i, a) in a.iter().enumerate() {
        for (j, b) in b.iter().enumerate() {
            c[i + j] += a * b;
        }
    }
    c
}

/// Two well-damped sections with distinct responses.
const SECTIONS: [[f32; 5]; 2] = [
    [0.2, 0.4, 0.2, -0.5, 0.1],
    [1.0, -0.3, 0.0, 0.2, 0.0],
];

fn direct_form_of(sections: &[[f32; 5]]) -> DirectForm<4> {
    let (b, a) = sections.iter().fold(
        (vec![1.], vec![1.]),
        |(b, a), &[b0, b1, b2, a1, a2]| {
            (convolve(&b, &[b0, b1, b2]), convolve(&a, &[1., a1, a2]))
        },
    );
    DirectForm::new(&b, &a).unwrap()
}

#[test]
fn fir_impulse_response_is_taps() {
    let taps = [0.1, -0.2, 0.7, -0.2, 0.1];
    let mut fir = Fir::new(taps);
    let y: [f32; 8] = impulse_response(&mut fir);
    assert_eq!(y[..5], taps);
    assert_eq!(y[5..], [0.; 3]);
    // The impulse response leaves no trace.
    assert_eq!(fir.history(), &[0.; 5]);
}

#[test]
fn direct_form_matches_cascade() {
    let mut cascade = Cascade::from_ba(SECTIONS);
    let mut direct = direct_form_of(&SECTIONS);
    let yc: [f32; 64] = impulse_response(&mut cascade);
    let yd: [f32; 64] = impulse_response(&mut direct);
    assert!(allclose(&yc, &yd, 1e-4, 1e-7));
    assert!(isclose(cascade.dc_gain(), direct.dc_gain(), 1e-5, 0.));
}

#[test]
fn direct_form_steady_state() {
    let mut direct = direct_form_of(&SECTIONS);
    let x = 0.3;
    let mut y = 0.;
    for _ in 0..200 {
        y = direct.process(x);
    }
    assert!(isclose(y, x * direct.dc_gain(), 1e-5, 1e-7));
}

#[test]
fn decays_after_excitation() {
    let mut cascade = Cascade::from_ba([notch(), SECTIONS[0]]);
    for i in 0..100 {
        cascade.process(if i % 3 == 0 { 0.4 } else { -0.25 });
    }
    let mut last = 0f32;
    for _ in 0..500 {
        last = cascade.process(0.);
        assert!(last.is_finite());
    }
    assert!(last.abs() < 1e-9, "{last}");
}

#[test]
fn notch_rejects_quarter_rate() {
    let mut cascade = Cascade::from_ba([notch()]);
    assert!(isclose(cascade.dc_gain(), 1., 1e-6, 0.));
    let mut peak = 0f32;
    for n in 0..400 {
        // sin(n pi / 2)
        let x = [0., 0.5, 0., -0.5][n % 4];
        let y = cascade.process(x);
        if n >= 300 {
            peak = peak.max(y.abs());
        }
    }
    assert!(peak < 1e-4, "{peak}");

    // DC passes.
    cascade.reset();
    let mut y = 0.;
    for _ in 0..400 {
        y = cascade.process(0.25);
    }
    assert!(isclose(y, 0.25, 1e-4, 0.));
}
