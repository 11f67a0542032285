//! Build-time application settings.
//!
//! # Design
//! There is no run-time configuration. Each firmware binary selects one filter
//! structure and defines a `const` [`Settings`]. During start-up the settings
//! are resolved into converter channels and a timer configuration by
//! [`Settings::resolve()`]; anything that cannot be realized on the hardware
//! is an [`Error`] and stops the firmware before sampling begins.
//!
//! The settings serialize so that the host build of each binary can describe
//! the firmware it corresponds to, see [`Report`].
use dsp::{biquad::Vec5, Cascade, DirectForm, Filter, Fir};
use fugit::HertzU32 as Hertz;
use serde::{Serialize, Serializer};

use crate::{
    design_parameters::{
        ADC_PIN, DAC_PIN, DEBUG_PIN, SAMPLE_RATE, TIMER_CLOCK, TIMER_TIME_BASE,
    },
    metadata::ApplicationMetadata,
    pins::{self, AdcChannel, DacChannel, PinId},
    timer::TimerConfig,
    Error,
};

/// The filter structure and its coefficients.
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum Coefficients {
    /// Direct convolution, see [`dsp::Fir`].
    Fir { taps: &'static [f32] },
    /// Direct-form IIR, see [`dsp::DirectForm`].
    DirectForm {
        b: &'static [f32],
        a: &'static [f32],
    },
    /// Cascaded biquads, see [`dsp::Cascade`].
    Cascade { sections: &'static [Vec5] },
}

impl Coefficients {
    /// Build the FIR described by these coefficients.
    pub fn fir<const N: usize>(&self) -> Result<Fir<N>, Error> {
        let Self::Fir { taps } = *self else {
            return Err(Error::FilterStructure { expected: "fir" });
        };
        Ok(Fir::new(exact(taps)?))
    }

    /// Build the direct-form IIR described by these coefficients.
    pub fn direct_form<const N: usize>(&self) -> Result<DirectForm<N>, Error> {
        let Self::DirectForm { b, a } = *self else {
            return Err(Error::FilterStructure {
                expected: "direct_form",
            });
        };
        Ok(DirectForm::new(b, a)?)
    }

    /// Build the biquad cascade described by these coefficients.
    pub fn cascade<const S: usize>(&self) -> Result<Cascade<S>, Error> {
        let Self::Cascade { sections } = *self else {
            return Err(Error::FilterStructure { expected: "cascade" });
        };
        Ok(Cascade::from_ba(exact(sections)?))
    }
}

fn exact<T: Copy, const N: usize>(c: &[T]) -> Result<[T; N], dsp::Error> {
    c.try_into().map_err(|_| dsp::Error::Length {
        expected: N,
        actual: c.len(),
    })
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct Settings {
    #[serde(serialize_with = "hertz")]
    pub sample_rate: Hertz,
    pub adc: PinId,
    pub dac: PinId,
    /// Optional tick indicator output.
    pub debug: Option<PinId>,
    pub coefficients: Coefficients,
}

fn hertz<S: Serializer>(rate: &Hertz, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(rate.raw())
}

impl Settings {
    /// Settings for the default board wiring and sampling rate.
    pub const fn new(coefficients: Coefficients) -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            adc: ADC_PIN,
            dac: DAC_PIN,
            debug: Some(DEBUG_PIN),
            coefficients,
        }
    }

    /// Map the settings onto the hardware.
    pub fn resolve(&self) -> Result<Resolved, Error> {
        Ok(Resolved {
            adc: pins::adc_channel(self.adc)?,
            dac: pins::dac_channel(self.dac)?,
            timer: TimerConfig::new(
                TIMER_CLOCK,
                TIMER_TIME_BASE,
                self.sample_rate,
            )?,
        })
    }
}

/// Hardware resources backing a set of [`Settings`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub adc: AdcChannel,
    pub dac: DacChannel,
    pub timer: TimerConfig,
}

/// Number of impulse response samples in a [`Report`].
pub const REPORT_LENGTH: usize = 32;

/// Description of a firmware build.
#[derive(Debug, Serialize)]
pub struct Report {
    pub metadata: ApplicationMetadata,
    pub settings: Settings,
    pub resolved: Resolved,
    pub dc_gain: f32,
    pub impulse_response: [f32; REPORT_LENGTH],
}

impl Report {
    pub fn new<F: Filter>(
        settings: &Settings,
        filter: &mut F,
    ) -> Result<Self, Error> {
        Ok(Self {
            metadata: ApplicationMetadata::new(),
            settings: *settings,
            resolved: settings.resolve()?,
            dc_gain: filter.dc_gain(),
            impulse_response: dsp::impulse_response(filter),
        })
    }
}
