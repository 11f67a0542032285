//! Conversion between raw converter codes and normalized filter samples.
//!
//! Both converters are 12 bit, right aligned and unipolar. The filters work
//! on zero-centered samples normalized to `[-0.5, 0.5)` of full scale.
use serde::Serialize;

use crate::design_parameters::VREF;

/// A type representing an ADC sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdcCode(pub u16);

impl AdcCode {
    pub const BITS: u32 = 12;
    pub const MAX: u16 = (1 << Self::BITS) - 1;
    pub const MID_SCALE: u16 = 1 << (Self::BITS - 1);
    pub const FULL_SCALE: f32 = (1 << Self::BITS) as f32;
    pub const VOLT_PER_LSB: f32 = VREF / Self::FULL_SCALE;

    /// The zero-centered sample as a fraction of full scale.
    pub fn normalized(self) -> f32 {
        (i32::from(self.0) - i32::from(Self::MID_SCALE)) as f32
            / Self::FULL_SCALE
    }

    /// Voltage at the converter input.
    pub fn voltage(self) -> f32 {
        f32::from(self.0) * Self::VOLT_PER_LSB
    }
}

impl From<u16> for AdcCode {
    /// Construct an ADC code from the right aligned data register.
    fn from(value: u16) -> Self {
        Self(value & Self::MAX)
    }
}

impl From<AdcCode> for f32 {
    fn from(code: AdcCode) -> f32 {
        code.normalized()
    }
}

/// Custom type for referencing DAC output codes.
/// The internal integer is the raw code written to the 12 bit right aligned
/// DAC data holding register.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DacCode(pub u16);

impl DacCode {
    pub const BITS: u32 = 12;
    pub const MAX: u16 = (1 << Self::BITS) - 1;
    pub const MID_SCALE: u16 = 1 << (Self::BITS - 1);
    pub const FULL_SCALE: f32 = (1 << Self::BITS) as f32;
    pub const VOLT_PER_LSB: f32 = VREF / Self::FULL_SCALE;

    pub fn voltage(self) -> f32 {
        f32::from(self.0) * Self::VOLT_PER_LSB
    }
}

impl From<f32> for DacCode {
    /// Denormalize a filter output sample, rounding to the nearest code.
    ///
    /// Samples beyond the converter range saturate at the rails; NaN maps
    /// to code 0.
    fn from(y: f32) -> Self {
        let code = y * Self::FULL_SCALE + (f32::from(Self::MID_SCALE) + 0.5);
        // Note(as): float to int casts saturate, NaN becomes 0.
        Self((code as u16).min(Self::MAX))
    }
}

impl From<DacCode> for u16 {
    fn from(code: DacCode) -> u16 {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_range() {
        assert_eq!(AdcCode(0).normalized(), -0.5);
        assert_eq!(AdcCode(2048).normalized(), 0.);
        assert_eq!(AdcCode(4095).normalized(), 0.5 - 1. / 4096.);
        assert_eq!(AdcCode::from(0xf800).0, 0x800);
    }

    #[test]
    fn round_trip() {
        for raw in 0..=AdcCode::MAX {
            let y = f32::from(AdcCode(raw));
            let out = DacCode::from(y).0;
            assert!(out.abs_diff(raw) <= 1, "{raw} -> {out}");
        }
    }

    #[test]
    fn denormalize_saturates() {
        assert_eq!(DacCode::from(0.), DacCode(2048));
        assert_eq!(DacCode::from(0.75), DacCode(DacCode::MAX));
        assert_eq!(DacCode::from(-0.75), DacCode(0));
        assert_eq!(DacCode::from(f32::NAN), DacCode(0));
        assert_eq!(DacCode::from(f32::INFINITY), DacCode(DacCode::MAX));
    }

    #[test]
    fn rounds_to_nearest() {
        let lsb = 1. / DacCode::FULL_SCALE;
        assert_eq!(DacCode::from(0.4 * lsb), DacCode(2048));
        assert_eq!(DacCode::from(0.6 * lsb), DacCode(2049));
        assert_eq!(DacCode::from(-0.6 * lsb), DacCode(2047));
    }
}
