#![cfg_attr(not(test), no_std)]

pub mod coefficients;
pub mod convert;
pub mod design_parameters;
pub mod metadata;
pub mod pins;
pub mod sampling;
pub mod settings;
pub mod timer;

#[cfg(target_os = "none")]
pub mod hardware;

use pins::PinId;

/// Configuration-time errors.
///
/// These are only ever raised during start-up, before the sampling timer
/// runs. Firmware treats any of them as fatal.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("No ADC channel on {0}")]
    NoAdcChannel(PinId),
    #[error("No DAC channel on {0}")]
    NoDacChannel(PinId),
    #[error("Sampling rate of {requested_hz} Hz: {reason}")]
    SamplingRate {
        requested_hz: u32,
        reason: &'static str,
    },
    #[error("Coefficients are not for a {expected} filter")]
    FilterStructure { expected: &'static str },
    #[error("Filter coefficients: {0}")]
    Coefficients(#[from] dsp::Error),
}
