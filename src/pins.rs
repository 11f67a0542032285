//! Pin to converter channel mapping of the STM32F407.
//!
//! The lookups are static tables keyed by port and pin number. Anything not
//! in a table has no analog function and yields an [`Error`].
use core::fmt;

use arbitrary_int::u4;
use serde::Serialize;

use crate::Error;

/// GPIO port.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, strum::EnumIter, strum::Display,
)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

/// A single GPIO pin, e.g. `PC0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PinId {
    pub port: Port,
    pub pin: u4,
}

impl PinId {
    /// # Panics
    /// If `pin` is not in `0..16`.
    pub const fn new(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin: u4::new(pin),
        }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port, self.pin)
    }
}

/// ADC peripheral instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Adc {
    Adc1,
    Adc3,
}

/// An ADC peripheral and its input multiplexer channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdcChannel {
    pub adc: Adc,
    pub channel: u8,
}

/// DAC output channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DacChannel {
    Ch1,
    Ch2,
}

const fn adc(port: Port, pin: u8, adc: Adc, channel: u8) -> (PinId, AdcChannel) {
    (PinId::new(port, pin), AdcChannel { adc, channel })
}

use Adc::{Adc1, Adc3};
use Port::{A, B, C, F};

static ADC_CHANNELS: [(PinId, AdcChannel); 24] = [
    adc(A, 0, Adc1, 0),
    adc(A, 1, Adc1, 1),
    adc(A, 2, Adc1, 2),
    adc(A, 3, Adc1, 3),
    adc(A, 4, Adc1, 4),
    adc(A, 5, Adc1, 5),
    adc(A, 6, Adc1, 6),
    adc(A, 7, Adc1, 7),
    adc(B, 0, Adc1, 8),
    adc(B, 1, Adc1, 9),
    adc(C, 0, Adc1, 10),
    adc(C, 1, Adc1, 11),
    adc(C, 2, Adc1, 12),
    adc(C, 3, Adc1, 13),
    adc(C, 4, Adc1, 14),
    adc(C, 5, Adc1, 15),
    // Port F is only routed to ADC3.
    adc(F, 3, Adc3, 9),
    adc(F, 4, Adc3, 14),
    adc(F, 5, Adc3, 15),
    adc(F, 6, Adc3, 4),
    adc(F, 7, Adc3, 5),
    adc(F, 8, Adc3, 6),
    adc(F, 9, Adc3, 7),
    adc(F, 10, Adc3, 8),
];

static DAC_CHANNELS: [(PinId, DacChannel); 2] = [
    (PinId::new(A, 4), DacChannel::Ch1),
    (PinId::new(A, 5), DacChannel::Ch2),
];

/// Look up the ADC peripheral and channel sampling a pin.
pub fn adc_channel(pin: PinId) -> Result<AdcChannel, Error> {
    ADC_CHANNELS
        .iter()
        .find(|(p, _)| *p == pin)
        .map(|(_, channel)| *channel)
        .ok_or(Error::NoAdcChannel(pin))
}

/// Look up the DAC channel driving a pin.
pub fn dac_channel(pin: PinId) -> Result<DacChannel, Error> {
    DAC_CHANNELS
        .iter()
        .find(|(p, _)| *p == pin)
        .map(|(_, channel)| *channel)
        .ok_or(Error::NoDacChannel(pin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn all_pins() -> impl Iterator<Item = PinId> {
        Port::iter().flat_map(|port| (0..16).map(move |pin| PinId::new(port, pin)))
    }

    #[test]
    fn adc_mapping_is_unique() {
        let mapped: Vec<_> = all_pins()
            .filter_map(|pin| adc_channel(pin).ok().map(|ch| (pin, ch)))
            .collect();
        assert_eq!(mapped.len(), ADC_CHANNELS.len());
        for (i, (_, a)) in mapped.iter().enumerate() {
            for (_, b) in &mapped[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for (pin, ch) in mapped {
            assert!(ch.channel < 16, "{pin}: {ch:?}");
        }
    }

    #[test]
    fn adc_lookup() {
        assert_eq!(
            adc_channel(PinId::new(Port::C, 0)),
            Ok(AdcChannel {
                adc: Adc::Adc1,
                channel: 10
            })
        );
        assert_eq!(
            adc_channel(PinId::new(Port::F, 10)),
            Ok(AdcChannel {
                adc: Adc::Adc3,
                channel: 8
            })
        );
        assert_eq!(
            adc_channel(PinId::new(Port::B, 2)),
            Err(Error::NoAdcChannel(PinId::new(Port::B, 2)))
        );
        assert_eq!(
            adc_channel(PinId::new(Port::G, 0)),
            Err(Error::NoAdcChannel(PinId::new(Port::G, 0)))
        );
    }

    #[test]
    fn dac_lookup() {
        assert_eq!(dac_channel(PinId::new(Port::A, 4)), Ok(DacChannel::Ch1));
        assert_eq!(dac_channel(PinId::new(Port::A, 5)), Ok(DacChannel::Ch2));
        let unmapped = all_pins().filter(|pin| dac_channel(*pin).is_err());
        assert_eq!(unmapped.count(), 9 * 16 - 2);
        assert_eq!(
            dac_channel(PinId::new(Port::C, 0)),
            Err(Error::NoDacChannel(PinId::new(Port::C, 0)))
        );
    }

    #[test]
    fn display() {
        assert_eq!(PinId::new(Port::C, 8).to_string(), "PC8");
        assert_eq!(
            Error::NoDacChannel(PinId::new(Port::F, 10)).to_string(),
            "No DAC channel on PF10"
        );
    }
}
