use super::hal::dac::{DacOut, DacPin, C2};

use crate::{convert::DacCode, sampling::AnalogOutput};

/// DAC channel 2 (PA5), 12 bit right aligned, output buffer enabled.
pub struct DacOutput {
    channel: C2,
}

impl DacOutput {
    /// Enable the channel and park it at mid-scale.
    pub fn new(mut channel: C2) -> Self {
        channel.enable();
        channel.set_value(DacCode::MID_SCALE);
        Self { channel }
    }
}

impl AnalogOutput for DacOutput {
    fn write(&mut self, code: DacCode) {
        self.channel.set_value(code.into());
    }
}
