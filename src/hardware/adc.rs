use super::hal::{
    adc::{
        config::{AdcConfig, Clock, SampleTime},
        Adc,
    },
    gpio::{Analog, PC0},
    pac::ADC1,
};

use crate::{convert::AdcCode, sampling::AnalogInput};

/// Single-ended input on ADC1, one blocking software-triggered conversion
/// per read.
pub struct AdcInput {
    adc: Adc<ADC1>,
    pin: PC0<Analog>,
}

impl AdcInput {
    /// Sample and hold window. With the 12 cycle conversion this gives
    /// 96 ADC clocks, about 4.6 us per sample.
    const SAMPLE_TIME: SampleTime = SampleTime::Cycles_84;

    pub fn new(adc: ADC1, pin: PC0<Analog>) -> Self {
        // The ADC clock must not exceed 36 MHz: PCLK2 / 4 = 21 MHz.
        let config = AdcConfig::default().clock(Clock::Pclk2_div_4);
        let adc = Adc::adc1(adc, true, config);
        Self { adc, pin }
    }
}

impl AnalogInput for AdcInput {
    fn read(&mut self) -> AdcCode {
        AdcCode::from(self.adc.convert(&self.pin, Self::SAMPLE_TIME))
    }
}
