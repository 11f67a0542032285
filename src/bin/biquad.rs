//! 12th order band-stop around 5 kHz as a cascade of six biquads.
//!
//! On the host this prints the build configuration and the impulse response.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use conditioner::{
    coefficients::{BANDSTOP_ORDER, BANDSTOP_SECTIONS},
    settings::{Coefficients, Settings},
};
use dsp::Cascade;

const SETTINGS: Settings = Settings::new(Coefficients::Cascade {
    sections: &BANDSTOP_SECTIONS,
});

type Bandstop = Cascade<{ BANDSTOP_ORDER / 2 }>;

fn filter() -> Result<Bandstop, conditioner::Error> {
    SETTINGS.coefficients.cascade()
}

#[cfg(not(target_os = "none"))]
fn main() {
    let report =
        conditioner::settings::Report::new(&SETTINGS, &mut filter().unwrap())
            .unwrap();
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

#[cfg(target_os = "none")]
#[rtic::app(device = conditioner::hardware::hal::pac, peripherals = true)]
mod app {
    use super::*;

    use conditioner::{
        hardware::{self, AdcInput, DacOutput, DebugPin, SamplingTimer},
        sampling::{Conditioner, Sampler},
    };
    use dsp::Filter;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        conditioner: Conditioner<Bandstop, AdcInput, DacOutput>,
        sampler: &'static Sampler,
        tick_sampler: &'static Sampler,
        timer: SamplingTimer,
        debug: Option<DebugPin>,
    }

    #[init(local = [sampler_storage: Sampler = Sampler::new()])]
    fn init(c: init::Context) -> (Shared, Local) {
        let devices = hardware::setup(c.device, &SETTINGS);
        let sampler: &'static Sampler = c.local.sampler_storage;

        let filter = match filter() {
            Ok(filter) => filter,
            Err(err) => panic!("{err}"),
        };
        log::info!(
            "Biquad cascade, {} sections, DC gain {}",
            filter.sections().len(),
            filter.dc_gain()
        );

        let mut timer = devices.timer;
        timer.start().unwrap();

        let local = Local {
            conditioner: Conditioner::new(filter, devices.input, devices.output),
            sampler,
            tick_sampler: sampler,
            timer,
            debug: devices.debug,
        };
        (Shared {}, local)
    }

    #[idle(local = [conditioner, sampler])]
    fn idle(c: idle::Context) -> ! {
        c.local.conditioner.run(c.local.sampler)
    }

    /// Sampling tick. Only signals the main loop.
    #[task(binds = TIM3, priority = 1, local = [timer, tick_sampler, debug])]
    fn tick(c: tick::Context) {
        c.local.timer.acknowledge();
        c.local.tick_sampler.tick();
        if let Some(pin) = c.local.debug {
            pin.toggle();
        }
    }
}
