//! 12th order band-stop around 5 kHz as a single direct-form IIR.
//!
//! The same response as the `biquad` application, computed without
//! factoring. On the host this prints the build configuration and the impulse
//! response.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use conditioner::{
    coefficients::{BANDSTOP_A, BANDSTOP_B, BANDSTOP_ORDER},
    settings::{Coefficients, Settings},
};
use dsp::DirectForm;

const SETTINGS: Settings = Settings::new(Coefficients::DirectForm {
    b: &BANDSTOP_B,
    a: &BANDSTOP_A,
});

type Bandstop = DirectForm<BANDSTOP_ORDER>;

fn filter() -> Result<Bandstop, conditioner::Error> {
    SETTINGS.coefficients.direct_form()
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
            "Direct form IIR, order {}, DC gain {}",
            BANDSTOP_ORDER,
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
