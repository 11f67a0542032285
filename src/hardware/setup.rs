//! Start-up configuration of the signal conditioner.
use core::sync::atomic::{AtomicBool, Ordering};

use super::{
    hal::{dac::DacExt, pac, prelude::*},
    sampling_timer::TIME_BASE,
    AdcInput, DacOutput, DebugPin, SamplingTimer,
};
use crate::{
    design_parameters::{self, ADC_PIN, DAC_PIN, DEBUG_PIN},
    settings::{Resolved, Settings},
};

/// The hardware interfaces of the signal path, configured but idle.
pub struct ConditionerDevices {
    pub input: AdcInput,
    pub output: DacOutput,
    /// Stopped until [`SamplingTimer::start()`].
    pub timer: SamplingTimer,
    pub debug: Option<DebugPin>,
    pub resolved: Resolved,
}

/// Configure the hardware for a set of settings.
///
/// # Note
/// Invalid settings are fatal: this panics with the configuration error
/// before any converter or timer is touched.
pub fn setup(device: pac::Peripherals, settings: &Settings) -> ConditionerDevices {
    // Set up RTT logging
    {
        // Enable debug during WFE/WFI-induced sleep
        device.DBGMCU.cr.modify(|_, w| w.dbg_sleep().set_bit());

        // Best effort printing: a message from the tick interrupt racing the
        // main loop is dropped instead of blocking the interrupt.
        let channels = rtt_target::rtt_init_default!();
        // Note(unsafe): The closure we pass does not establish a critical section
        // as demanded but it does ensure synchronization and implements a lock.
        unsafe {
            rtt_target::set_print_channel_cs(
                channels.up.0,
                &((|arg, f| {
                    static LOCKED: AtomicBool = AtomicBool::new(false);
                    if LOCKED.compare_exchange_weak(
                        false,
                        true,
                        Ordering::Acquire,
                        Ordering::Relaxed,
                    ) == Ok(false)
                    {
                        f(arg);
                        LOCKED.store(false, Ordering::Release);
                    }
                }) as rtt_target::CriticalSectionFunc),
            );
        }

        static LOGGER: rtt_logger::RTTLogger =
            rtt_logger::RTTLogger::new(log::LevelFilter::Info);
        log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(log::LevelFilter::Trace))
            .unwrap();
        log::info!("Starting");
    }

    let resolved = match settings.resolve() {
        Ok(resolved) => resolved,
        Err(err) => panic!("Invalid settings: {err}"),
    };
    // The converter pins are fixed by the board wiring.
    for (selected, wired) in [(settings.adc, ADC_PIN), (settings.dac, DAC_PIN)]
    {
        if selected != wired {
            panic!("{selected} selected but {wired} is wired");
        }
    }
    if let Some(debug) = settings.debug.filter(|pin| *pin != DEBUG_PIN) {
        panic!("Debug output {debug} selected but {DEBUG_PIN} is wired");
    }
    log::info!("Settings: {resolved:?}");

    let rcc = device.RCC.constrain();
    let clocks = rcc
        .cfgr
        .use_hse(design_parameters::HSE)
        .sysclk(design_parameters::SYSCLK)
        .pclk1(design_parameters::PCLK1)
        .pclk2(design_parameters::PCLK2)
        .freeze();
    assert_eq!(clocks.sysclk(), design_parameters::SYSCLK);
    assert_eq!(clocks.timclk1(), design_parameters::TIMER_CLOCK);
    log::info!("Clocks: SYSCLK {}, TIMCLK1 {}", clocks.sysclk(), clocks.timclk1());

    let gpioa = device.GPIOA.split();
    let gpioc = device.GPIOC.split();

    let input = AdcInput::new(device.ADC1, gpioc.pc0.into_analog());
    log::info!("ADC: {} on {:?}", settings.adc, resolved.adc);

    let output = DacOutput::new(device.DAC.constrain(gpioa.pa5.into_analog()));
    log::info!("DAC: {} on {:?}", settings.dac, resolved.dac);

    let debug = settings.debug.map(|_| gpioc.pc8.into_push_pull_output());

    let timer = SamplingTimer::new(
        device.TIM3.counter::<TIME_BASE>(&clocks),
        resolved.timer,
    );
    log::info!(
        "Sampling timer: {:?}, {}",
        resolved.timer,
        resolved.timer.rate(design_parameters::TIMER_CLOCK)
    );

    log::info!("setup() complete");

    ConditionerDevices {
        input,
        output,
        timer,
        debug,
        resolved,
    }
}
