//! STM32F407 hardware support: converter drivers, sampling timer and
//! start-up configuration.
pub use stm32f4xx_hal as hal;

mod adc;
mod dac;
mod sampling_timer;
pub mod setup;

pub use adc::AdcInput;
pub use dac::DacOutput;
pub use sampling_timer::SamplingTimer;
pub use setup::{setup, ConditionerDevices};

/// Tick indicator output.
pub type DebugPin = hal::gpio::PC8<hal::gpio::Output<hal::gpio::PushPull>>;

#[inline(never)]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use core::{
        fmt::Write,
        sync::atomic::{AtomicBool, Ordering},
    };
    use cortex_m::asm;
    use rtt_target::{ChannelMode, UpChannel};

    cortex_m::interrupt::disable();

    // Recursion protection
    static PANICKED: AtomicBool = AtomicBool::new(false);
    while PANICKED.load(Ordering::Relaxed) {
        asm::bkpt();
    }
    PANICKED.store(true, Ordering::Relaxed);

    // Park the tick indicator low. A scope shows the toggling stop.
    let gpioc = unsafe { &*hal::pac::GPIOC::ptr() };
    gpioc.bsrr.write(|w| w.br8().set_bit());

    if let Some(mut channel) = unsafe { UpChannel::conjure(0) } {
        channel.set_mode(ChannelMode::BlockIfFull);
        writeln!(channel, "{}", info).ok();
    }

    asm::udf();
}

#[cortex_m_rt::exception]
unsafe fn HardFault(ef: &cortex_m_rt::ExceptionFrame) -> ! {
    panic!("HardFault at {:#?}", ef);
}

#[cortex_m_rt::exception]
unsafe fn DefaultHandler(irqn: i16) {
    panic!("Unhandled exception (IRQn = {})", irqn);
}
