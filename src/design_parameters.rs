//! Fixed hardware parameters of the STM32F407 signal conditioner board.
use fugit::HertzU32 as Hertz;

use crate::pins::{PinId, Port};

/// External crystal frequency.
pub const HSE: Hertz = Hertz::MHz(8);

/// The target CPU clock frequency.
pub const SYSCLK: Hertz = Hertz::MHz(168);

/// APB1 peripheral clock. Must not exceed 42 MHz.
pub const PCLK1: Hertz = Hertz::MHz(42);

/// APB2 peripheral clock. Clocks the ADCs through their common prescaler.
pub const PCLK2: Hertz = Hertz::MHz(84);

/// The kernel clock of the APB1 timers (TIM2..TIM7).
// The APB1 prescaler is not 1, so the timers run at twice PCLK1.
pub const TIMER_CLOCK: Hertz = Hertz::MHz(84);

/// Count rate of the sampling timer after its prescaler.
///
/// The sampling period is an integer number of counts at this rate, so the
/// achievable sampling rates are `TIMER_TIME_BASE / n`.
pub const TIMER_TIME_BASE: Hertz = Hertz::kHz(200);

/// The rate at which the input is sampled and the output is updated.
pub const SAMPLE_RATE: Hertz = Hertz::kHz(20);

/// Analog reference voltage of both converters.
pub const VREF: f32 = 3.3;

/// Analog input. ADC1 channel 10.
pub const ADC_PIN: PinId = PinId::new(Port::C, 0);

/// Analog output. DAC channel 2.
pub const DAC_PIN: PinId = PinId::new(Port::A, 5);

/// Toggled on every sampling tick for external timing verification.
pub const DEBUG_PIN: PinId = PinId::new(Port::C, 8);
