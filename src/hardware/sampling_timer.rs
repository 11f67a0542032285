use super::hal::{
    pac::TIM3,
    prelude::*,
    timer::{self, Counter, Event, Flag},
};
use fugit::TimerDurationU32;

use crate::{design_parameters::TIMER_TIME_BASE, timer::TimerConfig};

/// Counter rate of TIM3 in Hz. The HAL derives the prescaler from it.
pub const TIME_BASE: u32 = TIMER_TIME_BASE.raw();

/// TIM3 as the sampling clock: one update interrupt per sampling tick.
pub struct SamplingTimer {
    timer: Counter<TIM3, TIME_BASE>,
    config: TimerConfig,
}

impl SamplingTimer {
    pub fn new(timer: Counter<TIM3, TIME_BASE>, config: TimerConfig) -> Self {
        Self { timer, config }
    }

    /// Load the period, enable the update interrupt and start counting.
    pub fn start(&mut self) -> Result<(), timer::Error> {
        self.timer.listen(Event::Update);
        let period =
            TimerDurationU32::<TIME_BASE>::from_ticks(self.config.ticks());
        self.timer.start(period)
    }

    /// Clear the pending update flag. Must be called from the interrupt
    /// handler before returning.
    pub fn acknowledge(&mut self) {
        self.timer.clear_flags(Flag::Update);
    }
}
