//! Sampling timer period computation.
//!
//! The timer counter is clocked from the timer kernel clock through a 16 bit
//! prescaler that divides it down to a fixed time base. The auto-reload
//! (period) register then divides the time base down to the sampling rate;
//! the update event at each counter wrap is the sampling tick.
//!
//! The time base must divide the timer clock exactly. A sampling rate that
//! does not evenly divide the time base is rounded up to the next achievable
//! rate (shorter period), which is reported but not treated as an error.
use fugit::HertzU32 as Hertz;
use serde::Serialize;

use crate::Error;

/// Prescaler and auto-reload register values of a sampling timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimerConfig {
    /// Counter clock divider minus one.
    pub prescaler: u16,
    /// Counts per sampling period minus one.
    pub period: u16,
}

impl TimerConfig {
    /// Derive the prescaler and period for a sampling rate.
    ///
    /// # Args
    /// * `timer_clock` - The timer kernel clock.
    /// * `time_base` - The counter rate after the prescaler.
    /// * `rate` - The requested sampling rate.
    pub fn new(
        timer_clock: Hertz,
        time_base: Hertz,
        rate: Hertz,
    ) -> Result<Self, Error> {
        let err = |reason| Error::SamplingRate {
            requested_hz: rate.raw(),
            reason,
        };
        if rate.raw() == 0 || time_base.raw() == 0 {
            return Err(err("zero frequency"));
        }
        if time_base > timer_clock {
            return Err(err("time base exceeds timer clock"));
        }
        if timer_clock.raw() % time_base.raw() != 0 {
            return Err(err("time base does not divide timer clock"));
        }
        if rate > time_base {
            return Err(err("rate exceeds time base"));
        }

        let prescaler = u16::try_from(timer_clock.raw() / time_base.raw() - 1)
            .map_err(|_| err("prescaler out of range"))?;
        // A zero auto-reload value stops the counter.
        let period = u16::try_from(time_base.raw() / rate.raw() - 1)
            .ok()
            .filter(|period| *period > 0)
            .ok_or(err("period out of range"))?;
        let config = Self { prescaler, period };

        let achieved = config.rate(timer_clock);
        if achieved != rate {
            log::warn!(
                "Sampling rate {} Hz requested, {} Hz achieved",
                rate.raw(),
                achieved.raw()
            );
        }
        Ok(config)
    }

    /// Time base ticks per sampling period.
    pub fn ticks(&self) -> u32 {
        u32::from(self.period) + 1
    }

    /// Timer kernel clock cycles per sampling period.
    pub fn cycles(&self) -> u32 {
        (u32::from(self.prescaler) + 1) * self.ticks()
    }

    /// The sampling rate this configuration produces.
    pub fn rate(&self, timer_clock: Hertz) -> Hertz {
        Hertz::from_raw(timer_clock.raw() / self.cycles())
    }
}
