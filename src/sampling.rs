//! Tick-driven sampling: the handoff between the timer interrupt and the main
//! loop, and the per-sample processing pipeline.
//!
//! # Design
//!
//! The sampling timer interrupt only signals. It sets the ready flag of a
//! [`Sampler`] and returns. The main loop owns everything else (converters,
//! filter state) and busy-polls the flag through
//! [`Conditioner::poll()`]. A set flag is cleared before the sample is
//! processed, so a tick arriving while the filter runs is not lost but seen
//! on the next poll.
//!
//! The flag is a single word with one writer on each side and needs no lock.
//!
//! ## Overruns
//!
//! If processing a sample takes longer than one sampling period, the next tick
//! finds the flag still set. The two ticks are coalesced into a single
//! processing call and one sampling interval is skipped. This is an accepted
//! limitation: it is not reported as an error, only counted by
//! [`Sampler::overruns()`].
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use dsp::Filter;

use crate::convert::{AdcCode, DacCode};

/// Analog input collaborator.
pub trait AnalogInput {
    /// Start a conversion and block until its result is available.
    fn read(&mut self) -> AdcCode;
}

/// Analog output collaborator.
pub trait AnalogOutput {
    fn write(&mut self, code: DacCode);
}

/// The state shared between the sampling timer interrupt and the main loop.
#[derive(Debug, Default)]
pub struct Sampler {
    ready: AtomicBool,
    ticks: AtomicU32,
    overruns: AtomicU32,
}

impl Sampler {
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
            ticks: AtomicU32::new(0),
            overruns: AtomicU32::new(0),
        }
    }

    /// Signal a sampling tick. Called from the timer interrupt.
    ///
    /// # Returns
    /// `false` if the previous tick had not been consumed yet and this tick
    /// was coalesced with it.
    pub fn tick(&self) -> bool {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        let pending = self.ready.swap(true, Ordering::Release);
        if pending {
            self.overruns.fetch_add(1, Ordering::Relaxed);
        }
        !pending
    }

    /// Consume a pending tick. Called from the main loop.
    pub fn take(&self) -> bool {
        self.ready.swap(false, Ordering::Acquire)
    }

    /// Number of ticks signalled so far.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Number of ticks coalesced because the main loop fell behind.
    pub fn overruns(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }
}

/// The signal path: input converter, filter, output converter.
pub struct Conditioner<F, I, O> {
    filter: F,
    input: I,
    output: O,
}

impl<F, I, O> Conditioner<F, I, O>
where
    F: Filter,
    I: AnalogInput,
    O: AnalogOutput,
{
    pub fn new(filter: F, input: I, output: O) -> Self {
        Self {
            filter,
            input,
            output,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Acquire one input sample, filter it, and write the output sample.
    pub fn process(&mut self) -> DacCode {
        let x = self.input.read().normalized();
        let y = self.filter.process(x);
        let code = DacCode::from(y);
        self.output.write(code);
        code
    }

    /// Run one iteration of the poll-and-dispatch loop.
    ///
    /// # Returns
    /// The output code if a tick was pending and a sample was processed.
    pub fn poll(&mut self, sampler: &Sampler) -> Option<DacCode> {
        sampler.take().then(|| self.process())
    }

    /// Poll and dispatch forever.
    pub fn run(&mut self, sampler: &Sampler) -> ! {
        let mut overruns = sampler.overruns();
        loop {
            if self.poll(sampler).is_some() {
                let n = sampler.overruns();
                if n != overruns {
                    log::warn!(
                        "Sampling overrun: {} tick(s) coalesced ({} total)",
                        n.wrapping_sub(overruns),
                        n
                    );
                    overruns = n;
                }
            }
        }
    }

    pub fn release(self) -> (F, I, O) {
        (self.filter, self.input, self.output)
    }
}
