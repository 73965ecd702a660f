//! Host-facing execution controller
//!
//! Owns exactly one [`GenerationProcess`] and mediates all external
//! interaction with it: explicit single steps, a continuous-run mode drained
//! by periodic ticks, resets, and policy selection. Stepping is cooperative;
//! nothing advances without a call from the host.

use crate::algorithm::events::EventSink;
use crate::algorithm::process::{ContradictionPolicy, GenerationProcess, ProcessState};

/// Drives one generation process from a host loop
pub struct ExecutionController {
    process: GenerationProcess,
    running: bool,
}

impl ExecutionController {
    /// Wrap a process in a paused controller
    pub const fn new(process: GenerationProcess) -> Self {
        Self {
            process,
            running: false,
        }
    }

    /// Discard progress and reinitialize
    ///
    /// Also leaves continuous-run mode; generation stays paused until the
    /// host steps or runs again.
    pub fn reset(&mut self, sink: &mut impl EventSink) {
        self.running = false;
        self.process.reset(sink);
    }

    /// Advance exactly one step
    ///
    /// Initializes first if no generation has started, so stepping before
    /// any reset is not an error. Disables continuous running.
    pub fn step(&mut self, sink: &mut impl EventSink) {
        self.ensure_initialized(sink);
        self.running = false;
        self.process.advance(sink);
    }

    /// Advance once per tick until finished, paused, or reset
    ///
    /// Initializes first if no generation has started. The actual stepping
    /// happens in [`Self::tick`], driven by the host.
    pub fn run_continuously(&mut self, sink: &mut impl EventSink) {
        self.ensure_initialized(sink);
        self.running = true;
    }

    /// Leave continuous-run mode without touching progress
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// One external tick; consumed only while running continuously
    pub fn tick(&mut self, sink: &mut impl EventSink) {
        if !self.running {
            return;
        }
        self.process.advance(sink);
        if self.process.state() == ProcessState::Finished {
            self.running = false;
        }
    }

    /// Select the contradiction policy read by the next scan
    ///
    /// Contradictions already reported are not reinterpreted.
    pub fn set_contradiction_policy(&mut self, policy: ContradictionPolicy) {
        self.process.set_policy(policy);
    }

    /// Whether ticks currently advance the process
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only access to the owned process
    pub const fn process(&self) -> &GenerationProcess {
        &self.process
    }

    fn ensure_initialized(&mut self, sink: &mut impl EventSink) {
        if self.process.state() == ProcessState::Uninitialized {
            self.process.reset(sink);
        }
    }
}
