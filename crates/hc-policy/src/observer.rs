//! Climb observer trait for progress reporting and data collection.

use hc_agent::{Agent, Direction};

/// Callbacks invoked by [`StochasticClimber::climb_observed`][crate::StochasticClimber::climb_observed]
/// at key points of the climb loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ClimbObserver for ProgressPrinter {
///     fn on_step(&mut self, step: u64, chosen: Direction, agent: &Agent) {
///         if step % self.interval == 0 {
///             println!("step {step}: went {chosen}, now {agent}");
///         }
///     }
/// }
/// ```
pub trait ClimbObserver {
    /// Called once before the first step.
    fn on_climb_start(&mut self, _agent: &Agent, _steps: u64) {}

    /// Called after every step.  `step` counts from 0; `agent` is the
    /// post-move state.
    fn on_step(&mut self, _step: u64, _chosen: Direction, _agent: &Agent) {}

    /// Called once after the last step.
    fn on_climb_end(&mut self, _agent: &Agent) {}
}

/// A [`ClimbObserver`] that does nothing.
pub struct NoopObserver;

impl ClimbObserver for NoopObserver {}

/// Forwards climb progress to the `log` facade.
///
/// Logs the start and end of the climb at `info`, and every `interval`-th
/// step at `info` as well (`interval == 0` disables per-step lines).  The
/// count of "Here" choices is reported at the end at `debug`.
pub struct LogObserver {
    label:    String,
    interval: u64,
    stays:    u64,
}

impl LogObserver {
    pub fn new(label: impl Into<String>, interval: u64) -> Self {
        Self { label: label.into(), interval, stays: 0 }
    }

    /// How many steps chose to stay put so far.
    pub fn stays(&self) -> u64 {
        self.stays
    }
}

impl ClimbObserver for LogObserver {
    fn on_climb_start(&mut self, agent: &Agent, steps: u64) {
        self.stays = 0;
        log::info!(
            "{}: climbing {steps} steps from {} (step size {})",
            self.label,
            agent.position(),
            agent.step_size()
        );
    }

    fn on_step(&mut self, step: u64, chosen: Direction, agent: &Agent) {
        if !chosen.is_move() {
            self.stays += 1;
        }
        if self.interval > 0 && (step + 1) % self.interval == 0 {
            log::info!("{}: step {}: {agent}", self.label, step + 1);
        }
    }

    fn on_climb_end(&mut self, agent: &Agent) {
        log::info!(
            "{}: finished at {} with utility {:.6} after {} moves",
            self.label,
            agent.position(),
            agent.utility(),
            agent.history().len()
        );
        log::debug!("{}: stayed put {} times", self.label, self.stays);
    }
}
