//! `Ensemble` — many independent climbers on one shared surface.
//!
//! Every climber gets its own [`Agent`] and its own [`ClimberRng`] seeded
//! from `(config.seed, climber_id)`, so results do not depend on execution
//! order.  With the `parallel` feature the climbers run on Rayon's pool and
//! the output is identical to a sequential run.
//!
//! [`ClimberRng`]: hc_core::ClimberRng

use std::sync::Arc;

use hc_agent::{Agent, AgentBuilder};
use hc_core::{ClimbConfig, ClimbResult, ClimberId};
use hc_surface::SharedSurface;

use crate::{ClimbObserver, GaussianNoise, NoopObserver, StochasticClimber};

/// Upper bound on history entries reserved before a climb.  Longer climbs
/// grow the history as they go.
pub(crate) const MAX_HISTORY_PREALLOC: u64 = 1 << 20;

/// The final state of one ensemble member.
#[derive(Debug)]
pub struct ClimbOutcome {
    pub climber: ClimberId,
    pub agent:   Agent,
}

/// Runs `config.climbers` independent climbs of `config.steps` steps each.
pub struct Ensemble {
    config:  ClimbConfig,
    surface: SharedSurface,
}

impl Ensemble {
    /// Validate `config` and bind it to `surface`.
    pub fn new(config: ClimbConfig, surface: SharedSurface) -> ClimbResult<Self> {
        config.validate()?;
        Ok(Self { config, surface })
    }

    pub fn config(&self) -> &ClimbConfig {
        &self.config
    }

    /// Run every climber without observers.  Results are in ascending
    /// `ClimberId` order.
    pub fn run(&self) -> ClimbResult<Vec<ClimbOutcome>> {
        self.run_with(|_| NoopObserver)
    }

    /// Run every climber, each reporting to the observer `make_observer`
    /// returns for its id.
    pub fn run_with<O, F>(&self, make_observer: F) -> ClimbResult<Vec<ClimbOutcome>>
    where
        O: ClimbObserver,
        F: Fn(ClimberId) -> O + Sync,
    {
        #[cfg(not(feature = "parallel"))]
        {
            self.config
                .climber_ids()
                .map(|id| self.run_one(id, &mut make_observer(id)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let ids: Vec<ClimberId> = self.config.climber_ids().collect();
            let run_all = || {
                ids.par_iter()
                    .map(|&id| self.run_one(id, &mut make_observer(id)))
                    .collect::<ClimbResult<Vec<_>>>()
            };

            match self.config.num_threads {
                None => run_all(),
                Some(n) => rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| hc_core::ClimbError::Config(e.to_string()))?
                    .install(run_all),
            }
        }
    }

    /// Run a single ensemble member.  Deterministic for a given config and id.
    pub fn run_one<O: ClimbObserver>(
        &self,
        climber:  ClimberId,
        observer: &mut O,
    ) -> ClimbResult<ClimbOutcome> {
        let mut agent = self.new_agent()?;
        let noise = GaussianNoise::new(self.config.make_rng(climber));
        let mut policy = StochasticClimber::new(noise);
        policy.climb_observed(&mut agent, self.config.steps, observer);

        log::debug!(
            "{climber}: {} moves, final {agent}",
            agent.history().len()
        );
        Ok(ClimbOutcome { climber, agent })
    }

    /// A fresh agent at the configured start, with history room for the
    /// climb (capped at [`MAX_HISTORY_PREALLOC`] entries).
    pub(crate) fn new_agent(&self) -> ClimbResult<Agent> {
        let capacity = self.config.steps.min(MAX_HISTORY_PREALLOC);
        AgentBuilder::new()
            .position(self.config.start)
            .surface(Arc::clone(&self.surface))
            .step_size(self.config.step_size)
            .history_capacity(usize::try_from(capacity).unwrap_or(0))
            .build()
    }
}
