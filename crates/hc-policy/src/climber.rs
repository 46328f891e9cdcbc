//! `StochasticClimber` — noisy steepest-ascent over the five candidates.
//!
//! # One step
//!
//! ```text
//! for dir in [East, West, North, South, Here]:
//!     slope(dir)  = (U(position + step_size·dir) − utility) / step_size
//!     sample(dir) = slope(dir) + noise,  noise ~ N(0, 1/step_size)
//! chosen = first dir with the strictly largest sample
//! agent.step(chosen)        // Here is a no-op
//! ```
//!
//! Smaller steps mean noisier estimates (more exploration); larger steps mean
//! sharper ones (more exploitation).

use hc_agent::{Agent, Direction};

use crate::{ClimbObserver, SlopeNoise};

/// The climbing policy.  Holds only its noise source; all state it acts on
/// lives in the [`Agent`] passed to each call.
pub struct StochasticClimber<N: SlopeNoise> {
    noise: N,
}

impl<N: SlopeNoise> StochasticClimber<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn into_noise(self) -> N {
        self.noise
    }

    // ── Slope estimation ──────────────────────────────────────────────────

    /// Forward finite-difference slope of the agent's utility in
    /// `direction`, per unit distance.  `Here` is always `0`.
    pub fn slope(agent: &Agent, direction: Direction) -> f64 {
        let h = agent.step_size();
        (agent.evaluate_utility_at(direction.scaled(h)) - agent.utility()) / h
    }

    /// `slope` perturbed by one draw of noise with standard deviation
    /// `1 / step_size`.
    pub fn stochastic_slope(&mut self, agent: &Agent, direction: Direction) -> f64 {
        let slope = Self::slope(agent, direction);
        self.noise.perturb(slope, 1.0 / agent.step_size())
    }

    // ── Direction selection ───────────────────────────────────────────────

    /// Sample every candidate once, in [`Direction::ALL`] order, and return
    /// the one with the largest sample.  Ties keep the earlier candidate.
    pub fn choose_direction(&mut self, agent: &Agent) -> Direction {
        let mut best = Direction::ALL[0];
        let mut best_sample = f64::NEG_INFINITY;
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            let sample = self.stochastic_slope(agent, direction);
            if i == 0 || sample > best_sample {
                best = direction;
                best_sample = sample;
            }
        }
        best
    }

    /// One selection-and-move iteration.  Returns the chosen direction.
    pub fn step(&mut self, agent: &mut Agent) -> Direction {
        let chosen = self.choose_direction(agent);
        agent.step(chosen);
        chosen
    }

    // ── Climb loop ────────────────────────────────────────────────────────

    /// Run exactly `steps` iterations.  There is no convergence test.
    pub fn climb(&mut self, agent: &mut Agent, steps: u64) {
        for _ in 0..steps {
            self.step(agent);
        }
    }

    /// Like [`climb`](Self::climb), reporting to `observer`.
    pub fn climb_observed<O: ClimbObserver>(
        &mut self,
        agent:    &mut Agent,
        steps:    u64,
        observer: &mut O,
    ) {
        observer.on_climb_start(agent, steps);
        for step in 0..steps {
            let chosen = self.step(agent);
            observer.on_step(step, chosen, agent);
        }
        observer.on_climb_end(agent);
    }
}
