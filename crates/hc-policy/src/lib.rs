//! `hc-policy` — the stochastic climbing policy and the loops that drive it.
//!
//! # Climb loop
//!
//! ```text
//! for step in 0..steps:
//!   ① Sample    — one noisy slope per candidate, in East, West, North,
//!                 South, Here order (five draws).
//!   ② Choose    — strictly largest sample; earlier candidate wins ties.
//!   ③ Move      — Agent::step(chosen): record pre-move state, translate,
//!                 refresh utility.  Here changes nothing.
//! ```
//!
//! The policy is a separate object from the agent: [`StochasticClimber`]
//! borrows `&mut Agent` for each call and owns only its [`SlopeNoise`]
//! source, which is where tests and greedy runs plug in.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`Ensemble`] members on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hc_agent::Agent;
//! use hc_core::Position;
//! use hc_policy::{GaussianNoise, StochasticClimber};
//! use hc_surface::MountainRange;
//!
//! let mut agent = Agent::new(Position::ORIGIN, Some(Arc::new(MountainRange::yves())), 0.05)?;
//! let mut climber = StochasticClimber::new(GaussianNoise::from_seed(42));
//! climber.climb(&mut agent, 1_000);
//! assert!(agent.history().len() <= 1_000);
//! # Ok::<(), hc_core::ClimbError>(())
//! ```

pub mod climber;
pub mod ensemble;
pub mod noise;
pub mod observer;


pub use climber::StochasticClimber;
pub use ensemble::{ClimbOutcome, Ensemble};
pub use noise::{GaussianNoise, NoNoise, SlopeNoise};
pub use observer::{ClimbObserver, LogObserver, NoopObserver};
