//! `hc-core` — foundational types for the hill-climber workspace.
//!
//! This crate is a dependency of every other `hc-*` crate.  It has no `hc-*`
//! dependencies and minimal external ones (`rand`, `rand_distr`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`position`]    | `Position` on the continuous plane                    |
//! | [`ids`]         | `ClimberId`                                           |
//! | [`rng`]         | `ClimberRng` (per-climber, seedable)                  |
//! | [`config`]      | `ClimbConfig`                                         |
//! | [`math`]        | `factorial`                                           |
//! | [`error`]       | `ClimbError`, `ClimbResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod math;
pub mod position;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ClimbConfig;
pub use error::{ClimbError, ClimbResult};
pub use ids::ClimberId;
pub use math::factorial;
pub use position::Position;
pub use rng::ClimberRng;
