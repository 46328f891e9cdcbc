//! `hc-agent` — the climbing agent's state record and movement primitives.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` (position, cached utility, step size, history)    |
//! | [`builder`]     | `AgentBuilder` (fluent construction)                      |
//! | [`direction`]   | `Direction`, the five climb candidates                   |
//! | [`history`]     | `History`, pre-move log, exportable as columns           |
//!
//! The agent knows how to move and how to evaluate utility; it does not know
//! how to choose a direction.  That decision lives in `hc-policy`, which
//! operates on `&mut Agent`.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Direction` and `History`. |

pub mod agent;
pub mod builder;
pub mod direction;
pub mod history;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentBuilder;
pub use direction::Direction;
pub use history::History;
