//! `hc-surface` — utility surfaces the climbers walk on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`surface`]  | `UtilitySurface` trait, `SharedSurface`, `FnSurface`       |
//! | [`gaussian`] | `GaussianBump`, one unnormalised isotropic 2-D Gaussian   |
//! | [`range`]    | `MountainRange`, sum of bumps plus a positive floor       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GaussianBump` and `MountainRange`. |
//!
//! Surfaces are pure and total: evaluating one never fails and never mutates
//! anything, which is what lets an ensemble share a single surface across
//! threads.

pub mod gaussian;
pub mod range;
pub mod surface;

#[cfg(test)]
mod tests;

pub use gaussian::GaussianBump;
pub use range::{MountainRange, UTILITY_FLOOR};
pub use surface::{FnSurface, SharedSurface, UtilitySurface};
