//! A single isotropic Gaussian bump.

use std::f64::consts::PI;

use hc_core::Position;

use crate::UtilitySurface;

/// The 2-D isotropic Gaussian density centred on `mean` with spread `sigma`:
///
/// ```text
/// v     = sigma²
/// d     = position − mean
/// value = 1 / (2π v) · exp(−½ (d.x² + d.y²) / v)
/// ```
///
/// A bare bump has no floor and underflows to exactly `0.0` far from its
/// mean; wrap it in a [`MountainRange`][crate::MountainRange] before handing
/// it to a climber.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianBump {
    pub mean:  Position,
    pub sigma: f64,
}

impl GaussianBump {
    #[inline]
    pub fn new(mean: Position, sigma: f64) -> Self {
        Self { mean, sigma }
    }

    /// Density at the mean, i.e. the height of the peak.
    #[inline]
    pub fn peak(&self) -> f64 {
        1.0 / (2.0 * PI * self.variance())
    }

    #[inline]
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Analytic gradient `(∂/∂x, ∂/∂y)` at `position`.
    pub fn gradient(&self, position: Position) -> (f64, f64) {
        let v = self.variance();
        let d = position - self.mean;
        let value = self.evaluate(position);
        (-d.x / v * value, -d.y / v * value)
    }
}

impl UtilitySurface for GaussianBump {
    fn evaluate(&self, position: Position) -> f64 {
        let v = self.variance();
        let d = position - self.mean;
        let exponent = -0.5 * (d.x * d.x / v + d.y * d.y / v);
        self.peak() * exponent.exp()
    }
}
