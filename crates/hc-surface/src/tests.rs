//! Unit tests for hc-surface.

#[cfg(test)]
mod gaussian_tests {
    use std::f64::consts::PI;

    use hc_core::Position;

    use crate::{GaussianBump, UtilitySurface};

    #[test]
    fn peak_value_at_mean() {
        let bump = GaussianBump::new(Position::new(2.0, 2.0), 1.0);
        let u = bump.evaluate(Position::new(2.0, 2.0));
        assert!((u - 1.0 / (2.0 * PI)).abs() < 1e-15, "got {u}");
        assert_eq!(u, bump.peak());
    }

    #[test]
    fn symmetric_about_mean() {
        let bump = GaussianBump::new(Position::new(1.0, -1.0), 0.5);
        let east = bump.evaluate(Position::new(1.3, -1.0));
        let north = bump.evaluate(Position::new(1.0, -0.7));
        let west = bump.evaluate(Position::new(0.7, -1.0));
        assert!((east - north).abs() < 1e-15);
        assert!((east - west).abs() < 1e-15);
    }

    #[test]
    fn one_sigma_falloff() {
        let bump = GaussianBump::new(Position::ORIGIN, 0.4);
        let ratio = bump.evaluate(Position::new(0.4, 0.0)) / bump.peak();
        assert!((ratio - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn gradient_points_uphill() {
        let bump = GaussianBump::new(Position::ORIGIN, 1.0);
        let (gx, gy) = bump.gradient(Position::new(1.0, -2.0));
        assert!(gx < 0.0, "east of the peak the slope must point west");
        assert!(gy > 0.0, "south of the peak the slope must point north");
        assert_eq!(bump.gradient(Position::ORIGIN), (-0.0, -0.0));
    }

    #[test]
    fn bare_bump_underflows_far_away() {
        let bump = GaussianBump::new(Position::ORIGIN, 0.1);
        assert_eq!(bump.evaluate(Position::new(100.0, 100.0)), 0.0);
    }
}

#[cfg(test)]
mod range_tests {
    use std::f64::consts::PI;

    use hc_core::Position;

    use crate::{GaussianBump, MountainRange, UTILITY_FLOOR, UtilitySurface};

    #[test]
    fn single_bump_includes_floor() {
        let range = MountainRange::single(GaussianBump::new(Position::new(2.0, 2.0), 1.0));
        let u = range.evaluate(Position::new(2.0, 2.0));
        let expected = 1.0 / (2.0 * PI) + 1e-12;
        assert!((u - expected).abs() < 1e-15, "got {u}");
        assert!((u - 0.159_155).abs() < 1e-6);
    }

    #[test]
    fn empty_range_is_the_floor() {
        let range = MountainRange::default();
        assert_eq!(range.evaluate(Position::new(5.0, -3.0)), UTILITY_FLOOR);
        assert_eq!(range.tallest_peak(), None);
    }

    #[test]
    fn strictly_positive_everywhere() {
        let range = MountainRange::yves();
        for i in -50..=50 {
            for j in -50..=50 {
                let p = Position::new(i as f64 * 2.0, j as f64 * 2.0);
                assert!(range.evaluate(p) >= UTILITY_FLOOR, "non-positive at {p}");
                assert!(range.evaluate(p) > 0.0);
            }
        }
        assert!(range.evaluate(Position::new(1e6, -1e6)) > 0.0);
    }

    #[test]
    fn deterministic() {
        let range = MountainRange::yves();
        let p = Position::new(1.7, 2.3);
        let first = range.evaluate(p);
        for _ in 0..10 {
            assert_eq!(range.evaluate(p), first);
        }
    }

    #[test]
    fn sum_of_bumps() {
        let a = GaussianBump::new(Position::new(0.0, 0.0), 0.5);
        let b = GaussianBump::new(Position::new(1.0, 0.0), 0.7);
        let range = MountainRange::single(a).with_bump(b);
        let p = Position::new(0.3, 0.2);
        let expected = a.evaluate(p) + b.evaluate(p) + UTILITY_FLOOR;
        assert_eq!(range.evaluate(p), expected);
    }

    #[test]
    fn yves_tallest_peak() {
        let range = MountainRange::yves();
        assert_eq!(range.bumps.len(), 4);
        assert_eq!(range.tallest_peak(), Some(Position::new(2.0, 2.0)));
    }
}

#[cfg(test)]
mod fn_surface_tests {
    use std::sync::Arc;

    use hc_core::Position;

    use crate::{FnSurface, SharedSurface, UtilitySurface};

    #[test]
    fn closure_as_shared_surface() {
        let surface: SharedSurface = Arc::new(FnSurface(|p: Position| -(p.x * p.x + p.y * p.y)));
        assert_eq!(surface.evaluate(Position::new(1.0, 2.0)), -5.0);
    }
}
