//! Unit tests for hc-agent.

use std::sync::Arc;

use hc_core::Position;
use hc_surface::{GaussianBump, MountainRange, SharedSurface};

use crate::Agent;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bump_at(x: f64, y: f64, sigma: f64) -> SharedSurface {
    Arc::new(MountainRange::single(GaussianBump::new(Position::new(x, y), sigma)))
}

fn simple_agent(step_size: f64) -> Agent {
    Agent::new(Position::ORIGIN, None, step_size).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use std::f64::consts::PI;

    use hc_core::ClimbError;

    use super::*;
    use crate::AgentBuilder;

    #[test]
    fn utility_evaluated_eagerly() {
        let agent = Agent::new(Position::new(2.0, 2.0), Some(bump_at(2.0, 2.0, 1.0)), 1.0).unwrap();
        let expected = 1.0 / (2.0 * PI) + 1e-12;
        assert!((agent.utility() - expected).abs() < 1e-15);
        assert!((agent.evaluate_utility() - 0.159_155).abs() < 1e-6);
        assert!(agent.history().is_empty());
    }

    #[test]
    fn simple_agent_has_zero_utility() {
        let agent = simple_agent(1.0);
        assert_eq!(agent.utility(), 0.0);
        assert_eq!(agent.evaluate_utility_at(Position::new(5.0, 5.0)), 0.0);
        assert!(agent.surface().is_none());
    }

    #[test]
    fn rejects_bad_step_sizes() {
        for bad in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let result = Agent::new(Position::ORIGIN, None, bad);
            assert!(matches!(result, Err(ClimbError::InvalidStepSize(_))), "{bad}");
        }
    }

    #[test]
    fn builder_defaults() {
        let agent = AgentBuilder::new().build().unwrap();
        assert_eq!(agent.position(), Position::ORIGIN);
        assert_eq!(agent.step_size(), 1.0);
        assert_eq!(agent.utility(), 0.0);
    }

    #[test]
    fn builder_validates_step_size() {
        assert!(AgentBuilder::new().step_size(0.0).build().is_err());
    }

    #[test]
    fn builder_with_surface() {
        let agent = AgentBuilder::new()
            .position(Position::new(1.0, 1.0))
            .surface(Arc::new(MountainRange::yves()))
            .step_size(0.05)
            .history_capacity(100)
            .build()
            .unwrap();
        assert_eq!(agent.step_size(), 0.05);
        assert_eq!(agent.utility(), agent.evaluate_utility());
    }

    #[test]
    fn display_and_debug() {
        let agent = simple_agent(1.0);
        assert_eq!(agent.to_string(), "Agent @ (0.000000, 0.000000) [u=0]");
        assert_eq!(format!("{agent:?}"), "Agent<p:(0.000000, 0.000000), u:0>");
    }
}

// ── Movement primitives ───────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use hc_surface::UtilitySurface;

    use super::*;
    use crate::Direction;

    #[test]
    fn simple_agent_right_then_up() {
        let mut agent = simple_agent(1.0);
        agent.move_right();
        agent.move_up();

        assert_eq!(agent.position(), Position::new(1.0, 1.0));
        assert_eq!(agent.utility(), 0.0);
        assert_eq!(agent.history().positions(), [Position::new(0.0, 0.0), Position::new(1.0, 0.0)]);
        assert_eq!(agent.history().utilities(), [0.0, 0.0]);
    }

    #[test]
    fn each_primitive_moves_one_axis() {
        let mut agent = simple_agent(0.5);
        agent.move_left();
        assert_eq!(agent.position(), Position::new(-0.5, 0.0));
        agent.move_down();
        assert_eq!(agent.position(), Position::new(-0.5, -0.5));
        agent.move_right();
        agent.move_up();
        assert_eq!(agent.position(), Position::ORIGIN);
        assert_eq!(agent.history().len(), 4);
    }

    #[test]
    fn fractional_step_size() {
        let mut agent = simple_agent(0.25);
        for _ in 0..4 {
            agent.move_right();
        }
        assert_eq!(agent.position(), Position::new(1.0, 0.0));
    }

    #[test]
    fn utility_cache_consistent_after_moves() {
        let surface = bump_at(2.0, 2.0, 1.0);
        let mut agent = Agent::new(Position::ORIGIN, Some(Arc::clone(&surface)), 0.3).unwrap();
        for d in [Direction::East, Direction::North, Direction::North, Direction::West, Direction::South] {
            agent.step(d);
            assert_eq!(agent.utility(), surface.evaluate(agent.position()));
        }
    }

    #[test]
    fn history_records_pre_move_state() {
        let mut agent = Agent::new(Position::ORIGIN, Some(bump_at(1.0, 0.0, 1.0)), 1.0).unwrap();
        let u0 = agent.utility();
        agent.move_right();
        let u1 = agent.utility();
        agent.move_right();

        let history = agent.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.positions(), [Position::new(0.0, 0.0), Position::new(1.0, 0.0)]);
        assert_eq!(history.utilities(), [u0, u1]);
        // The post-move state is never in the history.
        assert_eq!(agent.position(), Position::new(2.0, 0.0));
    }

    #[test]
    fn step_here_is_a_no_op() {
        let mut agent = Agent::new(Position::new(0.5, 0.5), Some(bump_at(0.0, 0.0, 1.0)), 1.0).unwrap();
        let before = (agent.position(), agent.utility());
        agent.step(Direction::Here);
        assert_eq!((agent.position(), agent.utility()), before);
        assert!(agent.history().is_empty());
    }

    #[test]
    fn step_dispatch_matches_unit_offsets() {
        for d in Direction::ALL {
            let mut agent = simple_agent(2.0);
            agent.step(d);
            assert_eq!(agent.position(), Position::ORIGIN + d.scaled(2.0), "{d}");
            assert_eq!(agent.history().len(), usize::from(d.is_move()));
        }
    }

    #[test]
    fn probe_does_not_move() {
        let agent = Agent::new(Position::ORIGIN, Some(bump_at(1.0, 0.0, 1.0)), 1.0).unwrap();
        let probe = agent.evaluate_utility_at(Position::new(1.0, 0.0));
        assert!(probe > agent.utility());
        assert_eq!(agent.position(), Position::ORIGIN);
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod direction_tests {
    use crate::Direction;

    #[test]
    fn sampling_order() {
        assert_eq!(
            Direction::ALL,
            [Direction::East, Direction::West, Direction::North, Direction::South, Direction::Here]
        );
    }

    #[test]
    fn unit_offsets() {
        assert_eq!(Direction::East.unit(), (1.0, 0.0));
        assert_eq!(Direction::West.unit(), (-1.0, 0.0));
        assert_eq!(Direction::North.unit(), (0.0, 1.0));
        assert_eq!(Direction::South.unit(), (0.0, -1.0));
        assert_eq!(Direction::Here.unit(), (0.0, 0.0));
    }

    #[test]
    fn parse_labels() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" east ".parse::<Direction>().unwrap(), Direction::East);
        assert!("Up".parse::<Direction>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history_tests {
    use hc_core::Position;

    use crate::History;

    #[test]
    fn capacity_tracks_reservation() {
        let mut h = History::with_capacity(16);
        assert!(h.capacity() >= 16);
        h.reserve(100);
        assert!(h.capacity() >= 100);
        assert!(h.is_empty());
    }

    #[test]
    fn columns_are_parallel() {
        let mut h = History::new();
        h.record(Position::new(0.0, 1.0), 0.1);
        h.record(Position::new(2.0, 3.0), 0.2);
        let (xs, ys, us) = h.columns();
        assert_eq!(xs, [0.0, 2.0]);
        assert_eq!(ys, [1.0, 3.0]);
        assert_eq!(us, [0.1, 0.2]);
    }

    #[test]
    fn iter_pairs_in_order() {
        let mut h = History::with_capacity(2);
        h.record(Position::new(1.0, 1.0), 0.5);
        h.record(Position::new(1.0, 2.0), 0.6);
        let pairs: Vec<_> = h.iter().collect();
        assert_eq!(pairs, [(Position::new(1.0, 1.0), 0.5), (Position::new(1.0, 2.0), 0.6)]);
        assert_eq!(h.iter().len(), 2);
    }

    #[test]
    fn clear_empties_both_columns() {
        let mut h = History::new();
        h.record(Position::ORIGIN, 0.0);
        h.clear();
        assert!(h.is_empty());
        assert!(h.utilities().is_empty());
    }
}
