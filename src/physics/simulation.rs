//! The tick orchestrator: one call advances the whole system by one frame.
//!
//! Strict per-tick order:
//! 1. zero every alive body's accumulated force;
//! 2. one O(n²) pass accumulates pairwise gravity and flags pair events;
//! 3. flagged collisions merge, retiring parents and appending products;
//! 4. mass transfer runs for flagged pairs whose members are still alive;
//! 5. every alive body integrates its motion and samples its trace;
//! 6. dead slots are swept, leaving only alive bodies for the renderer.
//!
//! [`step`] performs no I/O and is a pure function of the system state and
//! the [`TickContext`].

use crate::physics::body::StarSystem;
use crate::physics::gravity::{self, PairEvent};
use crate::physics::integrator::Integrator;
use crate::physics::interactions::{self, TransferStream};
use crate::physics::math::{GRAVITATIONAL_CONSTANT, Scalar};

/// Nominal frame rate the tick step is derived from.
pub const NOMINAL_FPS: Scalar = 120.0;

/// Default world scale, meters per display unit.
pub const DEFAULT_METERS_PER_PIXEL: Scalar = 1.0e6;

/// Default time-acceleration factor.
pub const DEFAULT_TIME_SPEED: Scalar = 5000.0;

/// Per-tick simulation parameters, passed explicitly instead of living in
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Gravitational constant
    pub g: Scalar,
    /// Time-acceleration factor
    pub time_speed: Scalar,
    /// Nominal frames per second
    pub fps: Scalar,
    /// Active world scale; trace sampling follows the current zoom level
    pub meters_per_pixel: Scalar,
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            time_speed: DEFAULT_TIME_SPEED,
            fps: NOMINAL_FPS,
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
        }
    }
}

impl TickContext {
    pub fn with_time_speed(time_speed: Scalar) -> Self {
        Self {
            time_speed,
            ..Self::default()
        }
    }

    /// Effective tick length in seconds.
    pub fn time_step(&self) -> Scalar {
        self.time_speed / self.fps
    }
}

/// Advance the system by one tick and report the mass-transfer streams that
/// occurred, for the renderer.
pub fn step(
    system: &mut StarSystem,
    ctx: &TickContext,
    integrator: &dyn Integrator,
) -> Vec<TransferStream> {
    for body in system.bodies_mut() {
        if body.alive {
            body.force = crate::physics::math::Vector::ZERO;
        }
    }

    let mut events: Vec<PairEvent> = Vec::new();
    gravity::accumulate_forces(system, ctx.g, &mut events);

    interactions::resolve_collisions(system, &events);
    let streams = interactions::exchange_masses(system, &events);

    let time_step = ctx.time_step();
    for body in system.bodies_mut() {
        if !body.alive {
            continue;
        }

        let acceleration = body.force / body.mass;
        integrator.step(&mut body.position, &mut body.velocity, acceleration, time_step);
        body.trace
            .record(body.position, body.velocity.length(), ctx.meters_per_pixel);
    }

    system.sweep();
    streams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::StarBody;
    use crate::physics::integrator::SemiImplicitEuler;
    use crate::physics::math::Vector;
    use bevy::color::Color;

    fn wide_pair() -> StarSystem {
        StarSystem::new(vec![
            StarBody::new(Vector::new(0.0, 0.0), 1.0e6, 1.0e22, Color::WHITE),
            StarBody::new(Vector::new(5.0e7, 0.0), 1.0e6, 1.0e22, Color::WHITE),
        ])
    }

    #[test]
    fn tick_leaves_only_alive_bodies() {
        // Overlapping bodies merge within the tick; the swept store must hold
        // exactly the alive merge product.
        let mut system = StarSystem::new(vec![
            StarBody::new(Vector::new(0.0, 0.0), 2.0e6, 2.0e22, Color::WHITE),
            StarBody::new(Vector::new(1.0e6, 0.0), 2.0e6, 1.0e22, Color::WHITE),
        ]);

        step(&mut system, &TickContext::default(), &SemiImplicitEuler);

        assert_eq!(system.len(), 1);
        assert!(system.bodies()[0].alive);
        assert!((system.bodies()[0].mass - 3.0e22).abs() < 1e10);
    }

    #[test]
    fn mass_is_conserved_across_collision_ticks() {
        let mut system = StarSystem::new(vec![
            StarBody::new(Vector::new(0.0, 0.0), 2.0e6, 2.0e22, Color::WHITE),
            StarBody::new(Vector::new(1.0e6, 0.0), 2.0e6, 1.0e22, Color::WHITE),
            StarBody::new(Vector::new(5.0e7, 0.0), 1.0e6, 4.0e21, Color::WHITE),
        ]);
        let before = system.total_mass();

        for _ in 0..50 {
            step(&mut system, &TickContext::default(), &SemiImplicitEuler);
        }

        let relative_drift = (system.total_mass() - before).abs() / before;
        assert!(relative_drift < 1e-12, "mass drifted by {relative_drift}");
    }

    #[test]
    fn forces_are_zeroed_each_tick() {
        // With a symmetric pair, two ticks of accumulation without zeroing
        // would double the force; the velocity change per tick must stay
        // constant instead while the separation barely changes.
        let ctx = TickContext::default();
        let mut system = wide_pair();

        step(&mut system, &ctx, &SemiImplicitEuler);
        let dv_first = system.bodies()[0].velocity.length();
        let v_before = system.bodies()[0].velocity;

        step(&mut system, &ctx, &SemiImplicitEuler);
        let dv_second = (system.bodies()[0].velocity - v_before).length();

        assert!(
            (dv_second - dv_first).abs() / dv_first < 1e-3,
            "per-tick velocity change should stay nearly constant: {dv_first} vs {dv_second}"
        );
    }

    #[test]
    fn merge_product_integrates_in_the_same_tick() {
        let mut a = StarBody::new(Vector::new(0.0, 0.0), 2.0e6, 2.0e22, Color::WHITE);
        a.velocity = Vector::new(120.0, 0.0);
        let mut b = StarBody::new(Vector::new(1.0e6, 0.0), 2.0e6, 1.0e22, Color::WHITE);
        b.velocity = Vector::new(-30.0, 0.0);
        let mut system = StarSystem::new(vec![a, b]);

        step(&mut system, &TickContext::default(), &SemiImplicitEuler);

        // Momentum-weighted velocity (2e22·120 − 1e22·30) / 3e22 = 70, and the
        // product moved by that displacement off its parent's position.
        let product = &system.bodies()[0];
        assert!((product.velocity.x - 70.0).abs() < 1e-9);
        assert!((product.position.x - 70.0).abs() < 1e-9);
    }

    #[test]
    fn context_time_step_combines_speed_and_fps() {
        let ctx = TickContext::with_time_speed(6000.0);
        assert!((ctx.time_step() - 50.0).abs() < 1e-12);
    }
}
