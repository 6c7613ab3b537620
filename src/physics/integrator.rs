//! Time integration for the simulation.
//!
//! Velocities here store displacement per tick rather than meters per
//! second: the velocity update multiplies acceleration by the *square* of
//! the tick step (one factor converts m/s² into a per-tick velocity change,
//! the other converts that velocity into per-tick displacement), and the
//! position update then adds the velocity with no further scaling. This
//! exact scaling defines the product's dynamics and must not be "corrected"
//! to a single-power step.

use crate::physics::math::{Scalar, Vector};

/// Advances a single body's state by one tick.
pub trait Integrator: Send + Sync {
    /// `step` is the effective tick length in seconds, `time_speed / fps`.
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, step: Scalar);

    /// Name of this integrator
    fn name(&self) -> &str;
}

/// Semi-implicit Euler on per-tick displacement: the velocity update runs
/// first, and the position update uses the new velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        step: Scalar,
    ) {
        *velocity += acceleration * (step * step);
        *position += *velocity;
    }

    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_update_uses_squared_step() {
        let integrator = SemiImplicitEuler;
        let mut position = Vector::new(10.0, 0.0);
        let mut velocity = Vector::new(1.0, 2.0);
        let acceleration = Vector::new(0.5, -0.25);
        let step = 40.0;

        integrator.step(&mut position, &mut velocity, acceleration, step);

        // v' = v + a·step², exactly.
        assert_eq!(velocity, Vector::new(1.0 + 0.5 * 1600.0, 2.0 - 0.25 * 1600.0));
        // x' = x + v', with no extra step factor.
        assert_eq!(position, Vector::new(10.0, 0.0) + velocity);
    }

    #[test]
    fn coasting_body_moves_by_its_velocity() {
        let integrator = SemiImplicitEuler;
        let mut position = Vector::ZERO;
        let mut velocity = Vector::new(3.0, -4.0);

        integrator.step(&mut position, &mut velocity, Vector::ZERO, 41.666);

        assert_eq!(position, Vector::new(3.0, -4.0));
        assert_eq!(velocity, Vector::new(3.0, -4.0));
    }

    #[test]
    fn name_is_stable() {
        assert_eq!(SemiImplicitEuler.name(), "Semi-implicit Euler");
    }
}
