//! Built-in scenarios and construction from external star records.
//!
//! Starting positions and launch velocities are fixed literals tuned so the
//! default masses stay gravitationally bound. Externally supplied records
//! replace mass, radius, and color only; the literal positions and launch
//! velocities are reused verbatim, never rescaled to the new masses, so
//! arbitrary custom values can escape or collide immediately. That is an
//! accepted fidelity limit of the scenarios, not something to patch here.

use crate::physics::body::{StarBody, StarSystem};
use crate::physics::math::{ASTRONOMICAL_UNIT, SOLAR_MASS, SOLAR_RADIUS, Scalar, Vector};
use bevy::color::Color;
use bevy::color::palettes::css;

/// Mass, radius, and display color supplied for one star by an external
/// scenario source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    pub mass: Scalar,
    pub radius: Scalar,
    pub color: Color,
}

/// Two bodies on a tight bound orbit (masses and separation modeled on the
/// Pluto–Charon system).
///
/// Launch speeds are given in m/s and scaled by `time_speed / fps` into
/// per-tick displacement.
pub fn two_body(custom: Option<[StarRecord; 2]>, time_speed: Scalar, fps: Scalar) -> StarSystem {
    let launch = time_speed / fps;

    let (mut s1, mut s2) = match custom {
        Some([r1, r2]) => (
            StarBody::new(Vector::new(0.0, 19_591_000.0), r1.radius, r1.mass, r1.color),
            StarBody::new(Vector::new(0.0, 0.0), r2.radius, r2.mass, r2.color),
        ),
        None => (
            StarBody::new(
                Vector::new(0.0, 19_591_000.0),
                606_000.0,
                1.52e21,
                css::GRAY.into(),
            ),
            StarBody::new(
                Vector::new(0.0, 0.0),
                1_188_000.0,
                1.303e22,
                css::BROWN.into(),
            ),
        ),
    };

    s1.velocity.x += 210.0 * launch;
    s2.velocity.x += -24.0 * launch;

    StarSystem::new(vec![s1, s2])
}

/// A close stellar binary with a heavy third star falling in from two
/// astronomical units out.
pub fn three_body(custom: Option<[StarRecord; 3]>, time_speed: Scalar, fps: Scalar) -> StarSystem {
    let launch = time_speed / fps;

    let (mut s1, mut s2, mut s3) = match custom {
        Some([r1, r2, r3]) => (
            StarBody::new(
                Vector::new(0.0, 0.074 * ASTRONOMICAL_UNIT),
                r1.radius,
                r1.mass,
                r1.color,
            ),
            StarBody::new(
                Vector::new(0.0, -0.074 * ASTRONOMICAL_UNIT),
                r2.radius,
                r2.mass,
                r2.color,
            ),
            StarBody::new(
                Vector::new(2.0 * ASTRONOMICAL_UNIT, 2.0 * ASTRONOMICAL_UNIT),
                r3.radius,
                r3.mass,
                r3.color,
            ),
        ),
        None => (
            StarBody::new(
                Vector::new(0.0, 0.074 * ASTRONOMICAL_UNIT),
                2.84 * SOLAR_RADIUS,
                2.27 * SOLAR_MASS,
                css::BLUE.into(),
            ),
            StarBody::new(
                Vector::new(0.0, -0.074 * ASTRONOMICAL_UNIT),
                2.85 * SOLAR_RADIUS,
                2.30 * SOLAR_MASS,
                css::YELLOW.into(),
            ),
            StarBody::new(
                Vector::new(2.0 * ASTRONOMICAL_UNIT, 2.0 * ASTRONOMICAL_UNIT),
                0.8 * SOLAR_RADIUS,
                4.4 * SOLAR_MASS,
                css::GREEN.into(),
            ),
        ),
    };

    s1.velocity.x += 51_000.0 * launch;
    s2.velocity.x += -51_000.0 * launch;
    s3.velocity.x += -10_000.0 * launch;
    s3.velocity.y += -5_000.0 * launch;

    // Stored third star first; pair detection order depends on it.
    StarSystem::new(vec![s3, s2, s1])
}

/// Build a system from external records: two records select the binary
/// layout, three select the triple, anything else falls back to the
/// built-in two-body defaults.
pub fn from_records(records: &[StarRecord], time_speed: Scalar, fps: Scalar) -> StarSystem {
    match records {
        [r1, r2] => two_body(Some([*r1, *r2]), time_speed, fps),
        [r1, r2, r3] => three_body(Some([*r1, *r2, *r3]), time_speed, fps),
        _ => two_body(None, time_speed, fps),
    }
}
