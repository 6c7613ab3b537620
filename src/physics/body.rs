//! Body state and the arena-style store the simulation mutates.
//!
//! [`StarBody`] is a pure physics record: position, velocity, accumulated
//! force, mass, radius, an opaque display color, a liveness flag, and a
//! bounded trace of past positions. [`StarSystem`] owns every body in an
//! indexed arena; merges never remove slots mid-tick, they only flip the
//! liveness flag, so pair indices recorded during the force pass stay valid
//! until the end-of-tick sweep.

use crate::physics::math::{Scalar, Vector};
use bevy::color::Color;
use std::collections::VecDeque;

/// Maximum number of stored trace samples per body.
pub const TRACE_CAPACITY: usize = 1000;

/// Display-space path length (in display units at the active scale) a body
/// must travel before the next trace sample is recorded.
pub const TRACE_SAMPLE_SPACING: Scalar = 7.0;

/// Bounded history of a body's past positions, used to render an orbit trail.
///
/// Samples are appended in insertion order; once [`TRACE_CAPACITY`] is
/// reached the oldest sample is dropped.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    samples: VecDeque<Vector>,
    accumulated_path: Scalar,
}

impl Trace {
    /// Feed one tick's displacement. A sample is stored once the accumulated
    /// path length reaches [`TRACE_SAMPLE_SPACING`] display units at the
    /// given scale, and the counter resets.
    pub fn record(&mut self, position: Vector, step_length: Scalar, meters_per_pixel: Scalar) {
        self.accumulated_path += step_length;

        if self.accumulated_path / meters_per_pixel >= TRACE_SAMPLE_SPACING {
            self.accumulated_path = 0.0;

            if self.samples.len() == TRACE_CAPACITY {
                self.samples.pop_front();
            }
            self.samples.push_back(position);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A single massive body.
///
/// `color` is carried through untouched for the renderer; the engine never
/// interprets it. `force` accumulates over the pair pass and is consumed by
/// integration, then zeroed at the start of the next tick.
#[derive(Debug, Clone)]
pub struct StarBody {
    pub position: Vector,
    pub velocity: Vector,
    pub force: Vector,
    pub radius: Scalar,
    pub mass: Scalar,
    pub color: Color,
    pub alive: bool,
    pub trace: Trace,
}

impl StarBody {
    pub fn new(position: Vector, radius: Scalar, mass: Scalar, color: Color) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            force: Vector::ZERO,
            radius,
            mass,
            color,
            alive: true,
            trace: Trace::default(),
        }
    }

    /// Momentum contribution, `m · v`.
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }
}

/// Arena of body slots with liveness flags.
#[derive(Debug, Clone, Default)]
pub struct StarSystem {
    bodies: Vec<StarBody>,
}

impl StarSystem {
    pub fn new(bodies: Vec<StarBody>) -> Self {
        Self { bodies }
    }

    /// Number of slots, dead ones included.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[StarBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [StarBody] {
        &mut self.bodies
    }

    /// Append a new body (scenario setup or a merge product).
    pub fn push(&mut self, body: StarBody) {
        self.bodies.push(body);
    }

    pub fn alive(&self) -> impl Iterator<Item = &StarBody> {
        self.bodies.iter().filter(|body| body.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Total mass of the alive bodies.
    pub fn total_mass(&self) -> Scalar {
        self.alive().map(|body| body.mass).sum()
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut StarBody, &mut StarBody) {
        assert_ne!(i, j, "pair_mut requires two distinct slots");

        if i < j {
            let (left, right) = self.bodies.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.bodies.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }

    /// Drop dead slots. Run only at the end of a tick, after every recorded
    /// pair index has been consumed.
    pub fn sweep(&mut self) {
        self.bodies.retain(|body| body.alive);
    }
}
