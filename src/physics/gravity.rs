//! Pairwise Newtonian gravity and pair-event detection.
//!
//! One O(n²) traversal does both jobs: it accumulates equal-and-opposite
//! forces for every unordered pair of alive bodies, and classifies each pair
//! as colliding or Roche-overflowing while the separation is already at hand.
//! Collision takes priority; a colliding pair is never also flagged for mass
//! transfer.

use crate::physics::body::StarSystem;
use crate::physics::math::{Scalar, roche_radius};

/// A pair flagged during the force pass, resolved later in the same tick.
///
/// Indices refer to arena slots and remain valid until the end-of-tick
/// sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairEvent {
    /// Bodies overlap: sum of radii exceeds their separation. Stored in
    /// detection order.
    Collision { first: usize, second: usize },
    /// The donor overflows its Roche lobe toward the heavier accretor.
    MassTransfer { accretor: usize, donor: usize },
}

/// Accumulate gravity into every alive body's `force` and append one
/// [`PairEvent`] per overlapping or lobe-overflowing pair.
///
/// `F = G·m_i·m_j / d²`, applied along the separation vector to both bodies
/// with opposite signs, each pair visited exactly once.
pub fn accumulate_forces(system: &mut StarSystem, g: Scalar, events: &mut Vec<PairEvent>) {
    let bodies = system.bodies_mut();
    let n = bodies.len();

    for i in 0..n {
        if !bodies[i].alive {
            continue;
        }

        for j in (i + 1)..n {
            if !bodies[j].alive {
                continue;
            }

            let offset = bodies[j].position - bodies[i].position;
            let separation = offset.length();
            let magnitude = g * bodies[i].mass * bodies[j].mass / (separation * separation);
            let force = offset * (magnitude / separation);

            bodies[i].force += force;
            bodies[j].force -= force;

            if bodies[i].radius + bodies[j].radius > separation {
                events.push(PairEvent::Collision { first: i, second: j });
                continue;
            }

            // Roche overflow is judged from the heavier body's perspective;
            // equal masses never transfer.
            let (accretor, donor) = if bodies[i].mass > bodies[j].mass {
                (i, j)
            } else if bodies[j].mass > bodies[i].mass {
                (j, i)
            } else {
                continue;
            };

            let q = bodies[donor].mass / bodies[accretor].mass;
            let lobe = roche_radius(separation, q);

            if bodies[i].radius + bodies[j].radius > lobe {
                events.push(PairEvent::MassTransfer { accretor, donor });
            }
        }
    }
}
