//! Resolution of the pair events flagged during the force pass: merging
//! collided bodies and moving mass across an overflowed Roche lobe.

use crate::physics::body::{StarBody, StarSystem};
use crate::physics::gravity::PairEvent;
use crate::physics::math::{Scalar, Vector};
use bevy::color::Color;

/// Fraction of the donor's mass moved per tick while its lobe overflows.
///
/// There is deliberately no floor and no termination condition: transfer
/// repeats every tick the overflow holds, asymptotically depleting the donor.
pub const TRANSFER_FRACTION: Scalar = 1e-6;

/// One tick's mass-transfer stream, reported for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferStream {
    pub donor_position: Vector,
    pub donor_radius: Scalar,
    pub accretor_position: Vector,
    pub accretor_radius: Scalar,
    pub color: Color,
}

/// Merge every collided pair whose bodies are both still alive.
///
/// The product sits at the more-massive parent's position (ties favor the
/// second body in detection order), carries the summed mass and the summed
/// radii (no volume conservation), the momentum-weighted velocity, and the
/// dominant parent's color. Both parents are retired; a parent retired by an
/// earlier pair in the same tick skips any later pair referencing it, so a
/// three-way overlap may need a second tick to finish merging.
pub fn resolve_collisions(system: &mut StarSystem, events: &[PairEvent]) {
    for event in events {
        let PairEvent::Collision { first, second } = *event else {
            continue;
        };

        if !(system.bodies()[first].alive && system.bodies()[second].alive) {
            continue;
        }

        let dominant = if system.bodies()[first].mass > system.bodies()[second].mass {
            first
        } else {
            second
        };

        let product = {
            let bodies = system.bodies();
            let (p1, p2) = (&bodies[first], &bodies[second]);
            let total_mass = p1.mass + p2.mass;

            let mut product = StarBody::new(
                bodies[dominant].position,
                p1.radius + p2.radius,
                total_mass,
                bodies[dominant].color,
            );
            product.velocity = (p1.momentum() + p2.momentum()) / total_mass;
            product
        };

        system.bodies_mut()[first].alive = false;
        system.bodies_mut()[second].alive = false;
        system.push(product);
    }
}

/// Apply mass transfer for every flagged pair whose members survived the
/// collision step, and report the streams for the renderer.
///
/// Radii track mass proportionally on both sides: `ΔR = amount · R / M`.
pub fn exchange_masses(system: &mut StarSystem, events: &[PairEvent]) -> Vec<TransferStream> {
    let mut streams = Vec::new();

    for event in events {
        let PairEvent::MassTransfer { accretor, donor } = *event else {
            continue;
        };

        if !(system.bodies()[accretor].alive && system.bodies()[donor].alive) {
            continue;
        }

        let (accretor, donor) = system.pair_mut(accretor, donor);
        let amount = donor.mass * TRANSFER_FRACTION;

        donor.radius -= amount * (donor.radius / donor.mass);
        donor.mass -= amount;
        accretor.radius += amount * (accretor.radius / accretor.mass);
        accretor.mass += amount;

        streams.push(TransferStream {
            donor_position: donor.position,
            donor_radius: donor.radius,
            accretor_position: accretor.position,
            accretor_radius: accretor.radius,
            color: donor.color,
        });
    }

    streams
}
