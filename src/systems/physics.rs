use crate::physics::simulation;
use crate::resources::*;
use bevy::prelude::*;

/// Advance the star system by one fixed tick.
///
/// The viewport scale feeds back into the tick because trace sampling is
/// spaced in display units; zooming changes how densely paths are recorded.
pub fn step_simulation(
    mut system: ResMut<SimulationSystem>,
    mut transfers: ResMut<ActiveTransfers>,
    context: Res<SimulationContext>,
    viewport: Res<SimulationViewport>,
    integrator: Res<CurrentIntegrator>,
) {
    let mut ctx = **context;
    ctx.meters_per_pixel = viewport.meters_per_pixel;

    **transfers = simulation::step(&mut system, &ctx, integrator.0.as_ref());
}
