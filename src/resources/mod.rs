use crate::physics::body::StarSystem;
use crate::physics::integrator::{Integrator, SemiImplicitEuler};
use crate::physics::interactions::TransferStream;
use crate::physics::simulation::TickContext;
use crate::viewport::Viewport;
use bevy::prelude::*;

/// The star system being simulated.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default)]
pub struct SimulationSystem(pub StarSystem);

/// Per-tick parameters handed to the orchestrator.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationContext(pub TickContext);

/// Resource holding the currently active integrator
#[derive(Resource)]
pub struct CurrentIntegrator(pub Box<dyn Integrator>);

impl Default for CurrentIntegrator {
    fn default() -> Self {
        Self(Box::new(SemiImplicitEuler))
    }
}

/// Pan/zoom state shared by the input systems and the renderer.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationViewport(pub Viewport);

/// Mass-transfer streams recorded during the latest tick, drawn until the
/// next tick replaces them.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default)]
pub struct ActiveTransfers(pub Vec<TransferStream>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_integrator_is_semi_implicit_euler() {
        let integrator = CurrentIntegrator::default();
        assert_eq!(integrator.0.name(), "Semi-implicit Euler");
    }

    #[test]
    fn default_context_matches_simulation_defaults() {
        let ctx = SimulationContext::default();
        assert_eq!(ctx.time_speed, crate::physics::simulation::DEFAULT_TIME_SPEED);
        assert_eq!(ctx.fps, crate::physics::simulation::NOMINAL_FPS);
    }
}
