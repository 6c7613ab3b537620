//! Headless simulation core: body store, gravity, collisions, Roche-lobe
//! mass transfer, integration, and scenario construction. Nothing in here
//! touches rendering or input; the [`simulation::step`] orchestrator is a
//! pure function of system state and a [`simulation::TickContext`].

pub mod body;
pub mod gravity;
pub mod integrator;
pub mod interactions;
pub mod math;
pub mod scenario;
pub mod simulation;
