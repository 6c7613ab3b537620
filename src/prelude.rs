//! Stellar Dance prelude module
//!
//! Re-exports the most commonly used types across the application to
//! reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Physics
pub use crate::physics::math::{Scalar, Vector};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{
    ActiveTransfers, CurrentIntegrator, SimulationContext, SimulationSystem, SimulationViewport,
};

// Internal re-exports - Viewport transform
pub use crate::viewport::Viewport;
