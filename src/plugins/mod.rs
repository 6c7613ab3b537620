pub mod simulation;
pub mod viewport;
