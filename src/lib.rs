//! Stellar Dance library
//!
//! This provides the core functionality of Stellar Dance as a library
//! to enable integration testing.

pub mod cli;
pub mod config;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;
pub mod systems;
pub mod viewport;

// Test utilities are public for integration tests
pub mod test_utils;
