pub mod hud;
pub mod input;
pub mod physics;
pub mod visualization;
