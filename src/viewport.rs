//! World-to-display coordinate transform with pan and zoom.
//!
//! Display coordinates use the window convention: origin at the top left,
//! y growing downward, one unit per pixel. The transform is pure state —
//! it never reads or mutates body data.

use crate::physics::math::{Scalar, Vector};
use crate::physics::simulation::DEFAULT_METERS_PER_PIXEL;

/// Scale multiplier applied per wheel notch; zooming in multiplies
/// `meters_per_pixel` by this factor, zooming out divides by it.
pub const ZOOM_STEP: Scalar = 0.85;

/// Pan offset and scale mapping world coordinates onto the display surface:
/// `display = (world − pan) / meters_per_pixel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// World coordinate shown at the display origin
    pub pan: Vector,
    /// Meters per display unit
    pub meters_per_pixel: Scalar,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vector::ZERO,
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
        }
    }
}

impl Viewport {
    pub fn world_to_display(&self, world: Vector) -> Vector {
        (world - self.pan) / self.meters_per_pixel
    }

    pub fn display_to_world(&self, display: Vector) -> Vector {
        display * self.meters_per_pixel + self.pan
    }

    /// Convert a world-space length into display units.
    pub fn display_length(&self, length: Scalar) -> Scalar {
        length / self.meters_per_pixel
    }

    /// One wheel notch inward, keeping the world point under `cursor`
    /// (display coordinates) fixed on screen.
    pub fn zoom_in(&mut self, cursor: Vector) {
        self.zoom(ZOOM_STEP, cursor);
    }

    /// One wheel notch outward, the exact inverse of [`Viewport::zoom_in`].
    pub fn zoom_out(&mut self, cursor: Vector) {
        self.zoom(ZOOM_STEP.recip(), cursor);
    }

    fn zoom(&mut self, factor: Scalar, cursor: Vector) {
        let anchor = self.display_to_world(cursor);
        self.meters_per_pixel *= factor;
        self.pan = anchor - cursor * self.meters_per_pixel;
    }

    /// Drag-pan by a pointer delta in display units.
    pub fn pan_by(&mut self, delta: Vector) {
        self.pan -= delta * self.meters_per_pixel;
    }
}
