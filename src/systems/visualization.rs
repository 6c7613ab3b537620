use crate::physics::math::Vector;
use crate::resources::{ActiveTransfers, SimulationSystem, SimulationViewport};
use bevy::prelude::*;

/// Map a display-space point (origin top left, y down, pixels) onto the
/// 2D camera's coordinates (origin at window center, y up).
fn display_to_camera(display: Vector, window: &Window) -> Vec2 {
    Vec2::new(
        display.x as f32 - window.width() / 2.0,
        window.height() / 2.0 - display.y as f32,
    )
}

/// Draw every live body as a circle plus its recorded path as point marks.
pub fn draw_bodies(
    mut gizmos: Gizmos,
    system: Res<SimulationSystem>,
    viewport: Res<SimulationViewport>,
    window: Single<&Window>,
) {
    for body in system.alive() {
        let center = display_to_camera(viewport.world_to_display(body.position), &window);
        let radius = viewport.display_length(body.radius) as f32;
        gizmos.circle_2d(center, radius.max(1.0), body.color);

        for sample in body.trace.iter() {
            let point = display_to_camera(viewport.world_to_display(*sample), &window);
            gizmos.circle_2d(point, 0.5, body.color);
        }
    }
}

/// Draw each mass-transfer stream as a line from the donor's near edge to
/// the accretor's near edge, in the donor's color.
pub fn draw_transfer_streams(
    mut gizmos: Gizmos,
    transfers: Res<ActiveTransfers>,
    viewport: Res<SimulationViewport>,
    window: Single<&Window>,
) {
    for stream in transfers.iter() {
        let donor = viewport.world_to_display(stream.donor_position);
        let accretor = viewport.world_to_display(stream.accretor_position);

        let start = donor + Vector::new(viewport.display_length(stream.donor_radius), 0.0);
        let end = accretor - Vector::new(viewport.display_length(stream.accretor_radius), 0.0);

        gizmos.line_2d(
            display_to_camera(start, &window),
            display_to_camera(end, &window),
            stream.color,
        );
    }
}
