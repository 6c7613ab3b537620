use crate::physics::math::Vector;
use crate::resources::SimulationViewport;
use crate::states::AppState;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

pub fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write_default();
    }
}

pub fn toggle_pause_on_space(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        next_state.set(state.get().toggled());
    }
}

/// Zoom one step per wheel notch, anchored on the cursor so the point
/// under the pointer stays put.
pub fn zoom_on_wheel(
    mut wheel: EventReader<MouseWheel>,
    window: Single<&Window>,
    mut viewport: ResMut<SimulationViewport>,
) {
    let Some(cursor) = window.cursor_position() else {
        wheel.clear();
        return;
    };
    let cursor = Vector::new(cursor.x as f64, cursor.y as f64);

    for event in wheel.read() {
        if event.y > 0.0 {
            viewport.zoom_in(cursor);
        } else if event.y < 0.0 {
            viewport.zoom_out(cursor);
        }
    }
}

/// Drag with the left button to pan. Motion events are drained even when
/// the button is up so a new drag never replays stale deltas.
pub fn pan_on_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut viewport: ResMut<SimulationViewport>,
) {
    if buttons.pressed(MouseButton::Left) {
        for event in motion.read() {
            viewport.pan_by(Vector::new(event.delta.x as f64, event.delta.y as f64));
        }
    } else {
        motion.clear();
    }
}
