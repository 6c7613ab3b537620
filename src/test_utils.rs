//! Test utilities for system and plugin testing

use crate::prelude::*;
use bevy::input::mouse::{MouseMotion, MouseWheel};

/// Creates a minimal headless app with the resources and states the
/// simulation systems expect. Input resources are registered directly so
/// tests control key state without the real input pipeline clearing it.
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));

    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.add_event::<MouseMotion>();
    app.add_event::<MouseWheel>();

    app.init_resource::<SimulationSystem>();
    app.init_resource::<SimulationContext>();
    app.init_resource::<SimulationViewport>();
    app.init_resource::<CurrentIntegrator>();
    app.init_resource::<ActiveTransfers>();
    app.init_state::<AppState>();

    app
}

/// Press a key for exactly the next update.
pub fn press_key(app: &mut App, key: KeyCode) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.reset_all();
    input.press(key);
}

/// Drop the just-pressed flags so a press does not repeat across frames.
pub fn clear_keys(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_carries_simulation_resources() {
        let app = create_test_app();

        assert!(app.world().contains_resource::<SimulationSystem>());
        assert!(app.world().contains_resource::<SimulationViewport>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
    }

    #[test]
    fn press_key_marks_just_pressed() {
        let mut app = create_test_app();

        press_key(&mut app, KeyCode::Space);
        assert!(
            app.world()
                .resource::<ButtonInput<KeyCode>>()
                .just_pressed(KeyCode::Space)
        );

        clear_keys(&mut app);
        assert!(
            !app.world()
                .resource::<ButtonInput<KeyCode>>()
                .just_pressed(KeyCode::Space)
        );
    }
}
