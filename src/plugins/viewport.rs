use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use crate::systems::input::{pan_on_drag, zoom_on_wheel};

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationViewport>();

        app.add_systems(Startup, spawn_camera);
        app.add_systems(
            Update,
            (zoom_on_wheel, pan_on_drag).in_set(SimulationSet::Input),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
    ));
}
