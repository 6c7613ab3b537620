use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use clap::Parser;
use stellar_dance::cli::{Args, ScenarioSource};
use stellar_dance::plugins::simulation::SimulationPlugin;
use stellar_dance::plugins::viewport::ViewportPlugin;

fn main() {
    let args = Args::parse();

    let mut app = App::new();

    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stellar Dance".to_string(),
                resolution: (800.0, 450.0).into(),
                ..default()
            }),
            ..default()
        }),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    app.insert_resource(ScenarioSource::from(args));
    app.add_plugins((SimulationPlugin, ViewportPlugin));

    app.run();
}
