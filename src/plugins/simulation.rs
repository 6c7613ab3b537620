use crate::cli::ScenarioSource;
use crate::config::ScenarioConfig;
use crate::physics::scenario;
use crate::physics::simulation::{NOMINAL_FPS, TickContext};
use crate::prelude::*;
use crate::systems::hud::{refresh_fps_hud, spawn_hud};
use crate::systems::physics::step_simulation;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Render,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let source = app
            .world()
            .get_resource::<ScenarioSource>()
            .cloned()
            .unwrap_or_default();

        let mut config = match &source.path {
            Some(path) => ScenarioConfig::load_or_default(path),
            None => ScenarioConfig::default(),
        };
        if let Some(time_speed) = source.time_speed_override {
            config.time_speed = time_speed;
        }

        let context = TickContext::with_time_speed(config.time_speed as Scalar);
        let system = scenario::from_records(&config.star_records(), context.time_speed, NOMINAL_FPS);
        info!(
            "Starting with {} bodies at time speed {}",
            system.alive_count(),
            config.time_speed
        );

        app.insert_resource(config);
        app.insert_resource(SimulationSystem(system));
        app.insert_resource(SimulationContext(context));
        app.init_resource::<CurrentIntegrator>();
        app.init_resource::<ActiveTransfers>();

        app.init_state::<AppState>();
        app.insert_resource(Time::<Fixed>::from_hz(NOMINAL_FPS));

        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Render).chain(),
        );

        app.add_systems(
            FixedUpdate,
            step_simulation.run_if(in_state(AppState::Running)),
        );
        app.add_systems(Startup, spawn_hud);
        app.add_systems(
            Update,
            (
                crate::systems::input::quit_on_escape,
                crate::systems::input::toggle_pause_on_space,
            )
                .in_set(SimulationSet::Input),
        );
        app.add_systems(
            Update,
            (
                crate::systems::visualization::draw_bodies,
                crate::systems::visualization::draw_transfer_streams,
                refresh_fps_hud,
            )
                .in_set(SimulationSet::Render),
        );
    }
}
