//! Command line interface for Stellar Dance

use bevy::prelude::Resource;
use clap::Parser;

/// Stellar Dance - interactive two/three-body gravity toy
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a scenario file (TOML format)
    #[arg(value_name = "FILE")]
    pub scenario: Option<String>,

    /// Time acceleration factor (overrides the scenario file)
    #[arg(short = 't', long, value_name = "FACTOR")]
    pub time_speed: Option<u32>,
}

/// Where the simulation plugin should load its scenario from, carried into
/// the app so loading happens after logging is set up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScenarioSource {
    pub path: Option<String>,
    pub time_speed_override: Option<u32>,
}

impl From<Args> for ScenarioSource {
    fn from(args: Args) -> Self {
        Self {
            path: args.scenario,
            time_speed_override: args.time_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_path_is_positional() {
        let args = Args::parse_from(["stellar-dance", "scenario.toml"]);
        assert_eq!(args.scenario.as_deref(), Some("scenario.toml"));
        assert_eq!(args.time_speed, None);
    }

    #[test]
    fn time_speed_override_parses() {
        let args = Args::parse_from(["stellar-dance", "-t", "9000"]);
        assert_eq!(args.scenario, None);
        assert_eq!(args.time_speed, Some(9000));
    }

    #[test]
    fn source_carries_both_fields() {
        let source: ScenarioSource =
            Args::parse_from(["stellar-dance", "stars.toml", "--time-speed", "100"]).into();
        assert_eq!(source.path.as_deref(), Some("stars.toml"));
        assert_eq!(source.time_speed_override, Some(100));
    }
}
