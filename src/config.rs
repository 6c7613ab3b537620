use crate::physics::math::Scalar;
use crate::physics::scenario::StarRecord;
use bevy::color::palettes::css;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scenario description consumed once at startup.
///
/// ```toml
/// time_speed = 5000
/// system_type = "binary"
///
/// [[stars]]
/// mass = 1.52e21
/// radius = 606000.0
/// color = "gray"
///
/// [[stars]]
/// mass = 1.303e22
/// radius = 1188000.0
/// color = "brown"
/// ```
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub stars: Vec<StarConfig>,
    #[serde(default = "default_time_speed")]
    pub time_speed: u32,
    /// Informational only; the star count selects the layout.
    #[serde(default)]
    pub system_type: SystemType,
}

fn default_time_speed() -> u32 {
    crate::physics::simulation::DEFAULT_TIME_SPEED as u32
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            stars: Vec::new(),
            time_speed: default_time_speed(),
            system_type: SystemType::Binary,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StarConfig {
    pub mass: Scalar,
    pub radius: Scalar,
    #[serde(default)]
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SystemType {
    #[default]
    Binary,
    Triple,
}

impl ScenarioConfig {
    /// Load a scenario from a file, falling back to the built-in defaults on
    /// a missing file, a parse failure, or unusable star values. The
    /// fallback is silent by design: the simulation always starts.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) if config.has_valid_stars() => config,
                Ok(config) => {
                    warn!(
                        "Scenario file {} holds unusable star records. Using defaults.",
                        path
                    );
                    // Keep the requested time acceleration even when the star
                    // list is rejected.
                    Self {
                        time_speed: config.time_speed,
                        ..Self::default()
                    }
                }
                Err(e) => {
                    warn!("Failed to parse scenario file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Scenario file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Every supplied star must have positive mass and radius. An empty list
    /// is valid and means "use the built-in scenario"; unsupported counts
    /// are handled downstream by the scenario builder.
    fn has_valid_stars(&self) -> bool {
        self.stars
            .iter()
            .all(|star| star.mass > 0.0 && star.radius > 0.0)
    }

    /// Records handed to the scenario builder.
    pub fn star_records(&self) -> Vec<StarRecord> {
        self.stars
            .iter()
            .map(|star| StarRecord {
                mass: star.mass,
                radius: star.radius,
                color: parse_color(&star.color),
            })
            .collect()
    }
}

/// Map a scenario color name (or `#rrggbb` hex) to a display color. Unknown
/// names render white; the engine never looks at the value again.
pub fn parse_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => css::BLACK.into(),
        "blue" => css::BLUE.into(),
        "brown" => css::BROWN.into(),
        "cyan" => Color::srgb(0.0, 1.0, 1.0),
        "gray" | "grey" => css::GRAY.into(),
        "green" => css::GREEN.into(),
        "magenta" => css::MAGENTA.into(),
        "orange" => css::ORANGE.into(),
        "pink" => css::PINK.into(),
        "purple" => css::PURPLE.into(),
        "red" => css::RED.into(),
        "white" => css::WHITE.into(),
        "yellow" => css::YELLOW.into(),
        hex => Srgba::hex(hex).map(Color::from).unwrap_or(Color::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIPLE: &str = r#"
        time_speed = 8000
        system_type = "triple"

        [[stars]]
        mass = 4.5e30
        radius = 7.0e8
        color = "blue"

        [[stars]]
        mass = 4.6e30
        radius = 7.1e8
        color = "yellow"

        [[stars]]
        mass = 8.8e30
        radius = 5.6e8
        color = "green"
    "#;

    #[test]
    fn parses_a_triple_scenario() {
        let config: ScenarioConfig = toml::from_str(TRIPLE).expect("scenario should parse");

        assert_eq!(config.stars.len(), 3);
        assert_eq!(config.time_speed, 8000);
        assert_eq!(config.system_type, SystemType::Triple);
        assert_eq!(config.stars[0].color, "blue");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: ScenarioConfig = toml::from_str("").expect("empty scenario should parse");

        assert!(config.stars.is_empty());
        assert_eq!(config.time_speed, 5000);
        assert_eq!(config.system_type, SystemType::Binary);
    }

    #[test]
    fn rejects_non_positive_star_values() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            [[stars]]
            mass = -1.0
            radius = 1.0e6
            color = "red"

            [[stars]]
            mass = 1.0e21
            radius = 1.0e6
            color = "blue"
            "#,
        )
        .expect("scenario should parse");

        assert!(!config.has_valid_stars());
    }

    #[test]
    fn color_names_and_hex_parse() {
        assert_eq!(parse_color("gray"), parse_color("grey"));
        assert_ne!(parse_color("blue"), Color::WHITE);
        assert_ne!(parse_color("#336699"), Color::WHITE);
        assert_eq!(parse_color("definitely-not-a-color"), Color::WHITE);
    }

    #[test]
    fn star_records_carry_values_through() {
        let config: ScenarioConfig = toml::from_str(TRIPLE).expect("scenario should parse");
        let records = config.star_records();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].mass, 4.5e30);
        assert_eq!(records[2].radius, 5.6e8);
    }
}
