use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

#[derive(Component)]
pub struct FpsHudValue;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        FpsHudValue,
        Text::new("fps"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn refresh_fps_hud(
    diagnostics: Res<DiagnosticsStore>,
    mut hud: Query<&mut Text, With<FpsHudValue>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|diagnostic| diagnostic.smoothed())
    else {
        return;
    };

    for mut text in &mut hud {
        **text = format!("{fps:.0} fps");
    }
}
