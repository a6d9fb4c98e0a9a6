use bevy::prelude::*;

use super::stats::DebugStats;

#[derive(Resource, Default)]
pub struct OverlayState {
    pub visible: bool,
}

#[derive(Component)]
pub struct OverlayText;

const TOGGLE_KEY: KeyCode = KeyCode::F3;

pub fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        OverlayText,
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 1.0, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            left: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

pub fn toggle_overlay(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<OverlayState>) {
    if keys.just_pressed(TOGGLE_KEY) {
        state.visible = !state.visible;
        info!(visible = state.visible, "debug overlay toggled");
    }
}

pub fn update_overlay(
    state: Res<OverlayState>,
    stats: Res<DebugStats>,
    mut overlay: Query<(&mut Text, &mut Visibility), With<OverlayText>>,
) {
    if let Ok((mut text, mut visibility)) = overlay.single_mut() {
        visibility.set_if_neq(if state.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        });
        if state.visible {
            text.0 = format!(
                "fps {:.0}\nships alive {}\nasteroids {}\nbullets {}",
                stats.fps, stats.ships_alive, stats.asteroids, stats.bullets
            );
        }
    }
}
