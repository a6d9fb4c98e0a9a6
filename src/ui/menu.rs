use bevy::prelude::*;

use crate::app::state::AppState;
use crate::interaction::input::{key_label, KeyTable, ShipKeys};

#[derive(Component)]
struct MenuRoot;

/// Title card shown before the first round. Lists the resolved bindings, not
/// the config strings, so a bad config shows what will actually work.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Menu), spawn_menu)
            .add_systems(OnExit(AppState::Menu), despawn_menu)
            .add_systems(Update, start_on_enter.run_if(in_state(AppState::Menu)));
    }
}

fn seat_line(seat: &str, keys: &ShipKeys) -> String {
    format!(
        "{seat}:  {}/{} turn   {} thrust   {} fire",
        key_label(keys.left),
        key_label(keys.right),
        key_label(keys.thrust),
        key_label(keys.fire),
    )
}

fn spawn_menu(mut commands: Commands, table: Res<KeyTable>) {
    commands
        .spawn((
            MenuRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("ASTRODUEL"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            for line in [
                seat_line("Player 1", &table.one),
                seat_line("Player 2", &table.two),
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.7, 0.7, 0.7)),
                ));
            }
            parent.spawn((
                Text::new("Press Enter to start"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.0)),
            ));
        });
}

fn start_on_enter(keys: Res<ButtonInput<KeyCode>>, mut next: ResMut<NextState<AppState>>) {
    if keys.just_pressed(KeyCode::Enter) {
        info!(target: "menu", "starting first round");
        next.set(AppState::Playing);
    }
}

fn despawn_menu(mut commands: Commands, roots: Query<Entity, With<MenuRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}
