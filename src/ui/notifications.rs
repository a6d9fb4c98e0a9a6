use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::events::{RestartRequested, ShowNotification};

#[derive(Component)]
struct NotificationRoot;

/// Buttonless banners expire on this; banners with a restart button stay
/// until the round restarts.
#[derive(Component, Deref, DerefMut)]
struct NotificationTimeout(Timer);

#[derive(Component)]
struct RestartButton;

const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const BUTTON_BG: Color = Color::srgb(0.22, 0.22, 0.28);
const BUTTON_BG_HOVER: Color = Color::srgb(0.32, 0.32, 0.40);
const BUTTON_BG_PRESSED: Color = Color::srgb(0.16, 0.16, 0.20);

/// Banner surface along the top of the screen. Anything in the app can raise
/// a [`ShowNotification`]; the round-over banner carries the restart button.
pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShowNotification>()
            .add_event::<RestartRequested>()
            .add_systems(OnEnter(AppState::Playing), clear_banners)
            .add_systems(
                Update,
                (spawn_banners, expire_banners, drive_restart_button),
            );
    }
}

fn spawn_banners(
    mut requests: EventReader<ShowNotification>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
) {
    for request in requests.read() {
        info!(target: "ui", message = request.message.as_str(), "banner shown");
        let mut root = commands.spawn((
            NotificationRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
        ));
        if !request.with_restart {
            root.insert(NotificationTimeout(Timer::from_seconds(
                cfg.ui.banner_seconds,
                TimerMode::Once,
            )));
        }
        let message = request.message.clone();
        let with_restart = request.with_restart;
        root.with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(18.0)),
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                    BorderRadius::all(Val::Px(6.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(message),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    if with_restart {
                        panel
                            .spawn((
                                Button,
                                RestartButton,
                                Node {
                                    padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                                    ..default()
                                },
                                BackgroundColor(BUTTON_BG),
                                BorderRadius::all(Val::Px(4.0)),
                            ))
                            .with_children(|button| {
                                button.spawn((
                                    Text::new("Try Again"),
                                    TextFont {
                                        font_size: 20.0,
                                        ..default()
                                    },
                                    TextColor(Color::WHITE),
                                ));
                            });
                    }
                });
        });
    }
}

fn expire_banners(
    time: Res<Time>,
    mut commands: Commands,
    mut banners: Query<(Entity, &mut NotificationTimeout)>,
) {
    for (entity, mut timeout) in &mut banners {
        timeout.tick(time.delta());
        if timeout.finished() {
            commands.entity(entity).despawn();
        }
    }
}

fn drive_restart_button(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<RestartButton>),
    >,
    mut requests: EventWriter<RestartRequested>,
) {
    for (interaction, mut background) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                *background = BackgroundColor(BUTTON_BG_PRESSED);
                requests.write(RestartRequested);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_BG_HOVER),
            Interaction::None => *background = BackgroundColor(BUTTON_BG),
        }
    }
}

fn clear_banners(mut commands: Commands, banners: Query<Entity, With<NotificationRoot>>) {
    for entity in &banners {
        commands.entity(entity).despawn();
    }
}
