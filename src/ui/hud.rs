use bevy::prelude::*;

use crate::app::state::AppState;
use crate::gameplay::session::Session;

#[derive(Component)]
struct SessionClockText;

/// Top-right session clock. Spawned on the first round and kept through
/// restarts; once the round is decided it simply stops updating, leaving the
/// final time on screen.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_clock)
            .add_systems(Update, update_clock.run_if(in_state(AppState::Playing)));
    }
}

fn spawn_clock(mut commands: Commands, existing: Query<(), With<SessionClockText>>) {
    if !existing.is_empty() {
        return;
    }
    commands.spawn((
        SessionClockText,
        Text::new(format_clock(0.0)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(12.0),
            ..default()
        },
    ));
}

fn update_clock(session: Res<Session>, mut clock_text: Query<&mut Text, With<SessionClockText>>) {
    if let Ok(mut text) = clock_text.single_mut() {
        text.0 = format_clock(session.clock.elapsed_secs());
    }
}

/// `m:ss:hh` with hundredths; minutes roll over at the hour like a classic
/// arcade readout.
pub fn format_clock(total_secs: f32) -> String {
    let total_ms = (total_secs.max(0.0) * 1000.0) as u64;
    let minutes = total_ms / 60_000 % 60;
    let seconds = total_ms / 1000 % 60;
    let hundredths = total_ms % 1000 / 10;
    format!("{minutes}:{seconds:02}:{hundredths:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reads_all_zeroes() {
        assert_eq!(format_clock(0.0), "0:00:00");
    }

    #[test]
    fn seconds_and_hundredths_are_zero_padded() {
        assert_eq!(format_clock(65.25), "1:05:25");
        assert_eq!(format_clock(9.01), "0:09:01");
    }

    #[test]
    fn sub_hundredth_remainder_truncates() {
        assert_eq!(format_clock(125.678), "2:05:67");
    }

    #[test]
    fn minutes_roll_over_at_the_hour() {
        assert_eq!(format_clock(3605.0), "0:05:00");
    }
}
