use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{Asteroid, Ship};
use crate::core::events::ShowNotification;
use crate::gameplay::session::{Outcome, Session};

/// Runs after collision commands have flushed, so this tick's despawns and
/// splits are already visible. Mutual elimination is checked first and wins
/// ties when the last ship and the last asteroid die together.
pub fn detect_round_end(
    mut session: ResMut<Session>,
    ships: Query<&Ship>,
    asteroids: Query<(), With<Asteroid>>,
    mut banners: EventWriter<ShowNotification>,
    mut next: ResMut<NextState<AppState>>,
) {
    let crews_lost = !ships.is_empty() && ships.iter().all(|ship| !ship.alive);
    let outcome = if crews_lost {
        Some(Outcome::MutualElimination)
    } else if asteroids.is_empty() {
        Some(Outcome::FieldCleared)
    } else {
        None
    };
    let Some(outcome) = outcome else {
        return;
    };

    session.outcome = Some(outcome);
    let total = session.clock.elapsed_secs();
    let message = match outcome {
        Outcome::MutualElimination => format!("Game over! Total time: {total:.2} seconds."),
        Outcome::FieldCleared => {
            format!("All asteroids destroyed! Total time: {total:.2} seconds.")
        }
    };
    info!(target: "session", ?outcome, total, "round over");
    banners.write(ShowNotification::with_restart(message));
    next.set(AppState::GameOver);
}
