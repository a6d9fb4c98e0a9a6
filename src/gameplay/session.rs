use bevy::prelude::*;
use bevy::time::Stopwatch;

use crate::app::state::AppState;
use crate::core::components::SessionTag;
use crate::core::events::RestartRequested;
use crate::core::schedule::ShootSet;
use crate::gameplay::spawning;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both ships destroyed. Takes precedence when the last asteroid and the
    /// last ship die on the same tick.
    MutualElimination,
    /// Every asteroid destroyed with at least one ship surviving.
    FieldCleared,
}

/// Per-round bookkeeping. Replaced wholesale on restart; the matching entity
/// state lives on [`SessionTag`] entities and is despawned alongside it.
#[derive(Resource, Debug, Default)]
pub struct Session {
    pub clock: Stopwatch,
    /// `Some` freezes the round: the decision is made exactly once and
    /// nothing advances afterwards.
    pub outcome: Option<Outcome>,
}

/// Gate shared by every simulation set: a round must exist and still be
/// undecided. Covers the menu (no session yet) and the game-over freeze.
pub fn session_active(session: Option<Res<Session>>) -> bool {
    session.map(|s| s.outcome.is_none()).unwrap_or(false)
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RestartRequested>()
            .add_systems(
                OnEnter(AppState::Playing),
                (
                    reset_session,
                    spawning::spawn_ships,
                    spawning::spawn_asteroid_field,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, tick_session_clock.in_set(ShootSet))
            .add_systems(
                Update,
                handle_restart.run_if(in_state(AppState::GameOver)),
            );
    }
}

fn reset_session(mut commands: Commands, leftovers: Query<Entity, With<SessionTag>>) {
    for entity in &leftovers {
        commands.entity(entity).despawn();
    }
    commands.insert_resource(Session::default());
    info!(target: "session", "round started");
}

fn tick_session_clock(time: Res<Time>, mut session: ResMut<Session>) {
    session.clock.tick(time.delta());
}

fn handle_restart(
    mut requests: EventReader<RestartRequested>,
    mut next: ResMut<NextState<AppState>>,
) {
    if !requests.is_empty() {
        requests.clear();
        info!(target: "session", "restart requested");
        next.set(AppState::Playing);
    }
}
