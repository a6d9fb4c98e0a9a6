use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::events::ShowNotification;
use crate::core::schedule::{CollisionSet, MotionSet, OutcomeSet, ShootSet};
use crate::gameplay::session::session_active;
use crate::gameplay::{combat, movement, outcome};

/// Fixed-rate core of the game: firing, motion, collisions, then round-end
/// detection, in that order on every logical tick while a round is live.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShowNotification>()
            .configure_sets(
                FixedUpdate,
                (ShootSet, MotionSet, CollisionSet, OutcomeSet)
                    .chain()
                    .run_if(session_active),
            )
            .add_systems(Startup, apply_tick_rate)
            .add_systems(
                FixedUpdate,
                (
                    combat::fire_bullets.in_set(ShootSet),
                    (
                        movement::drift_asteroids,
                        movement::steer_ships,
                        movement::advance_bullets,
                    )
                        .chain()
                        .in_set(MotionSet),
                    combat::resolve_collisions.in_set(CollisionSet),
                    outcome::detect_round_end.in_set(OutcomeSet),
                ),
            );
    }
}

fn apply_tick_rate(cfg: Res<GameConfig>, mut fixed: ResMut<Time<Fixed>>) {
    if cfg.simulation.tick_hz > 0.0 {
        fixed.set_timestep_hz(cfg.simulation.tick_hz);
    } else {
        warn!(
            hz = cfg.simulation.tick_hz,
            "simulation.tick_hz not positive; keeping default timestep"
        );
    }
}
