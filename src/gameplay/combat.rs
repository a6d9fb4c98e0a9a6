use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

use crate::core::components::{Asteroid, Bullet, FieldPos, Heading, Radius, Ship, ShipControls};
use crate::core::config::GameConfig;
use crate::core::geometry::circles_overlap;
use crate::gameplay::spawning;

/// A held fire key re-triggers as soon as the cooldown allows. The gap test
/// is strict, so a shot exactly at the cooldown boundary stays blocked.
pub fn fire_bullets(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
    mut ships: Query<(&mut Ship, &ShipControls, &FieldPos, &Heading)>,
) {
    let now = time.elapsed_secs();
    for (mut ship, controls, pos, heading) in &mut ships {
        if !ship.alive || !controls.fire {
            continue;
        }
        let ready = ship
            .last_shot
            .map_or(true, |last| now - last > cfg.ships.fire_cooldown);
        if ready {
            spawning::spawn_bullet(&mut commands, pos.0, heading.0, &cfg);
            ship.last_shot = Some(now);
        }
    }
}

/// One pass over the asteroid list per tick.
///
/// Each asteroid claims at most one live bullet; a bullet already spent this
/// tick is skipped, so one shot never clears two rocks. Ship checks run for
/// every asteroid regardless of whether a bullet just destroyed it, which
/// keeps ramming a freshly shattered rock fatal on that same tick.
pub fn resolve_collisions(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    asteroids: Query<(Entity, &FieldPos, &Radius), With<Asteroid>>,
    bullets: Query<(Entity, &FieldPos, &Radius), With<Bullet>>,
    mut ships: Query<(&mut Ship, &FieldPos, &Radius)>,
) {
    let mut rng = rand::thread_rng();
    let mut spent: HashSet<Entity> = HashSet::new();
    for (asteroid, a_pos, a_radius) in &asteroids {
        let hit = bullets.iter().find(|(bullet, b_pos, b_radius)| {
            !spent.contains(bullet) && circles_overlap(a_pos.0, a_radius.0, b_pos.0, b_radius.0)
        });
        if let Some((bullet, ..)) = hit {
            spent.insert(bullet);
            commands.entity(bullet).despawn();
            commands.entity(asteroid).despawn();
            if a_radius.0 > cfg.asteroids.split_threshold {
                for _ in 0..2 {
                    spawning::spawn_asteroid(
                        &mut commands,
                        a_pos.0,
                        a_radius.0 / 2.0,
                        &cfg.asteroids,
                        &mut rng,
                    );
                }
            }
        }
        for (mut ship, s_pos, s_radius) in &mut ships {
            if ship.alive && circles_overlap(a_pos.0, a_radius.0, s_pos.0, s_radius.0) {
                ship.alive = false;
                info!(target: "combat", "ship destroyed by asteroid");
            }
        }
    }
}
