use bevy::prelude::*;

use crate::core::components::{Asteroid, Bullet, Drift, FieldPos, Heading, Ship, ShipControls};
use crate::core::config::GameConfig;
use crate::core::geometry::{heading_vector, wrap_point};

pub fn drift_asteroids(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut asteroids: Query<(&Drift, &mut FieldPos), With<Asteroid>>,
) {
    let dt = time.delta_secs();
    let field = cfg.field_size();
    for (drift, mut pos) in &mut asteroids {
        pos.0 = wrap_point(pos.0 + drift.0 * dt, field);
    }
}

/// Turn and thrust are applied independently, so opposing turn keys cancel
/// and a ship can rotate in place. Dead ships stop responding entirely.
pub fn steer_ships(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut ships: Query<(&Ship, &ShipControls, &mut Heading, &mut FieldPos)>,
) {
    let dt = time.delta_secs();
    let field = cfg.field_size();
    for (ship, controls, mut heading, mut pos) in &mut ships {
        if !ship.alive {
            continue;
        }
        if controls.left {
            heading.0 -= cfg.ships.turn_rate * dt;
        }
        if controls.right {
            heading.0 += cfg.ships.turn_rate * dt;
        }
        if controls.thrust {
            pos.0 += heading_vector(heading.0) * cfg.ships.speed * dt;
        }
        pos.0 = wrap_point(pos.0, field);
    }
}

/// Bullets never wrap; leaving the field is the end of them.
pub fn advance_bullets(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
    mut bullets: Query<(Entity, &Heading, &mut FieldPos), With<Bullet>>,
) {
    let dt = time.delta_secs();
    let field = cfg.field_size();
    for (entity, heading, mut pos) in &mut bullets {
        pos.0 += heading_vector(heading.0) * cfg.bullets.speed * dt;
        if pos.0.x < 0.0 || pos.0.x > field.x || pos.0.y < 0.0 || pos.0.y > field.y {
            commands.entity(entity).despawn();
        }
    }
}
