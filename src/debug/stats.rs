use bevy::prelude::*;

use crate::core::components::{Asteroid, Bullet, Ship};

#[derive(Resource, Default)]
pub struct DebugStats {
    /// Smoothed frames per second (exponential moving average).
    pub fps: f32,
    pub ships_alive: usize,
    pub asteroids: usize,
    pub bullets: usize,
}

pub fn collect_stats(
    time: Res<Time>,
    ships: Query<&Ship>,
    asteroids: Query<(), With<Asteroid>>,
    bullets: Query<(), With<Bullet>>,
    mut stats: ResMut<DebugStats>,
) {
    let dt = time.delta_secs();
    if dt > 0.0 {
        let instant = 1.0 / dt;
        stats.fps = if stats.fps == 0.0 {
            instant
        } else {
            stats.fps * 0.9 + instant * 0.1
        };
    }
    stats.ships_alive = ships.iter().filter(|ship| ship.alive).count();
    stats.asteroids = asteroids.iter().count();
    stats.bullets = bullets.iter().count();
}
