use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{
    Asteroid, Bullet, Drift, FieldPos, Heading, PlayerSlot, Radius, SessionTag, Ship,
    ShipControls,
};
use crate::core::config::{AsteroidConfig, GameConfig, SpawnRange};

pub fn spawn_ships(mut commands: Commands, cfg: Res<GameConfig>) {
    for slot in [PlayerSlot::One, PlayerSlot::Two] {
        commands.spawn((
            Ship::default(),
            slot,
            ShipControls::default(),
            FieldPos(start_position(slot, &cfg)),
            Heading(0.0),
            Radius(cfg.ships.radius),
            SessionTag,
        ));
    }
}

/// Both ships start level with the horizontal midline, facing +x, mirrored
/// around the field center.
pub fn start_position(slot: PlayerSlot, cfg: &GameConfig) -> Vec2 {
    let y = cfg.window.height / 2.0;
    match slot {
        PlayerSlot::One => Vec2::new(cfg.ships.edge_margin, y),
        PlayerSlot::Two => Vec2::new(cfg.window.width - cfg.ships.edge_margin, y),
    }
}

/// Uniformly scatters the configured number of asteroids over the field.
/// Spawn positions are not kept clear of the ships; an unlucky roll can end
/// a round on its first tick, same as drifting into one later.
pub fn spawn_asteroid_field(mut commands: Commands, cfg: Res<GameConfig>) {
    let mut rng = rand::thread_rng();
    for _ in 0..cfg.asteroids.count {
        let pos = Vec2::new(
            sample(&mut rng, &SpawnRange { min: 0.0, max: cfg.window.width }),
            sample(&mut rng, &SpawnRange { min: 0.0, max: cfg.window.height }),
        );
        let radius = sample(&mut rng, &cfg.asteroids.radius_range);
        spawn_asteroid(&mut commands, pos, radius, &cfg.asteroids, &mut rng);
    }
    info!(target: "session", count = cfg.asteroids.count, "asteroid field seeded");
}

/// Split fragments come through here too: drift is re-rolled, so halves
/// scatter instead of inheriting the parent's course.
pub fn spawn_asteroid(
    commands: &mut Commands,
    pos: Vec2,
    radius: f32,
    cfg: &AsteroidConfig,
    rng: &mut impl Rng,
) {
    let drift = Vec2::new(sample(rng, &cfg.drift_range), sample(rng, &cfg.drift_range));
    commands.spawn((
        Asteroid,
        FieldPos(pos),
        Radius(radius),
        Drift(drift),
        SessionTag,
    ));
}

/// Bullets leave the muzzle at ship center, inheriting the heading frozen at
/// fire time.
pub fn spawn_bullet(commands: &mut Commands, pos: Vec2, heading: f32, cfg: &GameConfig) {
    commands.spawn((
        Bullet,
        FieldPos(pos),
        Heading(heading),
        Radius(cfg.bullets.radius),
        SessionTag,
    ));
}

fn sample(rng: &mut impl Rng, range: &SpawnRange<f32>) -> f32 {
    if range.min < range.max {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn app_with_config(cfg: GameConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(cfg);
        app
    }

    #[test]
    fn ships_spawn_mirrored_and_level() {
        let mut app = app_with_config(GameConfig::default());
        app.world_mut().run_system_once(spawn_ships).unwrap();

        let mut positions: Vec<(PlayerSlot, Vec2)> = Vec::new();
        let mut ships = app.world_mut().query::<(&PlayerSlot, &FieldPos, &Ship, &Heading)>();
        for (slot, pos, ship, heading) in ships.iter(app.world()) {
            assert!(ship.alive);
            assert_eq!(ship.last_shot, None);
            assert_eq!(heading.0, 0.0);
            positions.push((*slot, pos.0));
        }
        positions.sort_by_key(|(slot, _)| *slot == PlayerSlot::Two);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].1, Vec2::new(150.0, 300.0));
        assert_eq!(positions[1].1, Vec2::new(650.0, 300.0));
    }

    #[test]
    fn field_spawns_configured_count_within_bounds() {
        let cfg = GameConfig::default();
        let expected = cfg.asteroids.count;
        let radius_range = cfg.asteroids.radius_range.clone();
        let field = cfg.field_size();
        let mut app = app_with_config(cfg);
        app.world_mut().run_system_once(spawn_asteroid_field).unwrap();

        let mut asteroids = app
            .world_mut()
            .query_filtered::<(&FieldPos, &Radius), With<Asteroid>>();
        let mut seen = 0;
        for (pos, radius) in asteroids.iter(app.world()) {
            seen += 1;
            assert!(pos.0.x >= 0.0 && pos.0.x < field.x);
            assert!(pos.0.y >= 0.0 && pos.0.y < field.y);
            assert!(radius.0 >= radius_range.min && radius.0 < radius_range.max);
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn degenerate_range_collapses_to_min() {
        let mut rng = rand::thread_rng();
        let range = SpawnRange { min: 7.5, max: 7.5 };
        assert_eq!(sample(&mut rng, &range), 7.5);
    }
}
