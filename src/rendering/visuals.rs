use bevy::prelude::*;

use crate::core::components::{Asteroid, Bullet, FieldPos, Radius, Ship};
use crate::core::config::GameConfig;
use crate::rendering::palette::{
    ASTEROID_COLOR, ASTEROID_Z, BACKDROP, BULLET_COLOR, BULLET_Z, SHIP_COLOR, SHIP_Z,
};
use crate::rendering::sync::{field_to_world, sync_ship_visibility, sync_transforms};

/// Handles shared across session respawns. Asteroid meshes are per-entity
/// since every rock rolls its own radius.
#[derive(Resource)]
struct SharedVisuals {
    ship_mesh: Handle<Mesh>,
    bullet_mesh: Handle<Mesh>,
    ship_material: Handle<ColorMaterial>,
    bullet_material: Handle<ColorMaterial>,
    asteroid_material: Handle<ColorMaterial>,
}

/// Gives every freshly spawned simulation entity its mesh, material, and
/// initial transform. Logic entities carry no visuals of their own, which is
/// what keeps the simulation runnable headless.
pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKDROP))
            .add_systems(Startup, setup_shared_visuals)
            .add_systems(
                Update,
                (
                    attach_ship_visuals,
                    attach_asteroid_visuals,
                    attach_bullet_visuals,
                    sync_transforms,
                    sync_ship_visibility,
                ),
            );
    }
}

fn setup_shared_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let r = cfg.ships.radius;
    // Nose on +x so rotating by the heading points the ship where it flies.
    let ship_mesh = meshes.add(Mesh::from(Triangle2d::new(
        Vec2::new(r, 0.0),
        Vec2::new(-r / 2.0, r / 2.0),
        Vec2::new(-r / 2.0, -r / 2.0),
    )));
    let bullet_mesh = meshes.add(Mesh::from(Circle {
        radius: cfg.bullets.radius,
    }));
    commands.insert_resource(SharedVisuals {
        ship_mesh,
        bullet_mesh,
        ship_material: materials.add(ColorMaterial::from(SHIP_COLOR)),
        bullet_material: materials.add(ColorMaterial::from(BULLET_COLOR)),
        asteroid_material: materials.add(ColorMaterial::from(ASTEROID_COLOR)),
    });
}

fn attach_ship_visuals(
    mut commands: Commands,
    visuals: Res<SharedVisuals>,
    cfg: Res<GameConfig>,
    fresh: Query<(Entity, &FieldPos), Added<Ship>>,
) {
    let field = cfg.field_size();
    for (entity, pos) in &fresh {
        let world = field_to_world(pos.0, field);
        commands.entity(entity).insert((
            Mesh2d::from(visuals.ship_mesh.clone()),
            MeshMaterial2d(visuals.ship_material.clone()),
            Transform::from_xyz(world.x, world.y, SHIP_Z),
            Visibility::Visible,
        ));
    }
}

fn attach_asteroid_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    visuals: Res<SharedVisuals>,
    cfg: Res<GameConfig>,
    fresh: Query<(Entity, &FieldPos, &Radius), Added<Asteroid>>,
) {
    let field = cfg.field_size();
    for (entity, pos, radius) in &fresh {
        let world = field_to_world(pos.0, field);
        commands.entity(entity).insert((
            Mesh2d::from(meshes.add(Mesh::from(Circle { radius: radius.0 }))),
            MeshMaterial2d(visuals.asteroid_material.clone()),
            Transform::from_xyz(world.x, world.y, ASTEROID_Z),
            Visibility::Visible,
        ));
    }
}

fn attach_bullet_visuals(
    mut commands: Commands,
    visuals: Res<SharedVisuals>,
    cfg: Res<GameConfig>,
    fresh: Query<(Entity, &FieldPos), Added<Bullet>>,
) {
    let field = cfg.field_size();
    for (entity, pos) in &fresh {
        let world = field_to_world(pos.0, field);
        commands.entity(entity).insert((
            Mesh2d::from(visuals.bullet_mesh.clone()),
            MeshMaterial2d(visuals.bullet_material.clone()),
            Transform::from_xyz(world.x, world.y, BULLET_Z),
            Visibility::Visible,
        ));
    }
}
