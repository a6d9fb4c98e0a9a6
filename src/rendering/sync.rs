use bevy::prelude::*;

use crate::core::components::{FieldPos, Heading, Ship};
use crate::core::config::GameConfig;

/// Field space has its origin at the top-left with y growing downward; Bevy's
/// 2D world is centered with y up. Recenter both axes and mirror y.
pub fn field_to_world(p: Vec2, field: Vec2) -> Vec2 {
    Vec2::new(p.x - field.x / 2.0, field.y / 2.0 - p.y)
}

/// Mirrors the last tick's simulation state onto transforms. Runs at frame
/// rate; z is owned by the attach systems and left untouched here.
pub fn sync_transforms(
    cfg: Res<GameConfig>,
    mut movers: Query<(&FieldPos, Option<&Heading>, &mut Transform)>,
) {
    let field = cfg.field_size();
    for (pos, heading, mut transform) in &mut movers {
        let world = field_to_world(pos.0, field);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        if let Some(heading) = heading {
            // The mirrored y axis flips the sense of rotation too.
            transform.rotation = Quat::from_rotation_z(-heading.0);
        }
    }
}

/// Dead ships vanish instead of despawning; the entity stays for the round
/// tally.
pub fn sync_ship_visibility(mut ships: Query<(&Ship, &mut Visibility), Changed<Ship>>) {
    for (ship, mut visibility) in &mut ships {
        let target = if ship.alive {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(target);
    }
}
