use bevy::prelude::*;

/// Position in field space: origin at the top-left corner, x growing right,
/// y growing downward. The simulation never leaves this space; rendering maps
/// it onto Bevy's centered, y-up world.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct FieldPos(pub Vec2);

/// Facing angle in radians. Zero points along +x; positive turns toward +y,
/// which reads as clockwise on screen.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct Heading(pub f32);

/// Constant velocity in field units per second. Only asteroids carry one;
/// ships move along their heading while thrusting and bullets always do.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct Drift(pub Vec2);

/// Collision radius in field units.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct Radius(pub f32);

#[derive(Component, Debug)]
pub struct Asteroid;

#[derive(Component, Debug)]
pub struct Bullet;

/// Per-ship combat state. A dead ship keeps its entity so the round can
/// tally crews; it just stops steering, firing, and colliding.
#[derive(Component, Debug)]
pub struct Ship {
    pub alive: bool,
    /// Fixed-clock timestamp of the last shot. `None` means the ship has not
    /// fired yet, so its first shot is never throttled.
    pub last_shot: Option<f32>,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            alive: true,
            last_shot: None,
        }
    }
}

/// Which seat a ship belongs to; selects its key bindings and start corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

/// Intent flags sampled from the keyboard once per frame. The fixed-tick
/// systems only ever read these, never the keyboard itself.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ShipControls {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Everything spawned for one round carries this; restart despawns the lot
/// and rebuilds from config.
#[derive(Component)]
pub struct SessionTag;
