use bevy::prelude::*;

pub const BACKDROP: Color = Color::BLACK;
pub const SHIP_COLOR: Color = Color::WHITE;
pub const BULLET_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const ASTEROID_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

// Draw order, back to front: ships under bullets under asteroids. UI layers
// above everything on its own pass.
pub const SHIP_Z: f32 = 10.0;
pub const BULLET_Z: f32 = 20.0;
pub const ASTEROID_Z: f32 = 30.0;
