//! Fixed-tick ordering for the simulation.
//!
//! One logical tick runs shooting, then motion, then collision resolution,
//! then end-of-round detection. Deferred commands flush between sets, so the
//! outcome pass already sees this tick's despawns and splits.

use bevy::prelude::*;

/// Cooldown-gated bullet spawning; also advances the session clock.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShootSet;

/// Integration and screen wrap for asteroids, ships, and bullets.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotionSet;

/// Circle tests plus their consequences: splits, despawns, ship kills.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollisionSet;

/// Terminal-condition checks; flips the app into the game-over state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutcomeSet;
