pub mod combat;
pub mod movement;
pub mod outcome;
pub mod session;
pub mod simulation;
pub mod spawning;
