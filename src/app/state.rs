use bevy::prelude::*;

/// Top-level flow of the app.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Title card and control listing; waiting for a player to start.
    #[default]
    Menu,
    /// A round is live and the fixed-tick simulation advances.
    Playing,
    /// The round is decided; the field stays frozen behind the end banner
    /// until a restart is requested.
    GameOver,
}
