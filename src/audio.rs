use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

/// Background track, started once on the first round and looping for the app
/// lifetime. Missing or disabled audio must never take the game down: log it
/// and play on in silence.
pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), start_music);
    }
}

fn start_music(
    mut started: Local<bool>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    asset_server: Res<AssetServer>,
) {
    if *started {
        return;
    }
    *started = true;
    if !cfg.audio.enabled {
        info!(target: "audio", "audio disabled in config");
        return;
    }
    let on_disk = std::path::Path::new("assets").join(&cfg.audio.music);
    if !on_disk.exists() {
        warn!(target: "audio", path = %on_disk.display(), "music file missing; continuing without sound");
        return;
    }
    commands.spawn((
        AudioPlayer::new(asset_server.load(cfg.audio.music.clone())),
        PlaybackSettings::LOOP,
    ));
    info!(target: "audio", track = cfg.audio.music.as_str(), "background music started");
}
