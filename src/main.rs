use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use std::path::{Path, PathBuf};

use astroduel::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-seat asteroid field shootout", long_about = None)]
struct Args {
    /// Path to the RON config; defaults fill anything the file leaves out.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
}

/// A missing file just means defaults; a file that exists but will not parse
/// is a hard error, since someone clearly meant it to be read.
fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file missing; using built-in defaults");
        return Ok(GameConfig::default());
    }
    GameConfig::load_from_file(path)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = load_config(&args.config)?;
    for warning in cfg.validate() {
        warn!("CONFIG WARNING: {warning}");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
