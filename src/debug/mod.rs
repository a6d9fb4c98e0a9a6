//! Debug overlay: feature gated entity counters and frame stats.
//! Built only when compiled with the `debug` feature (on by default).

#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<stats::DebugStats>()
            .init_resource::<overlay::OverlayState>()
            .add_systems(Startup, overlay::spawn_overlay)
            .add_systems(
                Update,
                (
                    overlay::toggle_overlay,
                    stats::collect_stats,
                    overlay::update_overlay,
                )
                    .chain(),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
