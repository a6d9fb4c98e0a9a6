use bevy::prelude::*;

use crate::app::auto_close::AutoClosePlugin;
use crate::app::state::AppState;
use crate::audio::MusicPlugin;
use crate::debug::DebugPlugin;
use crate::gameplay::session::SessionPlugin;
use crate::gameplay::simulation::SimulationPlugin;
use crate::interaction::input::ControlsPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::visuals::VisualsPlugin;
use crate::ui::hud::HudPlugin;
use crate::ui::menu::MenuPlugin;
use crate::ui::notifications::NotificationsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().add_plugins((
            CameraPlugin,
            VisualsPlugin,
            ControlsPlugin,
            SessionPlugin,
            SimulationPlugin,
            MenuPlugin,
            HudPlugin,
            NotificationsPlugin,
            MusicPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ));
    }
}
