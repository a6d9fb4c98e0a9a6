use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct ExitTimer(Timer);

/// Unattended-run support: closes the app after `window.autoClose` seconds.
/// Zero (the default) disarms it.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_exit_timer)
            .add_systems(Update, tick_exit_timer);
    }
}

fn arm_exit_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "auto close armed");
        commands.insert_resource(ExitTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_exit_timer(
    time: Res<Time>,
    mut timer: Option<ResMut<ExitTimer>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(timer) = timer.as_mut() {
        timer.tick(time.delta());
        if timer.finished() {
            info!("auto close elapsed; exiting");
            exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn exits_after_configured_seconds() {
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = 0.2;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(cfg);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            250,
        )));
        app.add_plugins(AutoClosePlugin);

        app.update();
        app.update();

        let exits = app.world().resource::<Events<AppExit>>();
        assert!(!exits.is_empty());
    }

    #[test]
    fn zero_setting_never_arms_the_timer() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins(AutoClosePlugin);

        app.update();
        app.update();

        assert!(app.world().get_resource::<ExitTimer>().is_none());
        assert!(app.world().resource::<Events<AppExit>>().is_empty());
    }
}
