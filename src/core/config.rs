use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Astroduel".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Logical ticks per second. Rendering stays frame-rate driven.
    pub tick_hz: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_hz: 60.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShipConfig {
    pub radius: f32,
    /// Thrust speed in field units per second.
    pub speed: f32,
    /// Turn rate in radians per second.
    pub turn_rate: f32,
    /// Minimum seconds between shots; the gap must strictly exceed this.
    pub fire_cooldown: f32,
    /// Horizontal distance from each side edge to that side's start position.
    pub edge_margin: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            speed: 180.0,
            turn_rate: 3.0,
            fire_cooldown: 0.5,
            edge_margin: 150.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AsteroidConfig {
    pub count: usize,
    pub radius_range: SpawnRange<f32>,
    /// Per-axis drift speed range in field units per second.
    pub drift_range: SpawnRange<f32>,
    /// Shot asteroids larger than this break into two half-radius pieces.
    pub split_threshold: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius_range: SpawnRange {
                min: 10.0,
                max: 30.0,
            },
            drift_range: SpawnRange {
                min: -60.0,
                max: 60.0,
            },
            split_threshold: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    pub radius: f32,
    pub speed: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            speed: 300.0,
        }
    }
}

/// Key names use the winit `KeyCode` spelling ("KeyA", "ArrowLeft", "Space");
/// short aliases like "A" or "Left" are accepted too.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShipBindings {
    pub left: String,
    pub right: String,
    pub thrust: String,
    pub fire: String,
}

impl Default for ShipBindings {
    fn default() -> Self {
        Self {
            left: "KeyA".into(),
            right: "KeyD".into(),
            thrust: "KeyW".into(),
            fire: "Space".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub player_one: ShipBindings,
    pub player_two: ShipBindings,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            player_one: ShipBindings::default(),
            player_two: ShipBindings {
                left: "ArrowLeft".into(),
                right: "ArrowRight".into(),
                thrust: "ArrowUp".into(),
                fire: "Enter".into(),
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Asset-relative path to the looping background track.
    pub music: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            music: "audio/background.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds a buttonless notification banner stays on screen.
    pub banner_seconds: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { banner_seconds: 3.0 }
    }
}

#[derive(Debug, Default, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub ships: ShipConfig,
    pub asteroids: AsteroidConfig,
    pub bullets: BulletConfig,
    pub controls: ControlsConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// The playfield matches the window's logical size.
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.window.width, self.window.height)
    }

    /// Non-fatal sanity checks; callers log these as warnings and carry on.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.simulation.tick_hz <= 0.0 {
            w.push(format!(
                "simulation.tick_hz {} not positive; default timestep kept",
                self.simulation.tick_hz
            ));
        } else if self.simulation.tick_hz > 1000.0 {
            w.push(format!(
                "simulation.tick_hz {} very high; frames will run many catch-up ticks",
                self.simulation.tick_hz
            ));
        }
        if self.ships.radius <= 0.0 {
            w.push("ships.radius must be > 0".into());
        }
        if self.ships.speed < 0.0 {
            w.push("ships.speed negative -> thrust flies backwards".into());
        }
        if self.ships.turn_rate < 0.0 {
            w.push("ships.turn_rate negative -> steering inverted".into());
        }
        if self.ships.fire_cooldown < 0.0 {
            w.push("ships.fire_cooldown negative -> treated as no throttle".into());
        }
        if self.ships.edge_margin * 2.0 >= self.window.width {
            w.push(format!(
                "ships.edge_margin {} places both ships past the field midline",
                self.ships.edge_margin
            ));
        }
        if self.asteroids.count == 0 {
            w.push("asteroids.count is 0; the round ends cleared on its first tick".into());
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
        }
        check_range_f32(&mut w, "asteroids.radius_range", &self.asteroids.radius_range);
        if self.asteroids.radius_range.min <= 0.0 {
            w.push("asteroids.radius_range.min must be > 0".into());
        }
        check_range_f32(&mut w, "asteroids.drift_range", &self.asteroids.drift_range);
        if self.asteroids.split_threshold <= 0.0 {
            w.push(format!(
                "asteroids.split_threshold {} keeps every fragment splitting; expect runaway counts",
                self.asteroids.split_threshold
            ));
        }
        if self.bullets.radius <= 0.0 {
            w.push("bullets.radius must be > 0".into());
        }
        if self.bullets.speed <= 0.0 {
            w.push("bullets.speed must be > 0".into());
        }
        let bindings = [
            ("controls.player_one.left", &self.controls.player_one.left),
            ("controls.player_one.right", &self.controls.player_one.right),
            ("controls.player_one.thrust", &self.controls.player_one.thrust),
            ("controls.player_one.fire", &self.controls.player_one.fire),
            ("controls.player_two.left", &self.controls.player_two.left),
            ("controls.player_two.right", &self.controls.player_two.right),
            ("controls.player_two.thrust", &self.controls.player_two.thrust),
            ("controls.player_two.fire", &self.controls.player_two.fire),
        ];
        for (i, (label_a, key_a)) in bindings.iter().enumerate() {
            for (label_b, key_b) in bindings.iter().skip(i + 1) {
                if key_a == key_b {
                    w.push(format!("{label_a} and {label_b} share key '{key_a}'"));
                }
            }
        }
        if self.audio.enabled && self.audio.music.is_empty() {
            w.push("audio.enabled with empty audio.music path".into());
        }
        if self.ui.banner_seconds <= 0.0 {
            w.push(format!(
                "ui.banner_seconds {} dismisses banners immediately",
                self.ui.banner_seconds
            ));
        }
        w
    }
}
