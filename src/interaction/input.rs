use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{PlayerSlot, ShipControls};
use crate::core::config::{GameConfig, ShipBindings};

/// Resolved per-seat keyboard map, parsed once from config before startup.
/// Bad key names fall back to the built-in binding for that action.
#[derive(Resource, Debug)]
pub struct KeyTable {
    pub one: ShipKeys,
    pub two: ShipKeys,
}

#[derive(Debug, Clone, Copy)]
pub struct ShipKeys {
    pub left: KeyCode,
    pub right: KeyCode,
    pub thrust: KeyCode,
    pub fire: KeyCode,
}

impl KeyTable {
    pub fn keys_for(&self, slot: PlayerSlot) -> &ShipKeys {
        match slot {
            PlayerSlot::One => &self.one,
            PlayerSlot::Two => &self.two,
        }
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self {
            one: ShipKeys {
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                thrust: KeyCode::KeyW,
                fire: KeyCode::Space,
            },
            two: ShipKeys {
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                thrust: KeyCode::ArrowUp,
                fire: KeyCode::Enter,
            },
        }
    }
}

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyTable>()
            .add_systems(PreStartup, load_key_table)
            .add_systems(
                Update,
                collect_ship_controls.run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnEnter(AppState::GameOver), release_ship_controls);
    }
}

fn load_key_table(cfg: Res<GameConfig>, mut table: ResMut<KeyTable>) {
    let defaults = KeyTable::default();
    table.one = resolve_bindings("controls.player_one", &cfg.controls.player_one, defaults.one);
    table.two = resolve_bindings("controls.player_two", &cfg.controls.player_two, defaults.two);
}

fn resolve_bindings(section: &str, bindings: &ShipBindings, fallback: ShipKeys) -> ShipKeys {
    let resolve = |action: &str, name: &str, fallback: KeyCode| match parse_key_name(name) {
        Ok(code) => code,
        Err(err) => {
            warn!(target: "input", "{section}.{action}: {err}; using {fallback:?}");
            fallback
        }
    };
    ShipKeys {
        left: resolve("left", &bindings.left, fallback.left),
        right: resolve("right", &bindings.right, fallback.right),
        thrust: resolve("thrust", &bindings.thrust, fallback.thrust),
        fire: resolve("fire", &bindings.fire, fallback.fire),
    }
}

/// Samples held keys into [`ShipControls`] every frame; the fixed-tick
/// systems read only those flags.
fn collect_ship_controls(
    keys: Res<ButtonInput<KeyCode>>,
    table: Res<KeyTable>,
    mut ships: Query<(&PlayerSlot, &mut ShipControls)>,
) {
    for (slot, mut controls) in &mut ships {
        let bound = table.keys_for(*slot);
        controls.left = keys.pressed(bound.left);
        controls.right = keys.pressed(bound.right);
        controls.thrust = keys.pressed(bound.thrust);
        controls.fire = keys.pressed(bound.fire);
    }
}

/// Once the round is decided the keyboard goes quiet: any still-held keys
/// are dropped rather than frozen in.
fn release_ship_controls(mut ships: Query<&mut ShipControls>) {
    for mut controls in &mut ships {
        *controls = ShipControls::default();
    }
}

pub fn parse_key_name(name: &str) -> Result<KeyCode, String> {
    use KeyCode::*;
    let code = match name {
        "A" | "KeyA" => KeyA,
        "B" | "KeyB" => KeyB,
        "C" | "KeyC" => KeyC,
        "D" | "KeyD" => KeyD,
        "E" | "KeyE" => KeyE,
        "F" | "KeyF" => KeyF,
        "G" | "KeyG" => KeyG,
        "H" | "KeyH" => KeyH,
        "I" | "KeyI" => KeyI,
        "J" | "KeyJ" => KeyJ,
        "K" | "KeyK" => KeyK,
        "L" | "KeyL" => KeyL,
        "M" | "KeyM" => KeyM,
        "N" | "KeyN" => KeyN,
        "O" | "KeyO" => KeyO,
        "P" | "KeyP" => KeyP,
        "Q" | "KeyQ" => KeyQ,
        "R" | "KeyR" => KeyR,
        "S" | "KeyS" => KeyS,
        "T" | "KeyT" => KeyT,
        "U" | "KeyU" => KeyU,
        "V" | "KeyV" => KeyV,
        "W" | "KeyW" => KeyW,
        "X" | "KeyX" => KeyX,
        "Y" | "KeyY" => KeyY,
        "Z" | "KeyZ" => KeyZ,
        "0" | "Digit0" => Digit0,
        "1" | "Digit1" => Digit1,
        "2" | "Digit2" => Digit2,
        "3" | "Digit3" => Digit3,
        "4" | "Digit4" => Digit4,
        "5" | "Digit5" => Digit5,
        "6" | "Digit6" => Digit6,
        "7" | "Digit7" => Digit7,
        "8" | "Digit8" => Digit8,
        "9" | "Digit9" => Digit9,
        "Left" | "ArrowLeft" => ArrowLeft,
        "Right" | "ArrowRight" => ArrowRight,
        "Up" | "ArrowUp" => ArrowUp,
        "Down" | "ArrowDown" => ArrowDown,
        "Space" => Space,
        "Enter" | "Return" => Enter,
        "Tab" => Tab,
        "Backspace" => Backspace,
        "ShiftLeft" => ShiftLeft,
        "ShiftRight" => ShiftRight,
        "ControlLeft" => ControlLeft,
        "ControlRight" => ControlRight,
        "AltLeft" => AltLeft,
        "AltRight" => AltRight,
        "Comma" => Comma,
        "Period" => Period,
        "Slash" => Slash,
        "Semicolon" => Semicolon,
        other => return Err(format!("unsupported key name '{other}' (extend parser)")),
    };
    Ok(code)
}

/// Short human label for a key, for the menu's control listing.
pub fn key_label(code: KeyCode) -> String {
    let name = format!("{code:?}");
    name.strip_prefix("Key")
        .or_else(|| name.strip_prefix("Digit"))
        .or_else(|| name.strip_prefix("Arrow"))
        .unwrap_or(&name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn default_binding_names_parse_to_default_table() {
        let cfg = GameConfig::default();
        let table = KeyTable::default();
        assert_eq!(
            parse_key_name(&cfg.controls.player_one.left).unwrap(),
            table.one.left
        );
        assert_eq!(
            parse_key_name(&cfg.controls.player_two.fire).unwrap(),
            table.two.fire
        );
    }

    #[test]
    fn aliases_and_canonical_names_agree() {
        assert_eq!(parse_key_name("A").unwrap(), parse_key_name("KeyA").unwrap());
        assert_eq!(
            parse_key_name("Left").unwrap(),
            parse_key_name("ArrowLeft").unwrap()
        );
        assert_eq!(parse_key_name("7").unwrap(), KeyCode::Digit7);
    }

    #[test]
    fn unknown_names_error_instead_of_guessing() {
        assert!(parse_key_name("Hyperspace").is_err());
    }

    #[test]
    fn labels_drop_keycode_prefixes() {
        assert_eq!(key_label(KeyCode::KeyW), "W");
        assert_eq!(key_label(KeyCode::ArrowUp), "Up");
        assert_eq!(key_label(KeyCode::Digit3), "3");
        assert_eq!(key_label(KeyCode::Space), "Space");
    }

    #[test]
    fn held_keys_raise_the_matching_flags() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(KeyTable::default());
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::Space);
        keys.press(KeyCode::ArrowUp);
        app.insert_resource(keys);

        let one = app
            .world_mut()
            .spawn((PlayerSlot::One, ShipControls::default()))
            .id();
        let two = app
            .world_mut()
            .spawn((PlayerSlot::Two, ShipControls::default()))
            .id();

        app.world_mut()
            .run_system_once(collect_ship_controls)
            .unwrap();

        let controls_one = app.world().get::<ShipControls>(one).unwrap();
        assert!(controls_one.left && controls_one.fire);
        assert!(!controls_one.right && !controls_one.thrust);
        let controls_two = app.world().get::<ShipControls>(two).unwrap();
        assert!(controls_two.thrust);
        assert!(!controls_two.fire);
    }

    #[test]
    fn bad_config_names_fall_back_per_action() {
        let mut bindings = ShipBindings::default();
        bindings.thrust = "WarpDrive".into();
        let resolved = resolve_bindings("controls.player_one", &bindings, KeyTable::default().one);
        assert_eq!(resolved.thrust, KeyCode::KeyW);
        assert_eq!(resolved.left, KeyCode::KeyA);
    }
}
