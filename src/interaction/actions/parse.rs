//! Bindings file parsing (TOML). Unknown actions or keys are collected as
//! errors, not panics; the caller decides whether to fall back.
use bevy::prelude::*;
use std::collections::HashMap;

use super::types::{ActionBindings, PlayerAction};

#[derive(Debug, Default)]
pub struct ParsedBindings {
    pub bindings: ActionBindings,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    bindings: Option<HashMap<String, Vec<String>>>,
}

pub fn parse_bindings_toml(raw: &str) -> ParsedBindings {
    let mut result = ParsedBindings::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("top-level parse: {e}"));
            return result;
        }
    };
    let Some(map) = root.bindings else {
        result.errors.push("no [bindings] table".into());
        return result;
    };
    for (action_name, key_names) in map {
        let Some(action) = PlayerAction::from_name(&action_name) else {
            result
                .errors
                .push(format!("binding references unknown action '{action_name}'"));
            continue;
        };
        for key_name in key_names {
            match parse_keycode(&key_name) {
                Ok(key) => result.bindings.bind(action, key),
                Err(e) => result
                    .errors
                    .push(format!("[binding {action_name} '{key_name}'] {e}")),
            }
        }
    }
    for action in PlayerAction::ALL {
        if result.bindings.keys_for(action).is_empty() {
            result
                .errors
                .push(format!("action {action:?} has no bindings"));
        }
    }
    result
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Space" => KeyCode::Space,
        "W" | "KeyW" => KeyCode::KeyW,
        "A" | "KeyA" => KeyCode::KeyA,
        "S" | "KeyS" => KeyCode::KeyS,
        "D" | "KeyD" => KeyCode::KeyD,
        "R" | "KeyR" => KeyCode::KeyR,
        "Enter" => KeyCode::Enter,
        other => return Err(format!("unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::actions::plugin::DEFAULT_BINDINGS_TOML;

    #[test]
    fn default_bindings_parse_cleanly() {
        let parsed = parse_bindings_toml(DEFAULT_BINDINGS_TOML);
        assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
        assert_eq!(
            parsed.bindings.keys_for(PlayerAction::Forward),
            &[KeyCode::ArrowUp, KeyCode::KeyW]
        );
        assert_eq!(
            parsed.bindings.keys_for(PlayerAction::Restart),
            &[KeyCode::KeyR]
        );
    }

    #[test]
    fn unknown_action_collected_as_error() {
        let parsed = parse_bindings_toml("[bindings]\nFly = [\"Space\"]\n");
        assert!(parsed
            .errors
            .iter()
            .any(|e| e.contains("unknown action 'Fly'")));
    }

    #[test]
    fn unknown_key_collected_as_error() {
        let parsed = parse_bindings_toml("[bindings]\nJump = [\"Key:Nope\"]\n");
        assert!(parsed.errors.iter().any(|e| e.contains("unsupported KeyCode")));
    }
}
