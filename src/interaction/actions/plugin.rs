use bevy::prelude::*;

use super::parse::parse_bindings_toml;
use super::systems::collect_action_input;
use super::types::{ActionBindings, ActionState};

/// Shipped bindings; a user file at `assets/config/input.toml` (or
/// `INPUT_CONFIG_PATH`) overrides it wholesale when it parses cleanly.
pub const DEFAULT_BINDINGS_TOML: &str = "\
[bindings]
Forward = [\"ArrowUp\", \"KeyW\"]
Backward = [\"ArrowDown\", \"KeyS\"]
Leftward = [\"ArrowLeft\", \"KeyA\"]
Rightward = [\"ArrowRight\", \"KeyD\"]
Jump = [\"Space\"]
Restart = [\"KeyR\"]
";

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ActionUpdateSet;

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionState>()
            .init_resource::<ActionBindings>()
            .configure_sets(PreUpdate, ActionUpdateSet)
            .add_systems(PreStartup, load_initial_bindings)
            .add_systems(PreUpdate, collect_action_input.in_set(ActionUpdateSet));
    }
}

fn load_initial_bindings(mut commands: Commands) {
    let path =
        std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into());
    #[cfg(target_arch = "wasm32")]
    let raw: String = DEFAULT_BINDINGS_TOML.to_string();
    #[cfg(not(target_arch = "wasm32"))]
    let raw: String = std::fs::read_to_string(&path).unwrap_or_default();

    let mut parsed = parse_bindings_toml(&raw);
    if !parsed.errors.is_empty() {
        for e in &parsed.errors {
            warn!(target: "input", "bindings '{path}': {e}");
        }
        parsed = parse_bindings_toml(DEFAULT_BINDINGS_TOML);
        info!(target: "input", "using built-in default bindings");
    }
    commands.insert_resource(parsed.bindings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::actions::types::PlayerAction;

    #[test]
    fn falls_back_to_defaults_without_file() {
        std::env::set_var("INPUT_CONFIG_PATH", "/nonexistent/input.toml");
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ActionsPlugin);
        app.update();

        let bindings = app.world().resource::<ActionBindings>();
        assert_eq!(bindings.keys_for(PlayerAction::Jump), &[KeyCode::Space]);
        std::env::remove_var("INPUT_CONFIG_PATH");
    }
}
