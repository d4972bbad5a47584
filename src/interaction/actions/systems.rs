//! Per-frame action state collection.
use bevy::prelude::*;

use super::types::{ActionBindings, ActionState, PlayerAction};

/// Resolve raw keyboard state into named action flags. The keyboard resource
/// is optional so MinimalPlugins tests can drive `ActionState` directly.
pub fn collect_action_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Option<Res<ActionBindings>>,
    mut actions: ResMut<ActionState>,
) {
    let (Some(keyboard), Some(bindings)) = (keyboard, bindings) else {
        return;
    };
    for action in PlayerAction::ALL {
        let held = bindings
            .keys_for(action)
            .iter()
            .any(|&key| keyboard.pressed(key));
        actions.apply(action, held);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::actions::plugin::ActionsPlugin;

    #[test]
    fn keyboard_press_reaches_action_state() {
        std::env::set_var("INPUT_CONFIG_PATH", "/nonexistent/input.toml");
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, bevy::input::InputPlugin));
        app.add_plugins(ActionsPlugin);
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.update();

        let actions = app.world().resource::<ActionState>();
        assert!(actions.pressed(PlayerAction::Forward));
        std::env::remove_var("INPUT_CONFIG_PATH");
    }
}
