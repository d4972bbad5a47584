use bevy::prelude::*;

use crate::core::level::builder::LevelBuilderPlugin;
use crate::core::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::obstacles::ObstaclesPlugin;
use crate::gameplay::phase::PhasePlugin;
use crate::gameplay::player::PlayerPlugin;
use crate::interaction::actions::plugin::ActionsPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::lights::LightsPlugin;
use crate::rendering::materials::MaterialsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            PhysicsSetupPlugin,
            MaterialsPlugin,
            CameraPlugin,
            LightsPlugin,
            ActionsPlugin,
            PhasePlugin,
            LevelBuilderPlugin,
            ObstaclesPlugin,
            PlayerPlugin,
            DebugPlugin,
        ));
    }
}
