use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierConfiguration, RapierPhysicsPlugin};

#[cfg(feature = "debug")]
use bevy_rapier3d::render::{DebugRenderContext, RapierDebugRenderPlugin};

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, apply_gravity_config);
        #[cfg(feature = "debug")]
        {
            app.add_plugins(RapierDebugRenderPlugin::default())
                .add_systems(Startup, configure_debug_render);
        }
    }
}

/// The configuration lives on the physics context entity, which the plugin
/// spawns during its own startup; apply ours once it exists.
fn apply_gravity_config(
    mut applied: Local<bool>,
    cfg: Res<GameConfig>,
    mut rapier_cfg: Query<&mut RapierConfiguration>,
) {
    if *applied {
        return;
    }
    if let Ok(mut rc) = rapier_cfg.single_mut() {
        rc.gravity = Vec3::new(0.0, cfg.physics.gravity_y, 0.0);
        *applied = true;
    }
}

#[cfg(feature = "debug")]
fn configure_debug_render(cfg: Res<GameConfig>, ctx: Option<ResMut<DebugRenderContext>>) {
    if let Some(mut c) = ctx {
        c.enabled = cfg.physics.debug_render;
    }
}
