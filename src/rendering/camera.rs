use bevy::prelude::*;

use crate::core::components::Player;
use crate::core::config::GameConfig;
use crate::core::system_order::PostPhysicsAdjustSet;

/// Smoothed follow state; deliberately starts far out so the camera sweeps in
/// on the first frames.
#[derive(Resource, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.in_set(PostPhysicsAdjustSet));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45f32.to_radians(),
            near: 0.1,
            far: 200.0,
            ..default()
        }),
        Transform::from_xyz(2.5, 4.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Exponentially chase an ideal pose derived from the marble: slightly above
/// and behind it, looking a little over its center.
fn follow_player(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut rig: ResMut<CameraRig>,
    player: Query<&Transform, With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera3d>, Without<Player>)>,
) {
    let Ok(player_tf) = player.single() else {
        return;
    };
    let Ok(mut cam_tf) = camera.single_mut() else {
        return;
    };
    let c = &cfg.camera;
    let ideal_position =
        player_tf.translation + Vec3::new(0.0, c.height_offset, c.trail_offset);
    let ideal_target = player_tf.translation + Vec3::Y * c.target_height_offset;

    // Bounded so one long frame cannot overshoot the ideal.
    let alpha = (c.follow_rate * time.delta_secs()).min(1.0);
    rig.position = rig.position.lerp(ideal_position, alpha);
    rig.target = rig.target.lerp(ideal_target, alpha);

    cam_tf.translation = rig.position;
    cam_tf.look_at(rig.target, Vec3::Y);
}
