//! Kinematic obstacle drivers: each moving obstacle's target pose is a pure
//! function of the simulation clock and its instance parameter. Writing the
//! target transform is enough; the position-based kinematic bodies are
//! interpolated there by the physics step.
use bevy::prelude::*;

use crate::core::components::{ObstacleMotion, SegmentAnchor};
use crate::core::level::catalog::OBSTACLE_RAISE;
use crate::core::system_order::PrePhysicsSet;

/// Limbo bar height above the segment origin at time `t`.
pub fn limbo_height(t: f32, time_offset: f32) -> f32 {
    (t + time_offset).sin() + 1.15
}

/// Axe blade lateral offset from the segment origin at time `t`.
pub fn axe_offset(t: f32, time_offset: f32) -> f32 {
    (t + time_offset).sin() * 1.25
}

/// Axe blade height is fixed while it sweeps.
pub const AXE_HEIGHT: f32 = 0.75;

/// Spinner bar yaw at time `t`.
pub fn spinner_rotation(t: f32, direction: f32) -> Quat {
    Quat::from_rotation_y(t * direction)
}

pub struct ObstaclesPlugin;

impl Plugin for ObstaclesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_obstacles.in_set(PrePhysicsSet));
    }
}

fn drive_obstacles(
    time: Res<Time>,
    mut obstacles: Query<(&ObstacleMotion, &SegmentAnchor, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for (motion, anchor, mut tf) in &mut obstacles {
        match *motion {
            ObstacleMotion::Spinner { direction } => {
                tf.rotation = spinner_rotation(t, direction);
            }
            ObstacleMotion::Limbo { time_offset } => {
                tf.translation = anchor.0 + Vec3::Y * limbo_height(t, time_offset);
            }
            ObstacleMotion::Axe { time_offset } => {
                tf.translation = anchor.0
                    + Vec3::new(axe_offset(t, time_offset), AXE_HEIGHT, 0.0);
            }
        }
    }
}

/// Resting pose of a freshly spawned obstacle, before the first drive tick.
pub fn spawn_pose(anchor: Vec3) -> Vec3 {
    anchor + Vec3::Y * OBSTACLE_RAISE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::LevelEntity;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn spinner_angle_is_time_times_direction() {
        for &d in &[1.0f32, -1.0] {
            for t in [0.0f32, 0.25, 1.0, 7.5] {
                let q = spinner_rotation(t, d);
                let expected = Quat::from_rotation_y(t * d);
                assert!(q.angle_between(expected) < 1e-6, "t={t} d={d}");
            }
        }
    }

    #[test]
    fn limbo_height_matches_formula() {
        let phi = 0.2 * TAU;
        for t in [0.0f32, 0.5, 2.0, 11.0] {
            let expected = (t + phi).sin() + 1.15;
            assert_eq!(limbo_height(t, phi), expected);
        }
        // Bar bottoms out above the floor and tops out below 2.15.
        assert!(limbo_height(FRAC_PI_2 * 3.0 - phi, phi) >= 0.149);
        assert!(limbo_height(FRAC_PI_2 - phi, phi) <= 2.151);
    }

    #[test]
    fn axe_sweep_matches_formula() {
        let phi = 1.1 * TAU;
        for t in [0.0f32, 0.5, 2.0, 11.0] {
            assert_eq!(axe_offset(t, phi), (t + phi).sin() * 1.25);
        }
    }

    #[test]
    fn drive_updates_target_transforms() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ObstaclesPlugin);
        // PrePhysicsSet is configured by GamePlugin; standalone it is unordered,
        // which is fine for this harness.
        let anchor = Vec3::new(0.0, 0.0, -8.0);
        let e = app
            .world_mut()
            .spawn((
                LevelEntity,
                ObstacleMotion::Limbo { time_offset: 0.0 },
                SegmentAnchor(anchor),
                Transform::from_translation(spawn_pose(anchor)),
            ))
            .id();

        app.update();
        // First update advances time from zero by some small dt; the bar must
        // have been lifted from its resting pose toward sin(t)+1.15.
        let tf = app.world().get::<Transform>(e).expect("transform");
        assert!(tf.translation.y > 1.0, "resting pose was not overwritten");
        assert_eq!(tf.translation.z, anchor.z);
    }
}
