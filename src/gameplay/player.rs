use bevy::prelude::*;
use bevy_rapier3d::prelude::{
    Collider, Damping, ExternalImpulse, Friction, QueryFilter, ReadRapierContext, Restitution,
    RigidBody, Sleeping, Velocity,
};

use crate::core::components::Player;
use crate::core::config::GameConfig;
use crate::core::level::catalog::PITCH;
use crate::core::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::phase::{GamePhase, RunState};
use crate::interaction::actions::types::{ActionState, PlayerAction};
use crate::rendering::materials::{LevelMaterials, LevelMeshes, MaterialsInitSet};

/// Where the marble respawns; matches the start pad center, one unit up.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Dropping below this height counts as falling off the track.
pub const FALL_LIMIT_Y: f32 = -4.0;
/// Ground probe starts just below the marble surface...
const JUMP_PROBE_OFFSET: f32 = 0.31;
/// ...and gives up after this travel.
const JUMP_PROBE_RANGE: f32 = 10.0;
/// Hits closer than this count as standing on ground.
const GROUNDED_TOI: f32 = 0.15;

const PLAYER_RESTITUTION: f32 = 0.2;
const PLAYER_FRICTION: f32 = 1.0;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player.after(MaterialsInitSet))
            .add_systems(
                Update,
                (start_on_first_input, player_movement, player_jump)
                    .chain()
                    .in_set(PrePhysicsSet),
            )
            .add_systems(Update, check_finish_and_fall.in_set(PostPhysicsAdjustSet))
            .add_systems(OnEnter(GamePhase::Ready), reset_player);
    }
}

fn spawn_player(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    shared: Res<LevelMeshes>,
    palette: Res<LevelMaterials>,
) {
    commands.spawn((
        Name::new("Player"),
        Player,
        RigidBody::Dynamic,
        Collider::ball(cfg.player.radius),
        Restitution::coefficient(PLAYER_RESTITUTION),
        Friction::coefficient(PLAYER_FRICTION),
        Damping {
            linear_damping: cfg.player.linear_damping,
            angular_damping: cfg.player.angular_damping,
        },
        Sleeping::disabled(),
        Velocity::zero(),
        ExternalImpulse::default(),
        Mesh3d(shared.player.clone()),
        MeshMaterial3d(palette.player.clone()),
        Transform::from_translation(SPAWN_POSITION),
    ));
}

/// A waiting run goes live on the first control press.
fn start_on_first_input(
    phase: Res<State<GamePhase>>,
    actions: Res<ActionState>,
    mut next: ResMut<NextState<GamePhase>>,
) {
    if *phase.get() == GamePhase::Ready && actions.any_control_just_pressed() {
        next.set(GamePhase::Playing);
    }
}

/// Held directions become impulses plus rolling torque, both scaled by the
/// frame delta so acceleration is frame-rate independent.
fn player_movement(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    actions: Res<ActionState>,
    mut player: Query<&mut ExternalImpulse, With<Player>>,
) {
    let Ok(mut imp) = player.single_mut() else {
        return;
    };
    let dt = time.delta_secs();
    let impulse_strength = cfg.player.impulse_strength * dt;
    let torque_strength = cfg.player.torque_strength * dt;

    let mut impulse = Vec3::ZERO;
    let mut torque = Vec3::ZERO;
    if actions.pressed(PlayerAction::Forward) {
        impulse.z -= impulse_strength;
        torque.x -= torque_strength;
    }
    if actions.pressed(PlayerAction::Backward) {
        impulse.z += impulse_strength;
        torque.x += torque_strength;
    }
    if actions.pressed(PlayerAction::Leftward) {
        impulse.x -= impulse_strength;
        torque.z += torque_strength;
    }
    if actions.pressed(PlayerAction::Rightward) {
        impulse.x += impulse_strength;
        torque.z -= torque_strength;
    }

    imp.impulse = impulse;
    imp.torque_impulse = torque;
}

/// Rising-edge jump, gated by a short downward ray: only a marble resting on
/// (or grazing) geometry may jump. Airborne presses are silent no-ops.
fn player_jump(
    actions: Res<ActionState>,
    cfg: Res<GameConfig>,
    rapier_context: ReadRapierContext,
    mut player: Query<(Entity, &Transform, &mut ExternalImpulse), With<Player>>,
) {
    if !actions.just_pressed(PlayerAction::Jump) {
        return;
    }
    let Ok(context) = rapier_context.single() else {
        return;
    };
    let Ok((entity, tf, mut imp)) = player.single_mut() else {
        return;
    };

    let origin = tf.translation - Vec3::Y * JUMP_PROBE_OFFSET;
    let filter = QueryFilter::default().exclude_rigid_body(entity);
    if let Some((_, toi)) =
        context.cast_ray(origin, -Vec3::Y, JUMP_PROBE_RANGE, true, filter)
    {
        if toi < GROUNDED_TOI {
            imp.impulse += Vec3::Y * cfg.player.jump_impulse;
        }
    }
}

/// Watches the marble after the physics step: crossing the finish plane ends
/// the run; dropping out of bounds restarts it in place.
fn check_finish_and_fall(
    mut run_state: ResMut<RunState>,
    phase: Res<State<GamePhase>>,
    mut next: ResMut<NextState<GamePhase>>,
    mut player: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    let Ok((mut tf, mut vel)) = player.single_mut() else {
        return;
    };
    let end_plane_z = -(run_state.blocks_count as f32 * PITCH + 2.0);
    match phase.get() {
        GamePhase::Playing => {
            if tf.translation.z < end_plane_z {
                let elapsed = run_state.elapsed;
                run_state.finish_time = Some(elapsed);
                next.set(GamePhase::Ended);
                info!(target: "phase", "finish reached in {elapsed:.2}s");
            } else if tf.translation.y < FALL_LIMIT_Y {
                next.set(GamePhase::Ready);
                info!(target: "phase", "fell out of bounds, restarting");
            }
        }
        GamePhase::Ready => {
            // Already waiting; a fall (e.g. rolled off the start pad) snaps the
            // marble back without a state transition.
            if tf.translation.y < FALL_LIMIT_Y {
                reset_body(&mut tf, &mut vel);
            }
        }
        GamePhase::Ended => {}
    }
}

/// Runs on every entry into Ready, including the very first frame.
fn reset_player(mut player: Query<(&mut Transform, &mut Velocity), With<Player>>) {
    let Ok((mut tf, mut vel)) = player.single_mut() else {
        return;
    };
    reset_body(&mut tf, &mut vel);
    info!(target: "player", "reset to spawn");
}

/// Park the marble at spawn with all motion killed. Idempotent.
pub fn reset_body(tf: &mut Transform, vel: &mut Velocity) {
    tf.translation = SPAWN_POSITION;
    vel.linvel = Vec3::ZERO;
    vel.angvel = Vec3::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let mut tf = Transform::from_xyz(3.0, -7.0, -12.5);
        let mut vel = Velocity {
            linvel: Vec3::new(1.0, -4.0, 2.0),
            angvel: Vec3::splat(3.0),
        };
        reset_body(&mut tf, &mut vel);
        let (tf_once, vel_once) = (tf, vel);
        reset_body(&mut tf, &mut vel);
        assert_eq!(tf.translation, tf_once.translation);
        assert_eq!(vel.linvel, vel_once.linvel);
        assert_eq!(vel.angvel, vel_once.angvel);
        assert_eq!(tf.translation, SPAWN_POSITION);
        assert_eq!(vel.linvel, Vec3::ZERO);
        assert_eq!(vel.angvel, Vec3::ZERO);
    }
}
