//! Debug module: feature gated periodic simulation logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::Player;
#[cfg(feature = "debug")]
use crate::gameplay::phase::{GamePhase, RunState};

#[cfg(feature = "debug")]
const LOG_INTERVAL_SECS: f32 = 1.0;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, debug_sim_log);
    }
}

#[cfg(feature = "debug")]
fn debug_sim_log(
    time: Res<Time>,
    mut timer: Local<f32>,
    phase: Res<State<GamePhase>>,
    run_state: Res<RunState>,
    player: Query<&Transform, With<Player>>,
) {
    *timer += time.delta_secs();
    if *timer < LOG_INTERVAL_SECS {
        return;
    }
    *timer = 0.0;
    let pos = player
        .single()
        .map(|tf| tf.translation)
        .unwrap_or(Vec3::NAN);
    info!(
        "SIM phase={:?} elapsed={:.2}s seed={:#x} player=({:.2},{:.2},{:.2})",
        phase.get(),
        run_state.elapsed,
        run_state.blocks_seed,
        pos.x,
        pos.y,
        pos.z
    );
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
