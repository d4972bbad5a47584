use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::level::builder::RegenerateLevel;
use crate::interaction::actions::types::{ActionState, PlayerAction};

/// Stage of the current run.
/// Ready -> Playing -> Ended -> Ready (new seed) | Ready (fall restart, same seed)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GamePhase {
    /// Marble parked on the start pad, waiting for the first input.
    #[default]
    Ready,
    /// Clock running, controls live.
    Playing,
    /// Finish zone reached; waiting for a restart command.
    Ended,
}

/// Run-scoped parameters and clock. `blocks_seed` only changes on the
/// Ended -> Ready restart command; falling off the track keeps the level.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RunState {
    pub blocks_count: u32,
    pub blocks_seed: u64,
    pub elapsed: f32,
    pub finish_time: Option<f32>,
}

impl RunState {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            blocks_count: cfg.level.count,
            blocks_seed: cfg.level.seed.unwrap_or_else(rand::random),
            elapsed: 0.0,
            finish_time: None,
        }
    }
}

/// External restart command (UI button stand-in; also bound to a key).
#[derive(Event, Debug, Default)]
pub struct RestartRequested;

pub struct PhasePlugin;

impl Plugin for PhasePlugin {
    fn build(&self, app: &mut App) {
        // RunState must exist before Startup level assembly; derive it from an
        // already-inserted GameConfig when present.
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        app.init_state::<GamePhase>()
            .insert_resource(RunState::from_config(&cfg))
            .add_event::<RestartRequested>()
            .add_systems(
                Update,
                (
                    tick_run_clock.run_if(in_state(GamePhase::Playing)),
                    request_restart_on_action.run_if(in_state(GamePhase::Ended)),
                    apply_restart,
                ),
            )
            .add_systems(OnEnter(GamePhase::Playing), on_run_started);
    }
}

fn tick_run_clock(time: Res<Time>, mut run_state: ResMut<RunState>) {
    run_state.elapsed += time.delta_secs();
}

fn on_run_started(mut run_state: ResMut<RunState>) {
    run_state.elapsed = 0.0;
    run_state.finish_time = None;
    info!(target: "phase", "run started");
}

fn request_restart_on_action(
    actions: Res<ActionState>,
    mut restart: EventWriter<RestartRequested>,
) {
    if actions.just_pressed(PlayerAction::Restart) {
        restart.write(RestartRequested);
    }
}

/// Ended -> Ready with a fresh seed; the level builder reassembles.
fn apply_restart(
    mut requests: EventReader<RestartRequested>,
    phase: Res<State<GamePhase>>,
    mut run_state: ResMut<RunState>,
    mut next: ResMut<NextState<GamePhase>>,
    mut regenerate: EventWriter<RegenerateLevel>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    if *phase.get() != GamePhase::Ended {
        return;
    }
    run_state.blocks_seed = rand::random();
    run_state.finish_time = None;
    regenerate.write(RegenerateLevel);
    next.set(GamePhase::Ready);
    info!(
        target: "phase",
        "restart: new seed {:#018x}",
        run_state.blocks_seed
    );
}
