use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, Friction, Restitution, RigidBody};

use crate::core::components::{LevelEntity, SegmentAnchor};
use crate::core::level::assembler::{assemble, LevelPlan};
use crate::core::level::catalog::{
    ObstacleKind, FINISH_PAD_SIZE, FLOOR_SIZE, OBSTACLE_FRICTION, OBSTACLE_RESTITUTION, PITCH,
};
use crate::gameplay::obstacles::spawn_pose;
use crate::gameplay::phase::RunState;
use crate::rendering::materials::{LevelMaterials, LevelMeshes, MaterialsInitSet};

/// Fired when the current level must be torn down and reassembled from the
/// parameters in [`RunState`].
#[derive(Event, Debug, Default)]
pub struct RegenerateLevel;

const WALL_RESTITUTION: f32 = 0.2;
const WALL_FRICTION: f32 = 0.0;
const GROUND_FRICTION: f32 = 1.0;

pub struct LevelBuilderPlugin;

impl Plugin for LevelBuilderPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RegenerateLevel>()
            .add_systems(Startup, build_initial_level.after(MaterialsInitSet))
            .add_systems(Update, rebuild_on_regenerate);
    }
}

fn build_initial_level(
    mut commands: Commands,
    run_state: Res<RunState>,
    shared: Res<LevelMeshes>,
    palette: Res<LevelMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    spawn_level(&mut commands, &run_state, &shared, &palette, &mut meshes);
}

fn rebuild_on_regenerate(
    mut commands: Commands,
    mut regenerate: EventReader<RegenerateLevel>,
    run_state: Res<RunState>,
    old: Query<Entity, With<LevelEntity>>,
    shared: Res<LevelMeshes>,
    palette: Res<LevelMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if regenerate.is_empty() {
        return;
    }
    regenerate.clear();
    for entity in &old {
        commands.entity(entity).despawn();
    }
    spawn_level(&mut commands, &run_state, &shared, &palette, &mut meshes);
}

fn spawn_level(
    commands: &mut Commands,
    run_state: &RunState,
    shared: &LevelMeshes,
    palette: &LevelMaterials,
    meshes: &mut Assets<Mesh>,
) {
    let plan = match assemble(run_state.blocks_count, run_state.blocks_seed, &ObstacleKind::ALL) {
        Ok(plan) => plan,
        Err(e) => {
            // Empty kind set is a configuration defect, not a runtime state.
            error!(target: "level", "assembly failed: {e}");
            return;
        }
    };
    info!(
        target: "level",
        "assembling level: count={} seed={:#018x}",
        plan.count,
        plan.seed
    );

    spawn_pad(
        commands,
        "StartPad",
        Vec3::ZERO,
        shared.floor.clone(),
        palette.pad.clone(),
        FLOOR_SIZE,
        Vec3::new(0.0, -FLOOR_SIZE.y * 0.5, 0.0),
    );

    for (i, spec) in plan.segments.iter().enumerate() {
        let origin = LevelPlan::segment_origin(i as u32);
        spawn_pad(
            commands,
            "SegmentFloor",
            origin,
            shared.floor.clone(),
            palette.obstacle_floor.clone(),
            FLOOR_SIZE,
            Vec3::new(0.0, -FLOOR_SIZE.y * 0.5, 0.0),
        );

        let size = spec.kind.collider_size();
        let mesh = match spec.kind {
            ObstacleKind::Spinner | ObstacleKind::Limbo => shared.bar.clone(),
            ObstacleKind::Axe => shared.blade.clone(),
        };
        commands.spawn((
            Name::new(format!("{:?}{}", spec.kind, i)),
            LevelEntity,
            spec.motion,
            SegmentAnchor(origin),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5),
            Restitution::coefficient(OBSTACLE_RESTITUTION),
            Friction::coefficient(OBSTACLE_FRICTION),
            Mesh3d(mesh),
            MeshMaterial3d(palette.obstacle.clone()),
            Transform::from_translation(spawn_pose(origin)),
        ));
    }

    spawn_pad(
        commands,
        "FinishPad",
        plan.finish_origin(),
        shared.finish_pad.clone(),
        palette.pad.clone(),
        FINISH_PAD_SIZE,
        Vec3::ZERO,
    );

    spawn_bounds(commands, &plan, shared, palette, meshes);
}

/// Static floor slab: collider footprint plus the visual, one entity.
fn spawn_pad(
    commands: &mut Commands,
    name: &str,
    origin: Vec3,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    size: Vec3,
    local_offset: Vec3,
) {
    commands.spawn((
        Name::new(format!("{name}@{}", origin.z)),
        LevelEntity,
        RigidBody::Fixed,
        Collider::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5),
        Restitution::coefficient(WALL_RESTITUTION),
        Friction::coefficient(GROUND_FRICTION),
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(origin + local_offset),
    ));
}

/// Side walls, end wall and the full-run ground collider, all attached to one
/// fixed body; their extent scales with the plan's segment count.
fn spawn_bounds(
    commands: &mut Commands,
    plan: &LevelPlan,
    shared: &LevelMeshes,
    palette: &LevelMaterials,
    meshes: &mut Assets<Mesh>,
) {
    let length = plan.bounds_length() as f32;
    let side_mesh = meshes.add(Mesh::from(Cuboid::new(0.2, 1.5, PITCH * length)));
    let end_mesh = shared.end_wall.clone();
    let mid_z = -(length * 2.0) + 2.0;

    commands
        .spawn((
            Name::new("Bounds"),
            LevelEntity,
            RigidBody::Fixed,
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|children| {
            for side_x in [2.15, -2.15] {
                children.spawn((
                    Collider::cuboid(0.1, 0.75, 2.0 * length),
                    Restitution::coefficient(WALL_RESTITUTION),
                    Friction::coefficient(WALL_FRICTION),
                    Mesh3d(side_mesh.clone()),
                    MeshMaterial3d(palette.wall.clone()),
                    Transform::from_xyz(side_x, 0.75, mid_z),
                ));
            }
            children.spawn((
                Collider::cuboid(2.0, 0.75, 0.15),
                Restitution::coefficient(WALL_RESTITUTION),
                Friction::coefficient(WALL_FRICTION),
                Mesh3d(end_mesh),
                MeshMaterial3d(palette.wall.clone()),
                Transform::from_xyz(0.0, 0.75, -(length * PITCH) + 2.0),
            ));
            // Run-length ground strip the marble actually rolls on.
            children.spawn((
                Collider::cuboid(2.0, 0.1, 2.0 * length),
                Friction::coefficient(GROUND_FRICTION),
                Transform::from_xyz(0.0, -0.1, mid_z),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::ObstacleMotion;
    use crate::core::config::GameConfig;
    use crate::rendering::materials::MaterialsPlugin;

    fn harness(count: u32, seed: u64) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.insert_resource(RunState {
            blocks_count: count,
            blocks_seed: seed,
            elapsed: 0.0,
            finish_time: None,
        });
        app.add_plugins((MaterialsPlugin, LevelBuilderPlugin));
        app
    }

    #[test]
    fn spawns_expected_census() {
        let mut app = harness(5, 42);
        app.update();

        let world = app.world_mut();
        let mut obstacles = world.query::<&ObstacleMotion>();
        assert_eq!(obstacles.iter(world).count(), 5);

        // 5 segment floors + start/finish pads + bounds root + 5 obstacle bodies
        let mut roots =
            world.query_filtered::<Entity, (With<LevelEntity>, With<RigidBody>)>();
        assert_eq!(roots.iter(world).count(), 5 + 2 + 1 + 5);
    }

    #[test]
    fn regenerate_replaces_level() {
        let mut app = harness(3, 1);
        app.update();

        app.world_mut().resource_mut::<RunState>().blocks_seed = 2;
        app.world_mut().send_event(RegenerateLevel);
        app.update();

        let world = app.world_mut();
        let mut obstacles = world.query::<&ObstacleMotion>();
        assert_eq!(
            obstacles.iter(world).count(),
            3,
            "old obstacles must not accumulate"
        );
    }
}
