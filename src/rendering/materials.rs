use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::level::catalog::{BAR_SIZE, BLADE_SIZE, FINISH_PAD_SIZE, FLOOR_SIZE};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MaterialsInitSet;

/// Shared mesh handles for everything with a fixed footprint. Wall meshes are
/// sized per level and created by the builder instead.
#[derive(Resource)]
pub struct LevelMeshes {
    pub floor: Handle<Mesh>,
    pub finish_pad: Handle<Mesh>,
    pub bar: Handle<Mesh>,
    pub blade: Handle<Mesh>,
    pub end_wall: Handle<Mesh>,
    pub player: Handle<Mesh>,
}

/// The scene palette, matching the classic course colors.
#[derive(Resource)]
pub struct LevelMaterials {
    pub pad: Handle<StandardMaterial>,
    pub obstacle_floor: Handle<StandardMaterial>,
    pub obstacle: Handle<StandardMaterial>,
    pub wall: Handle<StandardMaterial>,
    pub player: Handle<StandardMaterial>,
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        // Tests often run with only MinimalPlugins; ensure required asset
        // storages exist.
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<StandardMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<StandardMaterial>>();
        }
        app.insert_resource(ClearColor(Color::srgb_u8(189, 237, 252)))
            .add_systems(Startup, setup_scene_assets.in_set(MaterialsInitSet));
    }
}

fn setup_scene_assets(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cuboid = |s: Vec3| Mesh::from(Cuboid::new(s.x, s.y, s.z));
    let player = Sphere::new(cfg.player.radius)
        .mesh()
        .ico(1)
        .expect("icosphere subdivision");

    commands.insert_resource(LevelMeshes {
        floor: meshes.add(cuboid(FLOOR_SIZE)),
        finish_pad: meshes.add(cuboid(FINISH_PAD_SIZE)),
        bar: meshes.add(cuboid(BAR_SIZE)),
        blade: meshes.add(cuboid(BLADE_SIZE)),
        end_wall: meshes.add(cuboid(Vec3::new(4.0, 1.5, 0.3))),
        player: meshes.add(player),
    });

    let flat = |color: Color| StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.9,
        ..default()
    };
    commands.insert_resource(LevelMaterials {
        pad: materials.add(flat(Color::srgb_u8(50, 205, 50))), // limegreen
        obstacle_floor: materials.add(flat(Color::srgb_u8(173, 255, 47))), // greenyellow
        obstacle: materials.add(flat(Color::srgb_u8(255, 69, 0))), // orangered
        wall: materials.add(flat(Color::srgb_u8(112, 128, 144))), // slategray
        player: materials.add(flat(Color::srgb_u8(147, 112, 219))), // mediumpurple
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_provides_shared_handles() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins(MaterialsPlugin);
        app.update();
        assert!(app.world().contains_resource::<LevelMeshes>());
        assert!(app.world().contains_resource::<LevelMaterials>());
    }
}
