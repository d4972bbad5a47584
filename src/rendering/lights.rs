use bevy::prelude::*;

pub struct LightsPlugin;

impl Plugin for LightsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_lights);
    }
}

fn setup_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: 6500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 4.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}
