use bevy::prelude::*;

/// Marker component identifying the player marble (holds physics body & collider).
#[derive(Component)]
pub struct Player;

/// Tag for every entity belonging to the current level build; despawned wholesale
/// when the level is regenerated.
#[derive(Component)]
pub struct LevelEntity;

/// Segment-local origin an obstacle animates relative to.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct SegmentAnchor(pub Vec3);

/// Per-instance motion parameter of a kinematic obstacle, drawn once at level
/// assembly and never re-rolled.
#[derive(Component, Debug, Copy, Clone, PartialEq)]
pub enum ObstacleMotion {
    /// Yaw rotation at `direction` radians per second (`direction` is ±1).
    Spinner { direction: f32 },
    /// Vertical sine sweep shifted by `time_offset`.
    Limbo { time_offset: f32 },
    /// Horizontal sine sweep shifted by `time_offset`.
    Axe { time_offset: f32 },
}
