//! Segment catalog: the fixed footprints of every placeable level block and
//! the per-instance random parameter draws for the moving obstacles.
use bevy::prelude::*;
use rand::Rng;

use crate::core::components::ObstacleMotion;

/// Forward-axis spacing between consecutive segments.
pub const PITCH: f32 = 4.0;

/// Floor slab of every regular segment (top face at y = 0).
pub const FLOOR_SIZE: Vec3 = Vec3::new(4.0, 0.2, 4.0);
/// The finish pad sits slightly proud of the floor line.
pub const FINISH_PAD_SIZE: Vec3 = Vec3::new(4.0, 0.25, 4.0);
/// Spinner/limbo bar spanning most of the segment width.
pub const BAR_SIZE: Vec3 = Vec3::new(3.5, 0.3, 0.3);
/// Swinging axe blade.
pub const BLADE_SIZE: Vec3 = Vec3::new(1.5, 1.5, 0.3);
/// Obstacle bodies rest this far above the segment origin before animation.
pub const OBSTACLE_RAISE: f32 = 0.3;

pub const OBSTACLE_RESTITUTION: f32 = 0.2;
pub const OBSTACLE_FRICTION: f32 = 0.0;

/// Moving-obstacle segment variants eligible for assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Spinner,
    Limbo,
    Axe,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [Self::Spinner, Self::Limbo, Self::Axe];

    pub fn collider_size(self) -> Vec3 {
        match self {
            Self::Spinner | Self::Limbo => BAR_SIZE,
            Self::Axe => BLADE_SIZE,
        }
    }

    /// Draw this instance's persistent motion parameter.
    ///
    /// The spinner direction is intentionally NOT a fair coin: the original
    /// tuning draws `(r1 + 0.2) * r2` and compares against 0.5, skewing toward
    /// counter-clockwise. Kept verbatim.
    pub fn draw_motion(self, rng: &mut impl Rng) -> ObstacleMotion {
        match self {
            Self::Spinner => {
                let r1: f32 = rng.gen();
                let r2: f32 = rng.gen();
                let direction = if (r1 + 0.2) * r2 < 0.5 { -1.0 } else { 1.0 };
                ObstacleMotion::Spinner { direction }
            }
            Self::Limbo => ObstacleMotion::Limbo {
                time_offset: phase_offset(rng),
            },
            Self::Axe => ObstacleMotion::Axe {
                time_offset: phase_offset(rng),
            },
        }
    }
}

/// Sine phase offset in `[0.2 * 2π, 1.2 * 2π)`.
fn phase_offset(rng: &mut impl Rng) -> f32 {
    (rng.gen::<f32>() + 0.2) * std::f32::consts::TAU
}
