//! Deterministic level assembly: one seeded stream drives both the variant
//! picked for every slot and each obstacle's motion parameter, so a
//! `(count, seed, kinds)` triple always reproduces the identical level.
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::components::ObstacleMotion;
use crate::core::level::catalog::{ObstacleKind, PITCH};

/// One assembled obstacle slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpec {
    pub kind: ObstacleKind,
    pub motion: ObstacleMotion,
}

/// Ordered obstacle sequence plus the parameters it was assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPlan {
    pub count: u32,
    pub seed: u64,
    pub segments: Vec<SegmentSpec>,
}

impl LevelPlan {
    /// Origin of obstacle slot `i` (0-based; the start pad occupies offset 0).
    pub fn segment_origin(i: u32) -> Vec3 {
        Vec3::new(0.0, 0.0, -((i + 1) as f32) * PITCH)
    }

    pub fn finish_origin(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -((self.count + 1) as f32) * PITCH)
    }

    /// Crossing this z from above counts as reaching the finish zone.
    pub fn end_plane_z(&self) -> f32 {
        -(self.count as f32 * PITCH + 2.0)
    }

    /// Length parameter of the bounding walls, in segments.
    pub fn bounds_length(&self) -> u32 {
        self.count + 2
    }
}

/// Assemble a level plan. `kinds` must be non-empty; selection is uniform
/// over it. Same inputs, same plan.
pub fn assemble(count: u32, seed: u64, kinds: &[ObstacleKind]) -> Result<LevelPlan, String> {
    if kinds.is_empty() {
        return Err("assemble: obstacle kind set is empty".into());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut segments = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let kind = kinds[rng.gen_range(0..kinds.len())];
        segments.push(SegmentSpec {
            kind,
            motion: kind.draw_motion(&mut rng),
        });
    }
    Ok(LevelPlan {
        count,
        seed,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_identical_plans() {
        for count in [0u32, 1, 5, 17] {
            let a = assemble(count, 0xC0FFEE, &ObstacleKind::ALL).expect("assemble");
            let b = assemble(count, 0xC0FFEE, &ObstacleKind::ALL).expect("assemble");
            assert_eq!(a, b);
            assert_eq!(a.segments.len(), count as usize);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = assemble(10, 1, &ObstacleKind::ALL).expect("assemble");
        let b = assemble(10, 2, &ObstacleKind::ALL).expect("assemble");
        assert_ne!(a.segments, b.segments);
    }

    #[test]
    fn empty_kind_set_rejected() {
        assert!(assemble(5, 0, &[]).is_err());
    }

    #[test]
    fn single_kind_fills_every_slot() {
        let plan = assemble(6, 3, &[ObstacleKind::Axe]).expect("assemble");
        assert!(plan
            .segments
            .iter()
            .all(|s| s.kind == ObstacleKind::Axe));
    }

    #[test]
    fn layout_arithmetic() {
        let plan = assemble(5, 0, &ObstacleKind::ALL).expect("assemble");
        assert_eq!(LevelPlan::segment_origin(0).z, -4.0);
        assert_eq!(LevelPlan::segment_origin(4).z, -20.0);
        assert_eq!(plan.finish_origin().z, -24.0);
        assert_eq!(plan.end_plane_z(), -22.0);
        assert_eq!(plan.bounds_length(), 7);

        // Wall extent scales linearly with count.
        let longer = assemble(9, 0, &ObstacleKind::ALL).expect("assemble");
        assert_eq!(longer.bounds_length() - plan.bounds_length(), 4);
    }
}
