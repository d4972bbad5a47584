use marble_racer::core::level::assembler::{assemble, LevelPlan};
use marble_racer::core::level::catalog::{ObstacleKind, PITCH};
use marble_racer::ObstacleMotion;

#[test]
fn same_inputs_reproduce_identical_levels() {
    for count in [0u32, 1, 5, 12, 40] {
        for seed in [0u64, 1, 0xDEAD_BEEF, u64::MAX] {
            let a = assemble(count, seed, &ObstacleKind::ALL).expect("assemble");
            let b = assemble(count, seed, &ObstacleKind::ALL).expect("assemble");
            let kinds_a: Vec<ObstacleKind> = a.segments.iter().map(|s| s.kind).collect();
            let kinds_b: Vec<ObstacleKind> = b.segments.iter().map(|s| s.kind).collect();
            assert_eq!(kinds_a, kinds_b, "count={count} seed={seed}");
            assert_eq!(a, b, "motion parameters must reproduce too");
        }
    }
}

#[test]
fn finish_plane_and_extent_arithmetic() {
    for count in 0u32..20 {
        let plan = assemble(count, 9, &ObstacleKind::ALL).expect("assemble");
        assert_eq!(plan.finish_origin().z, -((count + 1) as f32) * PITCH);
        assert_eq!(plan.end_plane_z(), -(count as f32 * PITCH + 2.0));
        assert_eq!(plan.bounds_length(), count + 2);
    }
}

#[test]
fn segments_sit_one_pitch_apart() {
    for i in 0u32..10 {
        let origin = LevelPlan::segment_origin(i);
        assert_eq!(origin, bevy::math::Vec3::new(0.0, 0.0, -((i + 1) as f32) * PITCH));
    }
}

#[test]
fn motion_parameters_respect_their_bands() {
    let plan = assemble(200, 0x5EED, &ObstacleKind::ALL).expect("assemble");
    let tau = std::f32::consts::TAU;
    for spec in &plan.segments {
        match spec.motion {
            ObstacleMotion::Spinner { direction } => {
                assert!(direction == 1.0 || direction == -1.0);
            }
            ObstacleMotion::Limbo { time_offset } | ObstacleMotion::Axe { time_offset } => {
                assert!(time_offset >= 0.2 * tau && time_offset < 1.2 * tau);
            }
        }
        match (spec.kind, spec.motion) {
            (ObstacleKind::Spinner, ObstacleMotion::Spinner { .. })
            | (ObstacleKind::Limbo, ObstacleMotion::Limbo { .. })
            | (ObstacleKind::Axe, ObstacleMotion::Axe { .. }) => {}
            other => panic!("kind/motion mismatch: {other:?}"),
        }
    }
}

#[test]
fn empty_kind_set_is_a_construction_error() {
    let err = assemble(5, 0, &[]).expect_err("must reject");
    assert!(err.contains("empty"));
}

#[test]
fn restricted_kind_sets_are_honored() {
    let plan = assemble(30, 4, &[ObstacleKind::Spinner, ObstacleKind::Limbo]).expect("assemble");
    assert!(plan.segments.iter().all(|s| s.kind != ObstacleKind::Axe));
    // With two kinds over 30 draws, both should realistically appear.
    assert!(plan.segments.iter().any(|s| s.kind == ObstacleKind::Spinner));
    assert!(plan.segments.iter().any(|s| s.kind == ObstacleKind::Limbo));
}
