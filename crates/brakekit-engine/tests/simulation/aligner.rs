use brakekit_core::geometry::bounds;
use brakekit_core::{BendConvention, BendPlan, BendStep, MaterialSpec};
use brakekit_engine::{align_for_machine, BendPhase, FlipMode};

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn vee() -> BendPlan {
    BendPlan::new(
        vec![BendStep::up(60.0, 90.0), BendStep::straight(60.0)],
        MaterialSpec::new(2.0, 1.0),
    )
}

fn u_channel() -> BendPlan {
    BendPlan::new(
        vec![
            BendStep::up(100.0, 90.0),
            BendStep::up(100.0, 90.0),
            BendStep::straight(100.0),
        ],
        MaterialSpec::new(2.0, 1.0),
    )
}

#[test]
fn test_flanges_symmetric_at_every_progress() {
    let plan = vee();
    let convention = BendConvention::default();
    for i in 0..=10 {
        let progress = i as f64 / 10.0;
        let frame = align_for_machine(&plan, &convention, 0, progress, FlipMode::Auto).unwrap();
        let (min_x, min_y, max_x, _) = bounds(&frame.polygon).unwrap();
        assert!(near(min_x + max_x, 0.0), "asymmetric at {}", progress);
        // The sheet never dips below the die face
        assert!(min_y > -1e-9, "below die at {}", progress);
    }
}

#[test]
fn test_phase_transitions() {
    let plan = vee();
    let convention = BendConvention::default();
    let phases: Vec<BendPhase> = [0.0, 0.3, 0.7, 1.0]
        .iter()
        .map(|&p| {
            align_for_machine(&plan, &convention, 0, p, FlipMode::Auto)
                .unwrap()
                .phase
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            BendPhase::Straight,
            BendPhase::Interpolating,
            BendPhase::Interpolating,
            BendPhase::Bent
        ]
    );
}

#[test]
fn test_second_bend_starts_with_first_formed() {
    let frame = align_for_machine(
        &u_channel(),
        &BendConvention::default(),
        1,
        0.0,
        FlipMode::Auto,
    )
    .unwrap();

    assert_eq!(frame.step_index, 1);
    assert_eq!(frame.current_angle, 180.0);
    assert_eq!(frame.target_angle, 90.0);
    assert!(!frame.flipped);

    // Base on the die, first flange standing up at the left
    let (min_x, min_y, max_x, max_y) = bounds(&frame.polygon).unwrap();
    assert!(near(min_x, -100.0) && near(max_x, 100.0));
    assert!(near(min_y, 0.0) && near(max_y, 100.0));
}

#[test]
fn test_forced_flip_hangs_flanges_below() {
    let convention = BendConvention::default();
    let frame = align_for_machine(&vee(), &convention, 0, 1.0, FlipMode::Flip).unwrap();
    assert!(frame.flipped);
    let (_, min_y, _, max_y) = bounds(&frame.polygon).unwrap();
    assert!(near(max_y, 0.0));
    assert!(min_y < -30.0);

    let down = BendPlan::new(
        vec![BendStep::down(60.0, 90.0), BendStep::straight(60.0)],
        MaterialSpec::new(2.0, 1.0),
    );
    let frame = align_for_machine(&down, &convention, 0, 1.0, FlipMode::NoFlip).unwrap();
    assert!(!frame.flipped);
    let (_, _, _, max_y) = bounds(&frame.polygon).unwrap();
    assert!(near(max_y, 0.0));
}

#[test]
fn test_transform_maps_apex() {
    let frame = align_for_machine(&vee(), &BendConvention::default(), 0, 1.0, FlipMode::Auto)
        .unwrap();
    let corner = frame
        .transform
        .transform_point(&nalgebra::Point2::new(60.0, 0.0));
    assert!(near(corner.x, frame.apex[1].x) && near(corner.y, frame.apex[1].y));
    // Virtual sharp sits on the bisector below the arc
    assert!(near(corner.x, 0.0));
    assert!(corner.y < 0.0);
}

#[test]
fn test_invalid_plan_is_an_error() {
    let plan = BendPlan::new(
        vec![BendStep::up(-5.0, 90.0), BendStep::straight(10.0)],
        MaterialSpec::default(),
    );
    assert!(align_for_machine(&plan, &BendConvention::default(), 0, 0.5, FlipMode::Auto).is_err());
}
