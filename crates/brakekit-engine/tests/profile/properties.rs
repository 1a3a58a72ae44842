use brakekit_core::{
    BendConvention, BendDirection, BendPlan, BendStep, DeductionStrategy, MaterialSpec,
    TrailingAngle,
};
use brakekit_engine::{build_solid, FlatLengthCalculator};
use proptest::prelude::*;

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn strategies() -> Vec<DeductionStrategy> {
    vec![
        DeductionStrategy::default(),
        DeductionStrategy::Tangent,
        DeductionStrategy::KFactor { k_factor: 0.35 },
    ]
}

fn single_bend_flat(angle: f64, strategy: DeductionStrategy) -> f64 {
    let plan = BendPlan::single_bend(
        1000.0,
        1000.0,
        angle,
        BendDirection::Up,
        MaterialSpec::new(2.0, 1.5),
    );
    FlatLengthCalculator::new(BendConvention::default().with_deduction(strategy))
        .calculate(&plan)
        .unwrap()
        .flat_length
}

#[test]
fn test_straight_parts_are_rectangles() {
    let plan = BendPlan::new(
        vec![
            BendStep::up(20.0, 180.0),
            BendStep::down(35.0, 180.0),
            BendStep::straight(45.0),
        ],
        MaterialSpec::new(1.5, 1.0),
    );
    let convention = BendConvention::default();
    let profile = build_solid(&plan, &convention).unwrap();

    let (min_x, min_y, max_x, max_y) = profile.bounds().unwrap();
    assert!(near(min_x, 0.0) && near(max_x, 100.0));
    assert!(near(min_y, 0.0) && near(max_y, 1.5));
    assert!(profile
        .polygon
        .iter()
        .all(|p| near(p.y, 0.0) || near(p.y, 1.5)));

    let flat = FlatLengthCalculator::new(convention).calculate(&plan).unwrap();
    assert_eq!(flat.flat_length, flat.total_outer);
}

#[test]
fn test_up_and_down_are_mirror_images() {
    let material = MaterialSpec::new(2.0, 1.0);
    let half = material.thickness / 2.0;
    let convention = BendConvention::default();

    for angle in [30.0, 90.0, 150.0] {
        let up = BendPlan::single_bend(50.0, 70.0, angle, BendDirection::Up, material.clone());
        let down =
            BendPlan::single_bend(50.0, 70.0, angle, BendDirection::Down, material.clone());
        let up = build_solid(&up, &convention).unwrap();
        let down = build_solid(&down, &convention).unwrap();

        assert_eq!(down.reference_rail.len(), up.offset_rail.len());
        for (d, u) in down.reference_rail.iter().zip(&up.offset_rail) {
            assert!(d.distance_to(&u.mirrored_y(half)) < 1e-9);
        }
        assert_eq!(down.offset_rail.len(), up.reference_rail.len());
        for (d, u) in down.offset_rail.iter().zip(&up.reference_rail) {
            assert!(d.distance_to(&u.mirrored_y(half)) < 1e-9);
        }
    }
}

#[test]
fn test_deduction_grows_toward_hem() {
    for strategy in strategies() {
        let mut previous = single_bend_flat(180.0, strategy);
        for angle in [150.0, 120.0, 90.0, 60.0, 30.0, 5.0, 1.5, 1.0, 0.5, 0.0] {
            let flat = single_bend_flat(angle, strategy);
            assert!(flat < previous, "{} at {}°", strategy.name(), angle);
            previous = flat;
        }
    }
}

fn arb_step() -> impl Strategy<Value = BendStep> {
    (5.0f64..200.0, 0.0f64..=180.0, any::<bool>()).prop_map(|(length, angle, up)| {
        if up {
            BendStep::up(length, angle)
        } else {
            BendStep::down(length, angle)
        }
    })
}

fn arb_plan() -> impl Strategy<Value = BendPlan> {
    (
        prop::collection::vec(arb_step(), 1..8),
        0.5f64..6.0,
        0.5f64..10.0,
    )
        .prop_map(|(steps, thickness, radius)| {
            BendPlan::new(steps, MaterialSpec::new(thickness, radius))
        })
}

proptest! {
    #[test]
    fn prop_polygon_is_closed(plan in arb_plan(), active in any::<bool>()) {
        let trailing = if active { TrailingAngle::Active } else { TrailingAngle::Ignored };
        let convention = BendConvention::default().with_trailing_angle(trailing);
        let profile = build_solid(&plan, &convention).unwrap();
        prop_assert!(profile.is_closed());
        prop_assert!(profile.polygon.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn prop_one_pivot_per_formed_bend(plan in arb_plan()) {
        let convention = BendConvention::default();
        let profile = build_solid(&plan, &convention).unwrap();
        let formed = plan.steps[..plan.len() - 1]
            .iter()
            .filter(|s| s.angle != 180.0)
            .count();
        prop_assert_eq!(profile.pivots.len(), formed);
    }

    #[test]
    fn prop_flat_length_decreases_as_bend_closes(
        first in 0.0f64..=180.0,
        second in 0.0f64..=180.0,
        strategy_index in 0usize..3,
    ) {
        prop_assume!((first - second).abs() > 1e-3);
        let strategy = strategies()[strategy_index];
        let (wide, tight) = if first > second { (first, second) } else { (second, first) };
        prop_assert!(single_bend_flat(tight, strategy) < single_bend_flat(wide, strategy));
    }
}
