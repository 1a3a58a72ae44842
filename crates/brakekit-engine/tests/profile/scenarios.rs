use brakekit_core::{BendConvention, BendPlan, BendStep, MaterialSpec};
use brakekit_engine::{build_solid, compute_flat_length, FlatLengthCalculator};

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_single_right_angle_flat_length() {
    let steps = vec![BendStep::up(100.0, 90.0), BendStep::up(100.0, 180.0)];
    let flat = compute_flat_length(&steps, 2.0);
    assert!(near(flat.total_outer, 200.0));
    assert!(near(flat.flat_length, 198.0));
    assert!(!flat.clamped);
}

#[test]
fn test_straight_plate_rectangle() {
    let plan = BendPlan::new(vec![BendStep::up(50.0, 180.0)], MaterialSpec::new(3.0, 1.0));
    let profile = build_solid(&plan, &BendConvention::default()).unwrap();

    let corners = [(0.0, 0.0), (50.0, 0.0), (50.0, 3.0), (0.0, 3.0)];
    for (x, y) in corners {
        assert!(
            profile.polygon.iter().any(|p| near(p.x, x) && near(p.y, y)),
            "missing corner ({}, {})",
            x,
            y
        );
    }
    assert!(profile.is_closed());
}

#[test]
fn test_u_channel() {
    let plan = BendPlan::new(
        vec![
            BendStep::up(100.0, 90.0),
            BendStep::up(100.0, 90.0),
            BendStep::up(100.0, 180.0),
        ],
        MaterialSpec::new(2.0, 1.0),
    );
    let profile = build_solid(&plan, &BendConvention::default()).unwrap();

    assert_eq!(profile.pivots.len(), 2);
    assert!(profile.warnings.is_empty());

    let (min_x, min_y, max_x, max_y) = profile.bounds().unwrap();
    assert!(near(min_x, 0.0) && near(max_x, 100.0));
    assert!(near(min_y, 0.0) && near(max_y, 100.0));

    // The return flange comes back over the base, one thickness inside
    let inner_end = profile.offset_rail.last().unwrap();
    assert!(near(inner_end.x, 0.0) && near(inner_end.y, 98.0));

    let flat = FlatLengthCalculator::new(BendConvention::default())
        .calculate(&plan)
        .unwrap();
    assert!(near(flat.flat_length, 296.0));
}

#[test]
fn test_stock_channel_builds_cleanly() {
    let plan = BendPlan::stock_channel(MaterialSpec::default());
    let profile = build_solid(&plan, &BendConvention::default()).unwrap();
    assert_eq!(profile.pivots.len(), 3);
    assert_eq!(profile.apex.len(), plan.len() + 1);
    assert!(profile.warnings.is_empty());
}
