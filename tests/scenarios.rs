use seesaw::constants::{MAX_ANGLE, PIVOT_X, PLANK_LENGTH};
use seesaw::{
    aggregate, angle_for, map_to_plank, CyclingWeights, PlankModel, RandomWeights, Weight,
};

fn weight(value: u8) -> Weight {
    Weight::new(value).unwrap()
}

fn empty_plank() -> PlankModel<RandomWeights> {
    PlankModel::new(RandomWeights::seeded(1))
}

#[test]
fn scenario_a_heavy_left_clamps() {
    let mut model = empty_plank();
    let angle = model.place(100.0, weight(5)).unwrap();

    let totals = model.totals();
    assert_eq!(totals.left_torque, 500.0);
    assert_eq!(totals.right_torque, 0.0);
    assert_eq!(angle, -30);
    assert_eq!(model.current_angle(), -30);
}

#[test]
fn scenario_b_counterweight_on_right() {
    let mut model = empty_plank();
    model.place(100.0, weight(5)).unwrap();
    let angle = model.place(300.0, weight(4)).unwrap();

    let totals = model.totals();
    assert_eq!(totals.right_torque, 400.0);
    assert_eq!(totals.left_torque, 500.0);
    assert_eq!(angle, -10);
}

#[test]
fn scenario_c_pivot_placement_stays_level() {
    for value in 1..=10 {
        let mut model = empty_plank();
        assert_eq!(model.place(PIVOT_X, weight(value)).unwrap(), 0);
        let totals = model.totals();
        assert_eq!(totals.left_torque, 0.0);
        assert_eq!(totals.right_torque, 0.0);
        assert_eq!(totals.left_weight + totals.right_weight, 0);
    }
}

#[test]
fn scenario_d_preview_on_empty_plank() {
    let model = empty_plank();
    let preview = model.preview_angle(350.0, weight(10)).unwrap();

    assert_eq!(preview.angle, 30);
    assert_eq!(preview.delta, 30);
    assert!(model.objects().is_empty());
    assert_eq!(model.current_angle(), 0);
}

#[test]
fn placements_never_exceed_max_angle() {
    let mut model = empty_plank();
    let positions = [0.0, 17.5, 99.0, 150.0, 199.9, 200.0, 200.1, 275.0, 333.3, 400.0];
    for (i, &position) in positions.iter().cycle().take(60).enumerate() {
        let w = weight((i % 10) as u8 + 1);
        let angle = model.place(position, w).unwrap();
        assert!((-MAX_ANGLE..=MAX_ANGLE).contains(&angle));
        assert_eq!(angle, angle_for(model.totals().left_torque, model.totals().right_torque));
    }
}

#[test]
fn angle_is_antisymmetric() {
    for left in [0.0, 35.0, 105.0, 250.0, 4000.0] {
        for right in [0.0, 15.0, 95.0, 251.0, 3999.0] {
            assert_eq!(angle_for(left, right), -angle_for(right, left));
        }
    }
}

#[test]
fn preview_has_no_side_effects() {
    let mut model = PlankModel::new(CyclingWeights::new(vec![weight(6), weight(2)]).unwrap());
    model.place_pending(120.0).unwrap();
    let objects = model.objects().to_vec();
    let angle = model.current_angle();
    let pending = model.pending_weight();

    for position in [0.0, 100.0, 200.0, 300.0, 400.0] {
        for _ in 0..3 {
            model.preview_pending(position).unwrap();
        }
    }

    assert_eq!(model.objects(), objects.as_slice());
    assert_eq!(model.current_angle(), angle);
    assert_eq!(model.pending_weight(), pending);
}

#[test]
fn angle_is_independent_of_placement_order() {
    let placements = [(40.0, 3), (380.0, 2), (260.0, 9), (120.0, 1)];
    let mut forward = empty_plank();
    let mut backward = empty_plank();
    for &(position, w) in &placements {
        forward.place(position, weight(w)).unwrap();
    }
    for &(position, w) in placements.iter().rev() {
        backward.place(position, weight(w)).unwrap();
    }

    assert_eq!(forward.current_angle(), backward.current_angle());
    assert_eq!(aggregate(forward.objects()), aggregate(backward.objects()));
}

#[test]
fn level_mapping_ignores_y() {
    for screen_x in [-100.0, 0.0, 123.4, 380.0, 900.0] {
        for screen_y in [-50.0, 0.0, 75.0] {
            let expected = (screen_x - 250.0 + PIVOT_X).clamp(0.0, PLANK_LENGTH);
            let mapped = map_to_plank(screen_x, screen_y, 250.0, 40.0, 0.0).unwrap();
            assert!((mapped - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn mapped_click_then_place_on_tilted_plank() {
    let mut model = empty_plank();
    model.place(100.0, weight(5)).unwrap();
    let angle = model.current_angle();

    // Click on the surface of the tilted plank, 80 units right of the pivot
    let (sin_a, cos_a) = f64::from(angle).to_radians().sin_cos();
    let position = map_to_plank(
        640.0 + 80.0 * cos_a,
        360.0 + 80.0 * sin_a,
        640.0,
        360.0,
        f64::from(angle),
    )
    .unwrap();
    assert!((position - 280.0).abs() < 1e-9);

    model.place(position, weight(5)).unwrap();
    assert_eq!(model.current_angle(), -10);
}
