use super::*;

#[test]
fn normalize_degrees_360_wraps_values() {
    assert_eq!(normalize_degrees_360(0.0), 0.0);
    assert_eq!(normalize_degrees_360(370.0), 10.0);
    assert_eq!(normalize_degrees_360(-10.0), 350.0);
    assert_eq!(normalize_degrees_360(360.0), 0.0);
}

#[test]
fn angular_delta_is_symmetric_and_bounded() {
    assert_eq!(angular_delta_deg(10.0, 350.0), 20.0);
    assert_eq!(angular_delta_deg(350.0, 10.0), 20.0);
    assert_eq!(angular_delta_deg(45.0, 45.0), 0.0);
    assert_eq!(angular_delta_deg(0.0, 180.0), 180.0);
}

#[test]
fn angular_delta_never_exceeds_half_turn() {
    let mut a = 0.0;
    while a < 360.0 {
        let mut b = 0.0;
        while b < 360.0 {
            let d = angular_delta_deg(a, b);
            assert!(d <= 180.0, "delta({a}, {b}) = {d}");
            assert_eq!(d, angular_delta_deg(b, a));
            b += 7.5;
        }
        a += 7.5;
    }
}

fn assert_angle(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("pointer off center");
    assert!(angular_delta_deg(actual, expected) < 1e-9, "{actual} != {expected}");
}

#[test]
fn pointer_angle_follows_quarter_turn_offset() {
    let center = (100.0, 100.0);
    assert_angle(pointer_angle_deg(center, (50.0, 100.0)), 0.0);
    assert_angle(pointer_angle_deg(center, (100.0, 150.0)), 90.0);
    assert_angle(pointer_angle_deg(center, (150.0, 100.0)), 180.0);
    assert_angle(pointer_angle_deg(center, (100.0, 50.0)), 270.0);
}

#[test]
fn pointer_angle_is_always_non_negative() {
    let angle = pointer_angle_deg((0.0, 0.0), (-10.0, -1.0)).unwrap();
    assert!((0.0..360.0).contains(&angle));
}

#[test]
fn pointer_angle_on_center_is_none() {
    assert_eq!(pointer_angle_deg((12.0, 12.0), (12.0, 12.0)), None);
}

#[test]
fn hand_transform_formats_rotation() {
    assert_eq!(hand_transform(180.0), "translate(-50%, -100%) rotate(180deg)");
    assert_eq!(hand_transform(0.0), "translate(-50%, -100%) rotate(0deg)");
}
