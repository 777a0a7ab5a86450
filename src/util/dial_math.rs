//! Shared dial/angle math for the clock navigation control.

#[cfg(test)]
#[path = "dial_math_test.rs"]
mod dial_math_test;

pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Shortest distance between two dial angles, always in `[0, 180]`.
pub fn angular_delta_deg(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Dial angle of a pointer relative to the control center.
///
/// Uses `atan2(dx, dy)` shifted by a quarter turn, so a pointer left of the
/// center reads 0°, below reads 90°, right reads 180° and above reads 270°.
/// Returns `None` when the pointer sits exactly on the center.
pub fn pointer_angle_deg(center: (f64, f64), pointer: (f64, f64)) -> Option<f64> {
    let dx = pointer.0 - center.0;
    let dy = pointer.1 - center.1;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return None;
    }
    Some(normalize_degrees_360(dx.atan2(dy).to_degrees() + 90.0))
}

/// CSS transform for the clock hand pointing at `angle` degrees.
pub fn hand_transform(angle: f64) -> String {
    format!("translate(-50%, -100%) rotate({angle}deg)")
}
