//! Line inclination between two joints.
//!
//! The tracker works on integer degrees. Direction is derived by differencing
//! two inclinations, never from the sign of a single one.

use crate::constants::{HALF_TURN_DEGREES, VERTICAL_INCLINATION};
use crate::skeleton::Point3D;

/// Inclination of the line through two points, in integer degrees in [0, 180).
///
/// The slope is converted with `atan` and truncated toward zero; negative
/// angles are folded by adding 180. A non-finite slope (vertical line or
/// non-finite input) saturates to 90.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // atan output is bounded to (-90, 90)
pub fn inclination_degrees(x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    let slope = (y2 - y1) / (x2 - x1);
    if !slope.is_finite() {
        return VERTICAL_INCLINATION;
    }

    let angle = slope.atan().to_degrees() as i32;
    if angle < 0 {
        angle + HALF_TURN_DEGREES
    } else {
        angle
    }
}

/// Inclination in the frontal (x, y) plane
#[must_use]
pub fn inclination_xy(from: &Point3D, to: &Point3D) -> i32 {
    inclination_degrees(from.x, from.y, to.x, to.y)
}

/// Inclination in the sagittal (z, y) plane
#[must_use]
pub fn inclination_zy(from: &Point3D, to: &Point3D) -> i32 {
    inclination_degrees(from.z, from.y, to.z, to.y)
}
