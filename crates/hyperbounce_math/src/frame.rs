//! Global/local frame transforms for a rotated 2D container
//!
//! The square's walls are only axis-aligned in its own co-rotating frame,
//! so collision checks run there. These functions move points and
//! velocities between the fixed screen frame and that local frame.
//!
//! Angles are in degrees; positive angles rotate counter-clockwise.

use crate::Vec2;

/// Rotate a vector about the origin by `angle_degrees`, counter-clockwise
/// for positive angles.
#[inline]
pub fn rotate_degrees(v: Vec2, angle_degrees: f32) -> Vec2 {
    let radians = angle_degrees.to_radians();
    let cos_a = radians.cos();
    let sin_a = radians.sin();
    Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a)
}

/// Express a global-space point in the container's local frame.
///
/// Translates so `center` becomes the origin, then rotates by the negative
/// angle to undo the container's orientation.
#[inline]
pub fn global_to_local(point: Vec2, center: Vec2, angle_degrees: f32) -> Vec2 {
    rotate_degrees(point - center, -angle_degrees)
}

/// Inverse of [`global_to_local`]: rotate by the positive angle, then
/// translate back by `center`.
#[inline]
pub fn local_to_global(local: Vec2, center: Vec2, angle_degrees: f32) -> Vec2 {
    rotate_degrees(local, angle_degrees) + center
}

/// The four corners of a square of side `side` centered at `center`,
/// rotated by `angle_degrees` about its own center.
///
/// Pre-rotation order: top-left, top-right, bottom-right, bottom-left
/// (y grows downward in screen space).
pub fn square_corners(center: Vec2, side: f32, angle_degrees: f32) -> [Vec2; 4] {
    let half = side * 0.5;
    let local = [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ];
    local.map(|corner| local_to_global(corner, center, angle_degrees))
}
