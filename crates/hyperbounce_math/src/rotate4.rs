//! Double-plane rotation and 4D-to-2D projection
//!
//! The tesseract spins in exactly two of SO(4)'s six rotation planes: XY
//! and ZW. The planes share no axis, so the two rotations commute and the
//! composition stays easy to reason about while still looking properly 4D.
//!
//! Projection to the screen is a fixed-weight blend of the extra axes into
//! the display axes rather than a perspective divide; z leans into x and w
//! into y.

use crate::{Vec2, Vec4};

/// Weight of the z/w axes in the projected x/y coordinates.
pub const PROJECTION_BLEND: f32 = 0.5;

/// Rotate a point in the XY plane, then the ZW plane.
///
/// Angles are in degrees, counter-clockwise within each plane. The XY step
/// leaves z and w untouched and the ZW step leaves x and y untouched, so
/// applying the planes in either order gives the same result.
pub fn rotate_xy_zw(p: Vec4, angle_xy_degrees: f32, angle_zw_degrees: f32) -> Vec4 {
    let r_xy = angle_xy_degrees.to_radians();
    let r_zw = angle_zw_degrees.to_radians();

    let (sin_xy, cos_xy) = r_xy.sin_cos();
    let (sin_zw, cos_zw) = r_zw.sin_cos();

    Vec4::new(
        p.x * cos_xy - p.y * sin_xy,
        p.x * sin_xy + p.y * cos_xy,
        p.z * cos_zw - p.w * sin_zw,
        p.z * sin_zw + p.w * cos_zw,
    )
}

/// Project a 4D point to 2D: `(x + K*z, y + K*w)` with `K` =
/// [`PROJECTION_BLEND`].
#[inline]
pub fn project_to_2d(p: Vec4) -> Vec2 {
    Vec2::new(
        p.x + PROJECTION_BLEND * p.z,
        p.y + PROJECTION_BLEND * p.w,
    )
}
