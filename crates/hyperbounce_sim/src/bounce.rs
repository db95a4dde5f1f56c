//! Single-axis elastic reflection

/// Clamp `pos` into `[min, max]` and negate `vel` if it crossed either
/// bound. Returns whether a reflection happened.
///
/// Walls are treated as infinitely massive, so the bounce is perfectly
/// elastic: only the sign of the velocity changes.
pub(crate) fn reflect_axis(pos: &mut f32, vel: &mut f32, min: f32, max: f32) -> bool {
    if *pos < min {
        *pos = min;
        *vel = -*vel;
        true
    } else if *pos > max {
        *pos = max;
        *vel = -*vel;
        true
    } else {
        false
    }
}
