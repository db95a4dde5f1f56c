//! Ball bouncing inside a rotating tesseract
//!
//! The container is the static hypercube `[-1, 1]^4` in the ball's own
//! coordinate system. The tesseract's spin is applied to the picture at
//! render time only and never feeds back into the physics, so the bounce
//! pattern is independent of the rotation rates.

use hyperbounce_math::Vec4;
use serde::{Deserialize, Serialize};

use crate::bounce::reflect_axis;

/// Half-extent of the hypercube container on every axis.
pub const HALF_EXTENT: f32 = 1.0;

/// Fixed parameters of the tesseract demo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TesseractParams {
    /// Ball radius in container units
    pub ball_radius: f32,
    /// Initial speed per axis, container units per frame
    pub ball_speed: f32,
    /// XY-plane rotation, degrees per frame
    pub rotation_xy: f32,
    /// ZW-plane rotation, degrees per frame
    pub rotation_zw: f32,
}

impl TesseractParams {
    /// Lower bound for the ball center on each axis.
    #[inline]
    pub fn min_coord(&self) -> f32 {
        -HALF_EXTENT + self.ball_radius
    }

    /// Upper bound for the ball center on each axis.
    #[inline]
    pub fn max_coord(&self) -> f32 {
        HALF_EXTENT - self.ball_radius
    }
}

/// Mutable state of the tesseract demo, advanced once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TesseractSim {
    /// Ball center in unrotated container coordinates
    pub position: Vec4,
    /// Ball velocity, container units per frame
    pub velocity: Vec4,
    /// Accumulated XY-plane angle in degrees, unwrapped
    pub angle_xy: f32,
    /// Accumulated ZW-plane angle in degrees, unwrapped
    pub angle_zw: f32,
}

impl TesseractSim {
    /// Ball at the origin moving diagonally through all four axes.
    pub fn new(params: &TesseractParams) -> Self {
        Self {
            position: Vec4::ZERO,
            velocity: Vec4::splat(params.ball_speed),
            angle_xy: 0.0,
            angle_zw: 0.0,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self, params: &TesseractParams) {
        self.position += self.velocity;

        let min = params.min_coord();
        let max = params.max_coord();
        let mut pos = self.position.to_array();
        let mut vel = self.velocity.to_array();
        for axis in 0..4 {
            reflect_axis(&mut pos[axis], &mut vel[axis], min, max);
        }
        self.position = Vec4::from_array(pos);
        self.velocity = Vec4::from_array(vel);

        // The angles grow without wrap-around; the trig downstream is
        // periodic anyway.
        self.angle_xy += params.rotation_xy;
        self.angle_zw += params.rotation_zw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> TesseractParams {
        TesseractParams {
            ball_radius: 0.2,
            ball_speed: 0.01,
            rotation_xy: 0.5,
            rotation_zw: 0.8,
        }
    }

    #[test]
    fn test_initial_state() {
        let sim = TesseractSim::new(&test_params());
        assert_eq!(sim.position, Vec4::ZERO);
        assert_eq!(sim.velocity, Vec4::splat(0.01));
        assert_eq!(sim.angle_xy, 0.0);
        assert_eq!(sim.angle_zw, 0.0);
    }

    #[test]
    fn test_coord_bounds() {
        let params = test_params();
        assert!((params.min_coord() + 0.8).abs() < 1e-6);
        assert!((params.max_coord() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_simultaneous_reflection_on_all_axes() {
        // All axes move at the same speed from the origin, so they reach
        // the wall together: 0.01 * 80 ~= 0.8, crossing within a step of it.
        let params = test_params();
        let mut sim = TesseractSim::new(&params);

        for _ in 0..79 {
            sim.step(&params);
        }
        let v = sim.velocity.to_array();
        assert!(v.iter().all(|&c| c > 0.0), "no axis may reflect before the wall");

        sim.step(&params);
        if sim.velocity.x > 0.0 {
            // Accumulated rounding left the sum a hair under the wall;
            // one more step must cross it.
            sim.step(&params);
        }
        let pos = sim.position.to_array();
        let vel = sim.velocity.to_array();
        for axis in 0..4 {
            assert!((pos[axis] - 0.8).abs() < 1e-4, "axis {} not clamped to the wall", axis);
            assert!(vel[axis] < 0.0, "axis {} not reflected", axis);
        }
    }

    #[test]
    fn test_clamp_invariant() {
        let params = test_params();
        let mut sim = TesseractSim::new(&params);
        for _ in 0..10_000 {
            sim.step(&params);
            for c in sim.position.to_array() {
                assert!(c >= -0.8 - 1e-5 && c <= 0.8 + 1e-5);
            }
        }
    }

    #[test]
    fn test_reflection_touches_only_crossed_axis() {
        let params = test_params();
        let mut sim = TesseractSim::new(&params);
        // Only x approaches a wall within the test horizon.
        sim.velocity = Vec4::new(0.01, 0.001, -0.002, 0.0005);

        for _ in 0..81 {
            sim.step(&params);
        }
        let vel = sim.velocity.to_array();
        assert!(vel[0] < 0.0);
        assert!((vel[1] - 0.001).abs() < 1e-9);
        assert!((vel[2] + 0.002).abs() < 1e-9);
        assert!((vel[3] - 0.0005).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_does_not_affect_physics() {
        let fast_spin = TesseractParams { rotation_xy: 90.0, rotation_zw: 45.0, ..test_params() };
        let no_spin = TesseractParams { rotation_xy: 0.0, rotation_zw: 0.0, ..test_params() };

        let mut a = TesseractSim::new(&fast_spin);
        let mut b = TesseractSim::new(&no_spin);
        for _ in 0..500 {
            a.step(&fast_spin);
            b.step(&no_spin);
        }
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }

    #[test]
    fn test_angles_accumulate_unwrapped() {
        let params = test_params();
        let mut sim = TesseractSim::new(&params);
        for _ in 0..1_000 {
            sim.step(&params);
        }
        assert!((sim.angle_xy - 500.0).abs() < 1e-2);
        assert!((sim.angle_zw - 800.0).abs() < 1e-2);
    }
}
