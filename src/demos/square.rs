//! Ball bouncing inside a rotating square

use hyperbounce_math::Vec2;
use hyperbounce_render::{shapes, Vertex};
use hyperbounce_sim::{SquareParams, SquareSim};

use crate::app::Demo;
use crate::config::AppConfig;

/// Outline width of the square in pixels
const WALL_STROKE: f32 = 2.0;
/// Triangle-fan resolution of the ball
const BALL_SEGMENTS: u32 = 48;

/// Driver for the rotating-square demo.
pub struct SquareDemo {
    params: SquareParams,
    sim: SquareSim,
    wall_color: [f32; 4],
    ball_color: [f32; 4],
}

impl SquareDemo {
    /// Build from config; the square sits at the window center.
    pub fn new(config: &AppConfig) -> Self {
        let center = Vec2::new(
            config.window.width as f32 * 0.5,
            config.window.height as f32 * 0.5,
        );
        let params = config.square.to_params(center);
        let sim = SquareSim::new(&params);
        Self {
            params,
            sim,
            wall_color: config.rendering.wall_color,
            ball_color: config.rendering.ball_color,
        }
    }
}

impl Demo for SquareDemo {
    fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.sim.step(&self.params);
        }
    }

    fn draw(&self) -> Vec<Vertex> {
        let mut vertices =
            shapes::polygon_outline(&self.sim.corners(&self.params), WALL_STROKE, self.wall_color);
        vertices.extend(shapes::circle(
            self.sim.ball_pos,
            self.params.ball_radius,
            self.ball_color,
            BALL_SEGMENTS,
        ));
        vertices
    }

    fn status(&self) -> String {
        format!("square at {:5.1} deg", self.sim.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_steps_simulation() {
        let config = AppConfig::default();
        let mut demo = SquareDemo::new(&config);
        let start = demo.sim.ball_pos;
        demo.advance(3);
        // Speed (4, 4) for 3 frames.
        assert!((demo.sim.ball_pos - start).length() > 16.0);
        assert!((demo.sim.angle - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_emits_outline_and_ball() {
        let config = AppConfig::default();
        let demo = SquareDemo::new(&config);
        let vertices = demo.draw();
        // 4 outline quads plus the ball fan.
        assert_eq!(vertices.len(), 4 * 6 + (BALL_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_zero_steps_is_a_no_op() {
        let config = AppConfig::default();
        let mut demo = SquareDemo::new(&config);
        let before = demo.sim;
        demo.advance(0);
        assert_eq!(demo.sim, before);
    }
}
