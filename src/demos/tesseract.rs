//! Ball bouncing inside a rotating tesseract
//!
//! Physics runs in the unrotated hypercube; this driver applies the spin
//! and the 4D-to-2D projection only when turning state into pixels.

use hyperbounce_math::{project_to_2d, rotate_xy_zw, Hypercube, Vec2, Vec4};
use hyperbounce_render::{shapes, Vertex};
use hyperbounce_sim::{TesseractParams, TesseractSim};

use crate::app::Demo;
use crate::config::AppConfig;

/// Wireframe edge width in pixels
const EDGE_STROKE: f32 = 1.0;
/// Triangle-fan resolution of the ball
const BALL_SEGMENTS: u32 = 32;

/// Driver for the spinning-tesseract demo.
pub struct TesseractDemo {
    params: TesseractParams,
    sim: TesseractSim,
    hypercube: Hypercube,
    screen_center: Vec2,
    pixels_per_unit: f32,
    ball_display_radius: f32,
    wall_color: [f32; 4],
    ball_color: [f32; 4],
}

impl TesseractDemo {
    /// Build from config; the projection is centered in the window.
    pub fn new(config: &AppConfig) -> Self {
        let params = config.tesseract.to_params();
        let sim = TesseractSim::new(&params);
        Self {
            params,
            sim,
            hypercube: Hypercube::unit(),
            screen_center: Vec2::new(
                config.window.width as f32 * 0.5,
                config.window.height as f32 * 0.5,
            ),
            pixels_per_unit: config.tesseract.pixels_per_unit,
            ball_display_radius: config.tesseract.ball_display_radius,
            wall_color: config.rendering.wall_color,
            ball_color: config.rendering.ball_color,
        }
    }

    /// Rotate, project, and map a 4D point to screen pixels.
    fn to_screen(&self, p: Vec4) -> Vec2 {
        let rotated = rotate_xy_zw(p, self.sim.angle_xy, self.sim.angle_zw);
        project_to_2d(rotated) * self.pixels_per_unit + self.screen_center
    }
}

impl Demo for TesseractDemo {
    fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.sim.step(&self.params);
        }
    }

    fn draw(&self) -> Vec<Vertex> {
        let projected: Vec<Vec2> = self
            .hypercube
            .vertices()
            .iter()
            .map(|&v| self.to_screen(v))
            .collect();

        let mut vertices = Vec::with_capacity(self.hypercube.edges().len() * 6);
        for &(a, b) in self.hypercube.edges() {
            vertices.extend(shapes::line(
                projected[a],
                projected[b],
                EDGE_STROKE,
                self.wall_color,
            ));
        }

        vertices.extend(shapes::circle(
            self.to_screen(self.sim.position),
            self.ball_display_radius,
            self.ball_color,
            BALL_SEGMENTS,
        ));
        vertices
    }

    fn status(&self) -> String {
        format!(
            "tesseract xy {:6.1} deg / zw {:6.1} deg",
            self.sim.angle_xy, self.sim.angle_zw
        )
    }
}
