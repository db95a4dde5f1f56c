//! Triangle-list generation for 2D primitives
//!
//! All generators work in pixel coordinates (y down) and emit plain
//! triangle lists for the colored-vertex pipeline.

use hyperbounce_math::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Filled circle as a triangle fan around the center.
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Straight line segment as a quad of the given width.
///
/// Degenerate segments (coincident endpoints) produce no geometry.
pub fn line(p1: Vec2, p2: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = p2 - p1;
    if dir.length_squared() == 0.0 {
        return Vec::new();
    }
    let half = dir.normalized().perp() * (width * 0.5);

    let a = p1 + half;
    let b = p1 - half;
    let c = p2 + half;
    let d = p2 - half;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Closed polygon outline as a loop of line quads.
pub fn polygon_outline(points: &[Vec2], stroke_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        vertices.extend(line(p1, p2, stroke_width, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(10.0, 10.0), 5.0, WHITE, 32);
        assert_eq!(v.len(), 32 * 3);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 200.0);
        for v in circle(center, 20.0, WHITE, 48) {
            let d = (Vec2::new(v.position[0], v.position[1]) - center).length();
            assert!(d <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_line_is_one_quad() {
        let v = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(v.len(), 6);
        // Width spreads evenly across the segment axis.
        assert!(v.iter().all(|v| v.position[1].abs() == 1.0));
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 4.0);
        assert!(line(p, p, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_polygon_outline_vertex_count() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let v = polygon_outline(&square, 2.0, WHITE);
        assert_eq!(v.len(), 4 * 6);
    }
}
