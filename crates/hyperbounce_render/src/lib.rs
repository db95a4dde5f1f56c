//! Minimal 2D rendering for the Hyperbounce demos
//!
//! Everything a demo draws (the square's outline, the tesseract's
//! wireframe, the ball) is generated CPU-side as a flat triangle list in
//! pixel coordinates (y down) and pushed through a single colored-vertex
//! pipeline each frame.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - wgpu surface, device, queue, and the pipeline
//! - [`vertex::Vertex`] - position + color vertex
//! - [`shapes`] - triangle-list generators for circles, lines, and outlines

pub mod context;
pub mod shapes;
pub mod vertex;

pub use context::RenderContext;
pub use vertex::Vertex;
