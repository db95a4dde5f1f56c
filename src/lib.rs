//! Hyperbounce - bouncing-ball demos in rotating containers
//!
//! Two binaries share this crate: `square` (2D, ball inside a rotating
//! square) and `tesseract` (4D, ball inside a spinning tesseract projected
//! to the screen). The library holds the configuration layer, the
//! fixed-rate frame loop, and the demo drivers that tie simulation state to
//! the renderer.

pub mod app;
pub mod config;
pub mod demos;
