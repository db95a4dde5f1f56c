//! Geometry kernel for the Hyperbounce demos
//!
//! Pure math shared by both demos: vector types, coordinate-frame
//! conversions for the rotating square, and double-plane rotation plus
//! projection for the tesseract.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Hypercube`] - the unit tesseract's vertex/edge topology
//!
//! ## Operations
//!
//! - [`frame`] - global/local frame transforms for a rotated 2D container
//! - [`rotate4`] - XY/ZW plane rotation and the 4D-to-2D projection

mod vec2;
mod vec4;
pub mod frame;
pub mod rotate4;
pub mod hypercube;

pub use vec2::Vec2;
pub use vec4::Vec4;
pub use frame::{global_to_local, local_to_global, rotate_degrees, square_corners};
pub use hypercube::Hypercube;
pub use rotate4::{project_to_2d, rotate_xy_zw, PROJECTION_BLEND};
