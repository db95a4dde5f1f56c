//! Bounce simulations for the Hyperbounce demos
//!
//! Each demo's state advances one discrete step per frame with no notion
//! of wall-clock time, so everything here is deterministic and testable
//! without a window:
//! - [`SquareSim`] - ball inside a rotating square, collisions resolved in
//!   the square's local frame
//! - [`TesseractSim`] - ball inside the static `[-1, 1]^4` hypercube; the
//!   container's rotation is applied at render time only

mod bounce;
pub mod square;
pub mod tesseract;

pub use square::{SquareParams, SquareSim};
pub use tesseract::{TesseractParams, TesseractSim};
