//! Motion-capture geometry helpers
//!
//! The MoVi dataset pairs 120 Hz marker data with 30 fps camera footage.
//! This module carries the geometry needed to overlay one on the other:
//! projecting world-space marker positions onto the image plane of a
//! calibrated camera, and reducing a capture-rate sequence to a video
//! frame rate. It operates on in-memory values only; reading the dataset's
//! `.mat`/`.npz` files is out of scope.

mod camera;
mod motion;

pub use camera::{Camera, ImagePoint, Mat3, Vec3};
pub use motion::MotionSequence;
