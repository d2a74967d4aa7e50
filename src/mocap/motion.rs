//! Motion-capture sequences and frame-rate reduction

use crate::constants::MOCAP_FPS;
use crate::errors::{frame_rate_error, generic_error, Result};

use super::camera::{Camera, ImagePoint, Vec3};

/// A marker/joint sequence from a capture session
///
/// Every frame holds the same number of markers. The skeleton is described
/// by parent indices, `None` marking the root joint.
#[derive(Debug, Clone)]
pub struct MotionSequence {
    frames: Vec<Vec<Vec3>>,
    /// Parent joint index for each marker, `None` for the root
    pub parents: Vec<Option<usize>>,
    /// Frame rate the sequence was captured at
    pub fps: u32,
}

impl MotionSequence {
    /// Creates a new sequence
    ///
    /// # Errors
    /// Returns an error if the frame rate is zero or the frames disagree on
    /// their marker count
    pub fn new(frames: Vec<Vec<Vec3>>, parents: Vec<Option<usize>>, fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(generic_error("Capture frame rate must be positive"));
        }

        if let Some(first) = frames.first() {
            let markers = first.len();
            if frames.iter().any(|frame| frame.len() != markers) {
                return Err(generic_error(
                    "All frames of a motion sequence must hold the same number of markers",
                ));
            }
        }

        Ok(MotionSequence {
            frames,
            parents,
            fps,
        })
    }

    /// Creates a sequence at the MoVi capture rate (120 Hz)
    pub fn at_capture_rate(frames: Vec<Vec<Vec3>>, parents: Vec<Option<usize>>) -> Result<Self> {
        Self::new(frames, parents, MOCAP_FPS)
    }

    /// The frames of the sequence
    pub fn frames(&self) -> &[Vec<Vec3>] {
        &self.frames
    }

    /// Number of frames in the sequence
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of markers per frame
    pub fn marker_count(&self) -> usize {
        self.frames.first().map_or(0, Vec::len)
    }

    /// Reduces the sequence to a lower frame rate by taking every n-th frame
    ///
    /// # Errors
    /// Returns an error if the requested rate is zero, above the capture
    /// rate, or does not divide it evenly
    pub fn reduce_to_fps(&self, fps: u32) -> Result<Vec<Vec<Vec3>>> {
        if fps == 0 || fps > self.fps || self.fps % fps != 0 {
            return Err(frame_rate_error(self.fps, fps));
        }

        let step = (self.fps / fps) as usize;
        Ok(self.frames.iter().step_by(step).cloned().collect())
    }

    /// Projects the sequence onto a camera's image plane at a video frame rate
    ///
    /// The sequence is first reduced to the video rate, then every frame's
    /// markers are projected through the camera.
    ///
    /// # Errors
    /// Returns an error if the frame rate cannot be derived from the capture rate
    pub fn project_for_video(&self, camera: &Camera, fps: u32) -> Result<Vec<Vec<ImagePoint>>> {
        let frames = self.reduce_to_fps(fps)?;
        Ok(frames
            .iter()
            .map(|frame| camera.project_points(frame))
            .collect())
    }
}
