use std::fmt;
use std::path::{Path, PathBuf};

/// One of the four canonical folders of an organised MoVi dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Marker/joint motion data in the AMASS format
    Amass,
    /// Camera rotation and translation parameters for the capture rig
    Calib,
    /// Motion data processed with V3D
    V3d,
    /// Raw camera footage
    Videos,
}

impl Destination {
    /// All destinations, in the order the dataset documentation lists them
    pub const ALL: [Destination; 4] = [
        Destination::Amass,
        Destination::Calib,
        Destination::V3d,
        Destination::Videos,
    ];

    /// The on-disk folder name under the dataset root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Destination::Amass => "AMASS",
            Destination::Calib => "Calib",
            Destination::V3d => "V3D",
            Destination::Videos => "Videos",
        }
    }

    /// The kind of data the folder holds
    pub fn describe(&self) -> &'static str {
        match self {
            Destination::Amass => "motion-capture marker and joint data",
            Destination::Calib => "camera calibration parameters",
            Destination::V3d => "V3D-processed motion data",
            Destination::Videos => "raw video files",
        }
    }

    /// The full folder path under the given dataset root
    pub fn dir_under(&self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
