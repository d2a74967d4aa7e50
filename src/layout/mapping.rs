use once_cell::sync::Lazy;
use regex::Regex;

use super::destination::Destination;

/// A row of the fixed archive-to-folder mapping table
///
/// Each MoVi archive extracts to a single top-level directory whose contents
/// belong under one destination folder. Two of the archives share a
/// destination (`V3D/`), so destinations merge contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveMapping {
    /// Human-readable name of the mapping, used in logs
    pub title: &'static str,
    /// Name of the distributed archive file
    pub archive: &'static str,
    /// Name of the directory the archive extracts to
    pub extracted_dir: &'static str,
    /// Folder the extracted contents belong under
    pub destination: Destination,
}

/// The archive mappings from the dataset documentation
pub const ARCHIVE_MAPPINGS: [ArchiveMapping; 4] = [
    ArchiveMapping {
        title: "AMASS motion files",
        archive: "F_AMASS.tar",
        extracted_dir: "AMASS",
        destination: Destination::Amass,
    },
    ArchiveMapping {
        title: "Camera calibration parameters",
        archive: "Camera Parameters.tar",
        extracted_dir: "Calib",
        destination: Destination::Calib,
    },
    ArchiveMapping {
        title: "V3D data for subjects 1-45",
        archive: "F_Subjects_1_45.tar",
        extracted_dir: "F_Subjects_1_45",
        destination: Destination::V3d,
    },
    ArchiveMapping {
        title: "V3D data for subjects 46-90",
        archive: "F_Subjects_46_90.tar",
        extracted_dir: "F_Subjects_46_90",
        destination: Destination::V3d,
    },
];

/// Camera footage, e.g. `F_PG1_Subject_12_L.avi`
static VIDEO_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^F_PG\d+_Subject_\d+_L\.avi$")
        .expect("Failed to compile regex pattern for VIDEO_FILE")
});

/// Per-subject AMASS export, e.g. `F_amass_Subject_7.mat`
static AMASS_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^F_amass_Subject_\d+\.mat$")
        .expect("Failed to compile regex pattern for AMASS_FILE")
});

/// Per-subject V3D export, e.g. `F_v3d_Subject_7.mat`
static V3D_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^F_v3d_Subject_\d+\.mat$")
        .expect("Failed to compile regex pattern for V3D_FILE")
});

/// Calibration arrays, e.g. `cameraParams_PG1.npz` or `Extrinsics_PG1.npz`
static CALIB_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(cameraParams|Extrinsics?).*\.npz$")
        .expect("Failed to compile regex pattern for CALIB_FILE")
});

/// Loose-file patterns, checked in order
static FILE_PATTERNS: [(&str, &Lazy<Regex>, Destination); 4] = [
    ("Camera footage", &VIDEO_FILE, Destination::Videos),
    ("AMASS subject file", &AMASS_FILE, Destination::Amass),
    ("V3D subject file", &V3D_FILE, Destination::V3d),
    ("Calibration file", &CALIB_FILE, Destination::Calib),
];

/// Result of classifying an inbox entry against the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMatch {
    /// Folder the entry belongs under
    pub destination: Destination,
    /// Title of the mapping or pattern that matched
    pub title: &'static str,
}

/// Look up the mapping for a distributed archive by its file name
pub fn mapping_for_archive(archive: &str) -> Option<&'static ArchiveMapping> {
    ARCHIVE_MAPPINGS.iter().find(|m| m.archive == archive)
}

/// Classify a top-level inbox entry against the layout
///
/// Directories are matched against the names the archives extract to; files
/// are matched against the loose-file patterns. Entries matching nothing
/// return `None` and are left alone by the organiser.
pub fn classify_entry(name: &str, is_dir: bool) -> Option<EntryMatch> {
    if is_dir {
        return ARCHIVE_MAPPINGS
            .iter()
            .find(|m| m.extracted_dir == name)
            .map(|m| EntryMatch {
                destination: m.destination,
                title: m.title,
            });
    }

    FILE_PATTERNS
        .iter()
        .find(|(_, pattern, _)| pattern.is_match(name))
        .map(|(title, _, destination)| EntryMatch {
            destination: *destination,
            title,
        })
}
