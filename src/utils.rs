use std::fs::create_dir_all;
use std::path::Path;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{generic_error, Result};
use directories::ProjectDirs;

/// Finds (and creates if needed) the platform configuration directory
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}
