//! Transfer functionality
//!
//! This module contains functions for moving or copying matched entries
//! into their destination folders.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use anyhow::Result;
use fs_extra::{dir, file};
use log::debug;

use crate::discovery::EntryInfo;
use crate::errors::file_operation_error;

/// Result of transferring an entry
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Whether the operation was successful
    pub success: bool,
}

/// Transfers an inbox entry into its destination folder
///
/// Files land inside the destination folder under their own name.
/// Directories have their *contents* merged into the destination folder,
/// because two archives (the `F_Subjects_*` pair) share the `V3D/` folder.
/// Same-named files at the destination are overwritten.
///
/// # Arguments
/// * `entry` - The inbox entry to transfer
/// * `destination_dir` - The folder the entry belongs under
/// * `copy` - Whether to copy the entry instead of moving it
/// * `run_execution` - Whether to actually perform the transfer (true) or just simulate it (false)
///
/// # Errors
/// * Returns an error if the destination cannot be created or the transfer fails
pub fn transfer_entry(
    entry: &EntryInfo,
    destination_dir: &Path,
    copy: bool,
    run_execution: bool,
) -> Result<TransferResult> {
    let target_path = if entry.is_dir {
        destination_dir.to_path_buf()
    } else {
        destination_dir.join(&entry.name)
    };

    if !run_execution {
        // Simulation mode, don't touch the filesystem
        debug!(
            "Simulating transfer: {} -> {}",
            entry.path.display(),
            target_path.display()
        );
        return Ok(TransferResult {
            source_path: entry.path.clone(),
            target_path,
            success: true,
        });
    }

    create_dir_all(destination_dir).map_err(|e| {
        file_operation_error(e, destination_dir.to_path_buf(), "create directory")
    })?;

    if entry.is_dir {
        transfer_directory(entry, destination_dir, copy)?;
    } else {
        transfer_file(entry, &target_path, copy)?;
    }

    Ok(TransferResult {
        source_path: entry.path.clone(),
        target_path,
        success: true,
    })
}

/// Merges a directory's contents into the destination folder
fn transfer_directory(entry: &EntryInfo, destination_dir: &Path, copy: bool) -> Result<()> {
    let options = dir::CopyOptions::new().overwrite(true).content_only(true);

    if copy {
        debug!(
            "Copying directory contents: {} -> {}",
            entry.path.display(),
            destination_dir.display()
        );
        dir::copy(&entry.path, destination_dir, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), entry.path.clone(), "copy")
        })?;
    } else {
        debug!(
            "Moving directory contents: {} -> {}",
            entry.path.display(),
            destination_dir.display()
        );
        dir::move_dir(&entry.path, destination_dir, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), entry.path.clone(), "move")
        })?;
    }

    Ok(())
}

/// Moves or copies a single file into the destination folder
fn transfer_file(entry: &EntryInfo, target_path: &Path, copy: bool) -> Result<()> {
    let options = file::CopyOptions::new().overwrite(true);

    if copy {
        debug!(
            "Copying file: {} -> {}",
            entry.path.display(),
            target_path.display()
        );
        file::copy(&entry.path, target_path, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), entry.path.clone(), "copy")
        })?;
    } else {
        debug!(
            "Moving file: {} -> {}",
            entry.path.display(),
            target_path.display()
        );
        file::move_file(&entry.path, target_path, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), entry.path.clone(), "move")
        })?;
    }

    Ok(())
}
