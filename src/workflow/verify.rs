//! Layout verification
//!
//! This module checks the structural property of an organised dataset:
//! each of the four destination folders exists and is non-empty.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::{load_config, read_or_create};
use crate::errors::layout_incomplete_error;
use crate::layout::Destination;
use crate::logging::format_message;

use super::engine::ProcessingOptions;

/// Status of one destination folder under the dataset root
#[derive(Debug, Clone)]
pub struct FolderStatus {
    /// The destination folder
    pub destination: Destination,
    /// Whether the folder exists
    pub exists: bool,
    /// Number of entries in the folder (0 when absent)
    pub entries: usize,
}

impl FolderStatus {
    /// Whether the folder exists and holds at least one entry
    pub fn is_populated(&self) -> bool {
        self.exists && self.entries > 0
    }
}

/// Report on the dataset layout under a root directory
#[derive(Debug, Clone)]
pub struct LayoutReport {
    /// The dataset root that was checked
    pub root: PathBuf,
    /// Per-folder statuses, one per destination
    pub statuses: Vec<FolderStatus>,
}

impl LayoutReport {
    /// Whether every destination folder exists and is non-empty
    pub fn is_complete(&self) -> bool {
        self.statuses.iter().all(FolderStatus::is_populated)
    }

    /// Names of the folders that are missing or empty
    pub fn missing_folders(&self) -> Vec<String> {
        self.statuses
            .iter()
            .filter(|s| !s.is_populated())
            .map(|s| s.destination.dir_name().to_string())
            .collect()
    }
}

/// Checks the four destination folders under the dataset root
///
/// # Errors
/// Returns an error if an existing folder cannot be read
pub fn verify_layout(root: &Path) -> Result<LayoutReport> {
    let mut statuses = Vec::with_capacity(Destination::ALL.len());

    for destination in Destination::ALL {
        let dir = destination.dir_under(root);
        let exists = dir.is_dir();
        let entries = if exists {
            read_dir(&dir)?.filter_map(Result::ok).count()
        } else {
            0
        };

        statuses.push(FolderStatus {
            destination,
            exists,
            entries,
        });
    }

    Ok(LayoutReport {
        root: root.to_path_buf(),
        statuses,
    })
}

/// Verifies the dataset layout and prints a per-folder report
///
/// # Errors
/// * Returns an error if the configuration cannot be loaded, or when the
///   layout is incomplete
pub fn run_verification(options: ProcessingOptions) -> Result<LayoutReport> {
    let config_file_path = read_or_create(options.config_path)?;
    let config = load_config(config_file_path)?;

    let report = verify_layout(&config.root)?;

    println!("Dataset layout under {}:", report.root.display());
    for status in &report.statuses {
        let state = if !status.exists {
            "MISSING".to_string()
        } else if status.entries == 0 {
            "EMPTY".to_string()
        } else {
            format!("{} entries", status.entries)
        };
        let colored_state = if status.is_populated() {
            state.green().to_string()
        } else {
            state.red().bold().to_string()
        };
        println!(
            "  {:<8} {} - {}",
            format!("{}/", status.destination),
            format_message(&state, &colored_state),
            status.destination.describe()
        );
    }

    if report.is_complete() {
        info!("Dataset layout is complete");
        Ok(report)
    } else {
        Err(layout_incomplete_error(report.missing_folders()).into())
    }
}
