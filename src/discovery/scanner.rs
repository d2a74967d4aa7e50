//! Directory scanning functionality
//!
//! This module contains functions for scanning the inbox directory and
//! collecting its top-level entries.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;
use log::debug;

use crate::errors::{glob_pattern_error, invalid_filename_error, path_operation_error};
use crate::utils::is_hidden_file;

/// A top-level entry found in the inbox directory
///
/// Entries are either files (videos, loose subject exports) or the
/// directories the archives extract to.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// The path to the entry
    pub path: PathBuf,
    /// The entry's file or directory name
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl EntryInfo {
    /// Creates a new EntryInfo from a path
    ///
    /// # Errors
    /// Returns an error if the name cannot be extracted or converted to a string
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.clone(), "read entry name from"))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        let is_dir = path.is_dir();

        Ok(EntryInfo { path, name, is_dir })
    }
}

/// Scans the inbox directory for top-level entries
///
/// Hidden entries and entries matching one of the ignore patterns are
/// filtered out.
///
/// # Arguments
/// * `directory` - The inbox directory to scan
/// * `ignore` - Glob patterns for entries to skip
///
/// # Errors
/// Returns an error if the directory cannot be read or a pattern is invalid
pub fn scan_inbox(directory: &Path, ignore: &[String]) -> Result<Vec<EntryInfo>> {
    debug!("Scanning inbox: {}", directory.display());

    let ignore_patterns = ignore
        .iter()
        .map(|p| Pattern::new(p).map_err(|e| glob_pattern_error(e, p)))
        .collect::<crate::errors::Result<Vec<Pattern>>>()?;

    let entries: Vec<EntryInfo> = read_dir(directory)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter_map(|path| EntryInfo::new(path).ok())
        .filter(|entry| {
            let ignored = ignore_patterns.iter().any(|p| p.matches(&entry.name));
            if ignored {
                debug!("Ignoring entry: {}", entry.name);
            }
            !ignored
        })
        .collect();

    debug!("Found {} entries in inbox", entries.len());

    Ok(entries)
}
