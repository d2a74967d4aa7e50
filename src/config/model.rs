//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::errors::{directory_not_found_error, glob_pattern_error};

use super::loader::deserialize_path;

/// Configuration for the MoVi dataset organiser
///
/// Contains the dataset root, the inbox directory holding extracted archive
/// contents, and options controlling how entries are transferred.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Dataset root the canonical folders live under
    #[serde(deserialize_with = "deserialize_path")]
    pub root: PathBuf,
    /// Directory to scan for extracted archive contents
    #[serde(deserialize_with = "deserialize_path")]
    pub inbox: PathBuf,
    /// Whether to copy entries instead of moving them
    #[serde(default)]
    pub copy: bool,
    /// Glob patterns for inbox entries the organiser must skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Config {
    /// Validates the configuration
    ///
    /// Checks that the configured glob patterns compile and, when
    /// `check_paths` is set, that the root and inbox directories exist.
    ///
    /// # Arguments
    /// * `check_paths` - Whether to check if paths exist and are accessible
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self, check_paths: bool) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!(
                "No dataset root specified in configuration. A root directory is required."
            ));
        }

        if self.inbox.as_os_str().is_empty() {
            return Err(anyhow!(
                "No inbox directory specified in configuration. An inbox directory is required."
            ));
        }

        if self.root == self.inbox {
            return Err(anyhow!(
                "The inbox directory must differ from the dataset root: {}",
                self.root.display()
            ));
        }

        if check_paths {
            if !self.root.exists() {
                return Err(directory_not_found_error(self.root.clone()).into());
            }

            if !self.root.is_dir() {
                return Err(anyhow!(
                    "Dataset root is not a directory: {}\nPlease specify a valid directory path.",
                    self.root.display()
                ));
            }

            if !self.inbox.exists() {
                return Err(directory_not_found_error(self.inbox.clone()).into());
            }

            if !self.inbox.is_dir() {
                return Err(anyhow!(
                    "Inbox path is not a directory: {}\nPlease specify a valid directory path.",
                    self.inbox.display()
                ));
            }
        }

        for pattern in &self.ignore {
            glob::Pattern::new(pattern).map_err(|e| glob_pattern_error(e, pattern))?;
        }

        Ok(())
    }
}
