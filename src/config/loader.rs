//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::{debug, info};
use serde_yaml::from_str;

use crate::constants::DEFAULT_CONFIG_TEMPLATE;
use crate::errors::{config_parsing_error, file_operation_error};
use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<Config> {
    let config = parse_config(&file)?;
    config.validate(true)?;

    info!(
        "Configuration loaded: inbox {} -> root {}",
        config.inbox.display(),
        config.root.display()
    );

    Ok(config)
}

/// Loads a configuration from a file without checking path existence
///
/// This is primarily used for testing.
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config_for_testing(file: PathBuf) -> Result<Config> {
    let config = parse_config(&file)?;
    config.validate(false)?;
    Ok(config)
}

fn parse_config(file: &PathBuf) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config: Config = from_str(&content_str)
        .map_err(|e| config_parsing_error(e, &format!("{} is not valid YAML", file.display())))?;

    debug!("Parsed configuration file {}", file.display());

    Ok(config)
}

/// Reads an existing configuration file or resolves it against the standard
/// configuration directory if it doesn't exist at the given path
///
/// On first run, a starter configuration is written into the platform
/// configuration directory for the user to edit.
///
/// # Arguments
/// * `config` - Path to the configuration file
///
/// # Errors
/// Returns an error if the starter configuration cannot be written
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if !&config.exists() {
        create_config_if_not_exists(config)
    } else {
        Ok(config)
    }
}

/// Resolves a configuration file against the platform configuration
/// directory, writing a starter configuration if none exists there
fn create_config_if_not_exists(config: PathBuf) -> Result<PathBuf> {
    let folder = find_project_folder()?;
    let path = folder.config_dir().join(config);
    if !path.exists() {
        write_default_config(&path)?;
        info!("Created starter configuration: {}", path.display());
    }
    Ok(path)
}

/// Writes the starter configuration template to the given path
///
/// # Errors
/// Returns an error if the parent directory or the file cannot be created
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
    Ok(())
}

/// Expands `~` and environment variables in a path segment
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => shellexpand::tilde(path).to_string(),
    }
}

/// Appends Windows path separator to bare drive letters
pub fn handle_colon_end(mut path: String) -> String {
    if path.ends_with(':') {
        path += "\\";
    };
    path
}

/// Expands a path segment for use in a PathBuf
pub fn process_path<S: AsRef<str>>(path: S) -> String {
    let p = expand_path(path.as_ref());
    handle_colon_end(p)
}

/// Deserialises a path from a string or an array of segments
///
/// This function is used for the path fields in a Config struct. Segments
/// support `~` and environment-variable expansion.
pub fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PathBufVisitor;

    impl<'de> serde::de::Visitor<'de> for PathBufVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("string or array of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(PathBuf::from(process_path(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(process_path(&segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathBufVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/movi");
        assert!(
            !expanded.starts_with('~'),
            "Tilde should be expanded: {expanded}"
        );
        assert!(expanded.ends_with("movi"));
    }

    #[test]
    fn test_expand_path_env_var() {
        unsafe { std::env::set_var("MOVI_TEST_DIR", "/data/movi") };
        assert_eq!(expand_path("$MOVI_TEST_DIR/inbox"), "/data/movi/inbox");
    }

    #[test]
    fn test_expand_path_missing_env_var_falls_back() {
        // An undefined variable must not panic; the tilde-only expansion
        // leaves it in place.
        let expanded = expand_path("$MOVI_SURELY_UNDEFINED/inbox");
        assert!(expanded.contains("MOVI_SURELY_UNDEFINED"));
    }

    #[test]
    fn test_handle_colon_end() {
        assert_eq!(handle_colon_end("C:".to_string()), "C:\\");
        assert_eq!(handle_colon_end("/data".to_string()), "/data");
    }
}
