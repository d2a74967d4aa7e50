//! Organises extracted MoVi dataset archives into their canonical folders
//!
//! The MoVi motion-capture dataset ships as a handful of archives. Once
//! extracted, their contents belong under four folders of the dataset root:
//! `AMASS/`, `Calib/`, `V3D/` and `Videos/`. This crate implements that
//! directory contract: a layout table, an organiser that files inbox entries
//! into the right folders, and a verifier for the resulting structure.

pub use cli::*;
pub use errors::*;

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod layout;
pub mod logging;
pub mod mocap;
pub mod workflow;
mod utils;

pub mod prelude {
    pub use crate::cli::{check_for_stdout_stream, get_log_file, get_verbosity};
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error, frame_rate_error,
        generic_error, glob_pattern_error, invalid_filename_error, layout_incomplete_error,
        path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::get_configuration_file_option;
    pub use crate::layout::{classify_entry, Destination};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::workflow::{organize, run_verification, verify_layout, ProcessingOptions};
}
