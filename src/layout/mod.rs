//! Dataset layout contract
//!
//! This module defines the four canonical destination folders of the MoVi
//! dataset and the fixed mapping from extracted archive contents to those
//! folders.

mod destination;
mod mapping;

pub use destination::Destination;
pub use mapping::{
    classify_entry, mapping_for_archive, ArchiveMapping, EntryMatch, ARCHIVE_MAPPINGS,
};
