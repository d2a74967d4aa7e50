//! Inbox discovery
//!
//! This module contains components for scanning the inbox directory and
//! matching its entries against the dataset layout.

mod matcher;
mod scanner;

pub use matcher::{match_entries, MatchOutcome};
pub use scanner::{scan_inbox, EntryInfo};
