//! Entry matching functionality
//!
//! This module contains functions for matching inbox entries against the
//! dataset layout.

use colored::Colorize;
use log::{debug, info};
use rayon::prelude::*;

use crate::layout::{classify_entry, EntryMatch};
use crate::logging::format_message;

use super::scanner::EntryInfo;

/// Result of matching an inbox entry against the layout
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The entry information
    pub entry: EntryInfo,
    /// The layout match, if any
    pub matched: Option<EntryMatch>,
}

/// Matches inbox entries against the dataset layout
///
/// Classification is pure name matching, so the entries are matched in
/// parallel. Unmatched entries are kept in the result so the workflow can
/// report them as skipped.
pub fn match_entries(entries: Vec<EntryInfo>) -> Vec<MatchOutcome> {
    let outcomes: Vec<MatchOutcome> = entries
        .into_par_iter()
        .map(|entry| {
            let matched = classify_entry(&entry.name, entry.is_dir);
            MatchOutcome { entry, matched }
        })
        .collect();

    for outcome in &outcomes {
        match &outcome.matched {
            Some(layout_match) => {
                let message = format!(
                    "{} found! Filing under {}/ ({}).",
                    outcome.entry.name, layout_match.destination, layout_match.title
                );
                let colored_message = format!(
                    "{} found! Filing under {}/ ({}).",
                    outcome.entry.name.bold(),
                    layout_match.destination,
                    layout_match.title
                );
                info!("{}", format_message(&message, &colored_message));
            }
            None => {
                debug!("No layout match for entry: {}", outcome.entry.name);
            }
        }
    }

    outcomes
}
