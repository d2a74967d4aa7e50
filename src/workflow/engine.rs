//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, error, info};

use crate::config::{load_config, read_or_create};
use crate::discovery::{match_entries, scan_inbox};
use crate::file_ops::transfer_entry;

use super::context::{OperationType, PlannedOperation, WorkflowContext};

/// Options for processing the inbox
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to actually perform transfers (false) or just simulate them (true)
    pub dry_run: bool,
}

/// Organises the inbox into the dataset layout
///
/// This function orchestrates the workflow steps:
/// 1. Read the configuration
/// 2. Scan the inbox for top-level entries
/// 3. Match each entry against the dataset layout
/// 4. Transfer matched entries into their destination folders; entries with
///    no layout match stay in the inbox and are counted as skipped
///
/// # Arguments
/// * `options` - Options for processing the inbox
///
/// # Returns
/// * `Result<WorkflowContext>` - The workflow context with statistics or an error
///
/// # Errors
/// * Returns an error if the configuration cannot be loaded or the inbox cannot be read
pub fn organize(options: ProcessingOptions) -> Result<WorkflowContext> {
    // Step 1: Read the configuration
    let config_file_path = read_or_create(options.config_path)?;
    let config = load_config(config_file_path)?;

    let mut context = WorkflowContext::new(config.clone(), options.dry_run);

    // Step 2: Scan the inbox
    let entries = scan_inbox(&config.inbox, &config.ignore)?;

    if entries.is_empty() {
        info!("No entries found in the inbox");
        return Ok(context);
    }

    info!(
        "Processing {} entries{}...",
        entries.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    // Step 3: Match entries against the dataset layout
    let outcomes = match_entries(entries);

    // Step 4: Transfer matched entries
    for outcome in outcomes {
        context.increment_entries_processed();

        let Some(layout_match) = outcome.matched else {
            debug!("Leaving unmatched entry in place: {}", outcome.entry.name);
            context.increment_entries_skipped();
            continue;
        };

        context.increment_entries_matched();

        let destination_dir = layout_match.destination.dir_under(&config.root);

        let transfer_result = match transfer_entry(
            &outcome.entry,
            &destination_dir,
            config.copy,
            !options.dry_run,
        ) {
            Ok(result) => result,
            Err(e) => {
                error!("Failed to transfer {}: {e}", outcome.entry.name);
                context.increment_errors();
                continue;
            }
        };

        if transfer_result.success {
            if config.copy {
                context.increment_entries_copied();
            } else {
                context.increment_entries_moved();
            }

            // Track the planned transfer in dry-run mode
            if options.dry_run {
                context.add_planned_operation(PlannedOperation {
                    source: transfer_result.source_path.clone(),
                    destination: transfer_result.target_path.clone(),
                    operation_type: if config.copy {
                        OperationType::Copy
                    } else {
                        OperationType::Move
                    },
                    mapping_title: layout_match.title.to_string(),
                });
            }
        }
    }

    info!(
        "Finished processing {} entries",
        context.stats.entries_processed
    );

    // Display detailed output for planned transfers in dry-run mode
    if options.dry_run && !context.planned_operations.is_empty() {
        print_plan(&context);
    }

    Ok(context)
}

/// Prints the planned transfers collected during a dry run
fn print_plan(context: &WorkflowContext) {
    println!("\nDetailed plan of operations:");
    println!("===========================");

    let mut move_operations = Vec::new();
    let mut copy_operations = Vec::new();

    for op in &context.planned_operations {
        match op.operation_type {
            OperationType::Move => move_operations.push(op),
            OperationType::Copy => copy_operations.push(op),
        }
    }

    if !move_operations.is_empty() {
        println!("\nEntries to be moved:");
        println!("-------------------");
        for op in move_operations.iter() {
            println!("Mapping: {}", op.mapping_title);
            println!("  From: {}", op.source.display());
            println!("  To:   {}", op.destination.display());
        }
    }

    if !copy_operations.is_empty() {
        println!("\nEntries to be copied:");
        println!("--------------------");
        for op in copy_operations.iter() {
            println!("Mapping: {}", op.mapping_title);
            println!("  From: {}", op.source.display());
            println!("  To:   {}", op.destination.display());
        }
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Entries to be moved:  {}", move_operations.len());
    println!("  Entries to be copied: {}", copy_operations.len());
    println!("  Entries skipped:      {}", context.stats.entries_skipped);
    println!("\nRun without --dry flag to execute these operations.");
}
