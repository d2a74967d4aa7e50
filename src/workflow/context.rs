//! Workflow context
//!
//! This module defines the context passed between workflow steps.

use std::path::PathBuf;

use crate::config::Config;

/// Represents a planned transfer for dry-run mode
#[derive(Debug, Clone)]
pub struct PlannedOperation {
    /// The source path of the entry
    pub source: PathBuf,
    /// The destination path of the entry
    pub destination: PathBuf,
    /// The type of operation (copy or move)
    pub operation_type: OperationType,
    /// The title of the layout mapping that matched the entry
    pub mapping_title: String,
}

/// Type of transfer operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationType {
    /// Copy operation
    Copy,
    /// Move operation
    Move,
}

/// Context for the workflow
///
/// This struct contains the state that is passed between workflow steps.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The configuration
    pub config: Config,
    /// Whether transfers are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned transfers for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default)]
pub struct WorkflowStats {
    /// Number of inbox entries processed
    pub entries_processed: usize,
    /// Number of entries matched by the layout
    pub entries_matched: usize,
    /// Number of entries moved
    pub entries_moved: usize,
    /// Number of entries copied
    pub entries_copied: usize,
    /// Number of entries left in place
    pub entries_skipped: usize,
    /// Number of errors
    pub errors: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(config: Config, dry_run: bool) -> Self {
        WorkflowContext {
            config,
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Adds a planned transfer to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Increments the number of entries processed
    pub fn increment_entries_processed(&mut self) {
        self.stats.entries_processed += 1;
    }

    /// Increments the number of entries matched
    pub fn increment_entries_matched(&mut self) {
        self.stats.entries_matched += 1;
    }

    /// Increments the number of entries moved
    pub fn increment_entries_moved(&mut self) {
        self.stats.entries_moved += 1;
    }

    /// Increments the number of entries copied
    pub fn increment_entries_copied(&mut self) {
        self.stats.entries_copied += 1;
    }

    /// Increments the number of entries left in place
    pub fn increment_entries_skipped(&mut self) {
        self.stats.entries_skipped += 1;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
