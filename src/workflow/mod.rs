//! Workflow module
//!
//! This module contains the organiser pipeline and the layout verifier.

mod context;
mod engine;
mod verify;

pub use context::{OperationType, PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{organize, ProcessingOptions};
pub use verify::{run_verification, verify_layout, FolderStatus, LayoutReport};
