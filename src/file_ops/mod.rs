//! File operations
//!
//! This module contains components for transferring matched entries into
//! their destination folders.

mod actions;

pub use actions::{transfer_entry, TransferResult};
