//! Core types and utilities for ignorescan
//!
//! This module contains the fundamental data types and error handling
//! used throughout the system.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{Result, ScanError};
pub use types::{Entry, IncludeSet, WalkDecision};
