//! CLI command implementations

pub mod completion;
pub mod scan;
