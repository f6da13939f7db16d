//! CLI command implementations.

pub mod process;
