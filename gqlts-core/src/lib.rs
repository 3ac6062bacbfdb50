//! Core utilities and types for gqlts.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the schema, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, write_file};
// String utilities
pub use utils::lower_first;
