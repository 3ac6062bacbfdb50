//! The schema walk.
//!
//! [`Pipeline`] turns a loaded schema into a [`CompilationContext`] that a
//! language generator consumes. It provides:
//!
//! - Explicit phase boundaries (validate → select)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use gqlts_codegen::pipeline::{Pipeline, WalkOptions};
//!
//! let ctx = Pipeline::new().run(schema, WalkOptions::default())?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, Selection, WalkOptions};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
