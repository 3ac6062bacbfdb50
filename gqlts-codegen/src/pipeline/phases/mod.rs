//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - checks the walk options against the schema
//! - [`SelectPhase`] - computes the walk plan

mod select;
mod validate;

pub use select::SelectPhase;
pub use validate::ValidatePhase;
