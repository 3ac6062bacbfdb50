//! Core operations.
//!
//! This module contains the business logic for gqlts commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
mod trace;

pub use check::check;
pub use generate::generate;
use gqlts_schema::{Config, Schema};
pub use trace::TracePlugin;

/// Acquire the configured schema.
pub async fn acquire(config: &Config) -> gqlts_schema::Result<Schema> {
    tracing::debug!(source = %config.schema, remote = config.schema.is_remote(), "acquiring schema");
    let schema = config.schema.load(&config.headers).await?;
    tracing::debug!(types = schema.len(), "schema acquired");
    Ok(schema)
}
