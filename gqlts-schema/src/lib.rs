//! GraphQL schema model and acquisition for gqlts.
//!
//! This crate owns everything that happens before code generation starts:
//!
//! - [`Schema`] - the immutable, ordered in-memory type map
//! - [`SchemaSource`] - where the schema comes from (SDL file, saved
//!   introspection result, or a live endpoint)
//! - [`Config`] - the `gqlts.toml` configuration and its command-line overrides
//! - [`Error`] - configuration and acquisition failures, rendered with miette

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod introspection;
mod model;
mod sdl;
mod source;

pub use config::{Config, ConfigOverrides, DEFAULT_CONFIG_FILE, DEFAULT_OUT_DIR};
pub use error::{Error, Result};
pub use introspection::{INTROSPECTION_QUERY, fetch_introspection, parse_introspection};
pub use model::{
    BUILTIN_SCALARS, EnumValue, Field, NamedType, Schema, TypeKind, TypeRef, is_builtin_scalar,
    is_meta_type,
};
pub use sdl::parse_sdl;
pub use source::SchemaSource;
