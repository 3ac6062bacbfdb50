//! Shared code generation utilities for gqlts.
//!
//! This crate holds the language-agnostic half of the generator. Target
//! languages (e.g., `gqlts-codegen-typescript`) build on it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Per-declaration state (ImportCollector, EnumRegistry)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, ScalarMapper, etc.)
//! - [`pipeline`] - The schema walk: phases, plugins and diagnostics
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
