//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use gqlts_schema::Schema;
use indexmap::IndexSet;

use super::diagnostic::{Diagnostic, Severity};

/// Options controlling which types the walk visits.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Type names skipped in both passes.
    pub ignore: IndexSet<String>,
}

impl WalkOptions {
    pub fn new(ignore: impl IntoIterator<Item = String>) -> Self {
        Self {
            ignore: ignore.into_iter().collect(),
        }
    }
}

/// The walk plan: names of the types to synthesize, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Enum types, synthesized in the first pass.
    pub enums: Vec<String>,
    /// Every other selected type, synthesized in the second pass.
    pub others: Vec<String>,
}

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The schema being walked. Never modified by phases.
    pub schema: Schema,
    pub options: WalkOptions,
    /// The walk plan (populated by SelectPhase).
    pub selection: Option<Selection>,
    /// Diagnostics collected during the walk.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema, options: WalkOptions) -> Self {
        Self {
            schema,
            options,
            selection: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the walk plan out of the context.
    ///
    /// Fails if SelectPhase has not run.
    pub fn take_selection(&mut self) -> Result<Selection> {
        self.selection
            .take()
            .ok_or_else(|| eyre!("selection not set - did SelectPhase run?"))
    }
}
