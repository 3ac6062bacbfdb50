//! Check command report data structures.

use gqlts_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from a schema walk without generation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Where the schema came from.
    pub source: String,
    /// Per-kind type counts, for kinds the schema defines.
    pub kinds: Vec<KindCount>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct KindCount {
    pub kind: String,
    /// Types of this kind in the schema.
    pub defined: usize,
    /// Types of this kind the walk would visit.
    pub selected: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Error | Severity::Warning => out.warning(&diag.to_string()),
                Severity::Info => out.preformatted(&diag.to_string()),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.section(&format!("Types in {}", self.source));
        for count in &self.kinds {
            out.list_item(&format!(
                "{}: {} ({} generated)",
                count.kind, count.defined, count.selected
            ));
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!("✓ {} is valid", self.source));
        }
    }
}
