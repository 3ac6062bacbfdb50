//! Select phase - computes the walk plan.

use std::collections::HashMap;

use eyre::Result;
use gqlts_core::lower_first;
use gqlts_schema::{TypeKind, is_builtin_scalar, is_meta_type};

use crate::pipeline::{CompilationContext, Diagnostic, Phase, Selection};

/// Partitions the schema into the enum pass and the declaration pass.
///
/// Meta-types, ignored types and built-in scalars are left out. Two types
/// whose names differ only in the first letter's case would be written to
/// the same file; that is reported as an error.
pub struct SelectPhase;

impl Phase for SelectPhase {
    fn name(&self) -> &'static str {
        "select"
    }

    fn description(&self) -> &'static str {
        "Choose the types to generate, enums first"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut selection = Selection::default();
        let mut enum_files: HashMap<String, &str> = HashMap::new();
        let mut type_files: HashMap<String, &str> = HashMap::new();
        let mut diagnostics = Vec::new();

        for ty in ctx.schema.types() {
            let name = ty.name();
            if is_meta_type(name) || is_builtin_scalar(name) {
                continue;
            }
            if ctx.options.ignore.contains(name) {
                tracing::debug!(name, "type ignored");
                continue;
            }

            let files = match ty.kind() {
                TypeKind::Enum => {
                    selection.enums.push(name.to_string());
                    &mut enum_files
                }
                TypeKind::InputObject => {
                    selection.others.push(name.to_string());
                    continue;
                }
                _ => {
                    selection.others.push(name.to_string());
                    &mut type_files
                }
            };

            if let Some(previous) = files.insert(lower_first(name), name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("types '{previous}' and '{name}' would be written to the same file"),
                    )
                    .at(name),
                );
            }
        }

        tracing::debug!(
            enums = selection.enums.len(),
            others = selection.others.len(),
            "walk plan ready"
        );

        ctx.diagnostics.extend(diagnostics);
        ctx.selection = Some(selection);
        Ok(())
    }
}
