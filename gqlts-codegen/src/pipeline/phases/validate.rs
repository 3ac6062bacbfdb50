//! Validate phase - non-fatal checks of the walk options.

use eyre::Result;
use gqlts_schema::{TypeKind, is_meta_type};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Reports ignore entries that match nothing and input objects that will
/// not be generated. Never fails.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check walk options against the schema"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut diagnostics = Vec::new();

        for name in &ctx.options.ignore {
            if !ctx.schema.contains(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("ignored type '{name}' is not defined in the schema"),
                    )
                    .at(name),
                );
            }
        }

        for ty in ctx.schema.types() {
            let name = ty.name();
            if ty.kind() == TypeKind::InputObject
                && !is_meta_type(name)
                && !ctx.options.ignore.contains(name)
            {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!("input object '{name}' has no generated declaration"),
                    )
                    .at(name),
                );
            }
        }

        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}
