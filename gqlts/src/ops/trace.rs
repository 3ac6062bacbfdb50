use eyre::Result;
use gqlts_codegen::pipeline::{CompilationContext, Plugin};

/// Logs phase boundaries and the diagnostics each phase added.
pub struct TracePlugin;

impl Plugin for TracePlugin {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(phase, diagnostics = ctx.diagnostics.len(), "entering phase");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(
            phase,
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "finished phase"
        );
        Ok(())
    }
}
