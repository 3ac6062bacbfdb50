//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that can hook into the pipeline.
///
/// Plugins receive callbacks before and after each phase runs and may
/// inspect the context or add diagnostics.
///
/// # Example
///
/// ```ignore
/// struct Announce;
///
/// impl Plugin for Announce {
///     fn name(&self) -> &'static str { "announce" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         println!("{phase}: {} diagnostics", ctx.diagnostics.len());
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
