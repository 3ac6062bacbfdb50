//! Pipeline orchestrator.

use eyre::Result;
use gqlts_schema::Schema;

use super::{
    CompilationContext, Phase, Plugin, WalkOptions,
    phases::{SelectPhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// Runs the built-in phases (validate, select) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(TracePlugin)
///     .run(schema, WalkOptions::new(config.ignore))?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a schema.
    ///
    /// Error diagnostics do not stop the pipeline; callers decide whether
    /// to generate by checking [`CompilationContext::has_errors`].
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails fatally.
    pub fn run(&self, schema: Schema, options: WalkOptions) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema, options);

        let builtin_phases: Vec<Box<dyn Phase>> =
            vec![Box::new(ValidatePhase), Box::new(SelectPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use gqlts_schema::{EnumValue, NamedType};

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Option<usize>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record the number of selected enums"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.selection.as_ref().map(|s| s.enums.len());
            *self.0.lock().unwrap() = count;
            Ok(())
        }
    }

    fn schema() -> Schema {
        [
            NamedType::Enum {
                name: "Color".into(),
                values: vec![EnumValue::new("RED")],
            },
            NamedType::Object {
                name: "Item".into(),
                fields: vec![],
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_pipeline_selects() {
        let ctx = Pipeline::new()
            .run(schema(), WalkOptions::default())
            .expect("pipeline should succeed");

        let selection = ctx.selection.expect("selection should be set");
        assert_eq!(selection.enums, vec!["Color"]);
        assert_eq!(selection.others, vec!["Item"]);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(schema(), WalkOptions::default())
            .expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 2);
        assert_eq!(after.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_custom_phase_runs_after_select() {
        let seen = Arc::new(Mutex::new(None));

        Pipeline::new()
            .phase(RecordingPhase(seen.clone()))
            .run(schema(), WalkOptions::default())
            .expect("pipeline should succeed");

        assert_eq!(*seen.lock().unwrap(), Some(1));
    }

    #[test]
    fn test_plugin_error_aborts() {
        struct Failing;
        impl Plugin for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }
            fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
                eyre::bail!("refusing to run {phase}")
            }
        }

        let err = Pipeline::new()
            .plugin(Failing)
            .run(schema(), WalkOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("validate"));
    }
}
