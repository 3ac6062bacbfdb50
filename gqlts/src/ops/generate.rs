//! Generate operation - schema to TypeScript declarations.

use eyre::{Context, Result, bail};
use gqlts_codegen::{
    language::LanguageCodegen,
    pipeline::{Pipeline, WalkOptions},
};
use gqlts_codegen_typescript::Generator;
use gqlts_schema::{Config, Schema};

use super::TracePlugin;
use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Execute the generate operation.
///
/// Walks the schema and either writes the declarations into the configured
/// output directory or, with `dry_run`, returns their contents.
pub fn generate(config: &Config, schema: Schema, dry_run: bool) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .plugin(TracePlugin)
        .run(schema, WalkOptions::new(config.ignore.iter().cloned()))
        .wrap_err("schema walk failed")?;

    let warnings: Vec<String> = ctx.warnings().map(ToString::to_string).collect();

    if ctx.has_errors() {
        let errors: Vec<String> = ctx.errors().map(ToString::to_string).collect();
        bail!("schema walk reported errors:\n  {}", errors.join("\n  "));
    }

    let generator = Generator::from_context(ctx)?;

    let result = if dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let written = generator
            .generate(&config.out_dir)
            .wrap_err("failed to generate declarations")?;
        tracing::info!(files = written.len(), out_dir = %config.out_dir.display(), "declarations written");

        GenerationResult::Written(WrittenResult {
            output_dir: config.out_dir.clone(),
            enums: written.enums,
            types: written.types,
        })
    };

    Ok(GenerateReport {
        source: config.schema.to_string(),
        warnings,
        result,
    })
}
