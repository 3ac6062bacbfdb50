//! Check operation - walk the schema without writing anything.

use eyre::{Context, Result};
use gqlts_codegen::pipeline::{Pipeline, WalkOptions};
use gqlts_schema::{Config, Schema, TypeKind};

use super::TracePlugin;
use crate::reports::{CheckReport, KindCount};

const KINDS: [TypeKind; 6] = [
    TypeKind::Object,
    TypeKind::Interface,
    TypeKind::Enum,
    TypeKind::Scalar,
    TypeKind::Union,
    TypeKind::InputObject,
];

/// Execute the check operation.
///
/// Runs the pipeline and returns its diagnostics along with a per-kind
/// summary of the types that would be generated. Input objects are walked
/// but never written, so they always count zero generated.
pub fn check(config: &Config, schema: Schema) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .plugin(TracePlugin)
        .run(schema, WalkOptions::new(config.ignore.iter().cloned()))
        .wrap_err("schema walk failed")?;

    let selected: Vec<&str> = ctx
        .selection
        .iter()
        .flat_map(|s| s.enums.iter().chain(&s.others))
        .map(String::as_str)
        .filter(|name| {
            ctx.schema
                .get(name)
                .is_some_and(|ty| ty.kind() != TypeKind::InputObject)
        })
        .collect();

    let kinds = KINDS
        .iter()
        .map(|&kind| KindCount {
            kind: kind.to_string(),
            defined: ctx.schema.count(kind),
            selected: selected
                .iter()
                .filter(|name| ctx.schema.get(name).is_some_and(|ty| ty.kind() == kind))
                .count(),
        })
        .filter(|count| count.defined > 0)
        .collect();

    Ok(CheckReport {
        source: config.schema.to_string(),
        kinds,
        diagnostics: ctx.diagnostics,
    })
}
