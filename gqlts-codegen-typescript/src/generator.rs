//! Two-pass TypeScript declaration generator.

use std::path::Path;

use eyre::{Context, Result, bail};
use gqlts_codegen::{
    generation::EnumRegistry,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{CompilationContext, Selection},
};
use gqlts_core::GeneratedFile;
use gqlts_schema::{NamedType, Schema};

use crate::synthesizer::{Declaration, Synthesizer};

/// Generates one TypeScript file per selected schema type.
///
/// Generation runs in two passes. The enum pass synthesizes every enum and
/// yields the [`EnumRegistry`]; the declaration pass receives that registry
/// and synthesizes everything else. The registry cannot be built any other
/// way, so no declaration is ever synthesized against a partial enum set.
pub struct Generator {
    schema: Schema,
    selection: Selection,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let (enums, others) = self.declarations();
        enums
            .into_iter()
            .chain(others)
            .map(|decl| PreviewFile {
                path: decl.relative_path(),
                content: decl.content,
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (enums, others) = self.declarations();

        Ok(GenerateResult {
            enums: write_all(&enums, output_dir)?,
            types: write_all(&others, output_dir)?,
        })
    }
}

impl Generator {
    /// Create a generator from a finished pipeline run.
    ///
    /// Fails if the pipeline reported errors or never selected types.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        if ctx.has_errors() {
            bail!(
                "schema walk reported {} error(s), nothing was generated",
                ctx.error_count()
            );
        }
        let selection = ctx.take_selection()?;
        Ok(Self {
            schema: ctx.schema,
            selection,
        })
    }

    /// Pass 1: synthesize every selected enum.
    pub fn enum_pass(&self) -> (Vec<Declaration>, EnumRegistry) {
        let declarations: Vec<Declaration> = self
            .selected(&self.selection.enums)
            .filter_map(|ty| match ty {
                NamedType::Enum { name, values } => Some(Synthesizer::enumeration(name, values)),
                _ => None,
            })
            .collect();

        let registry = declarations.iter().map(|d| d.name.clone()).collect();
        (declarations, registry)
    }

    /// Pass 2: synthesize every other selected type against the finished registry.
    pub fn declaration_pass(&self, enums: &EnumRegistry) -> Vec<Declaration> {
        let synthesizer = Synthesizer::new(enums);
        self.selected(&self.selection.others)
            .filter_map(|ty| synthesizer.synthesize(ty))
            .collect()
    }

    /// Run both passes, returning enum declarations and the rest.
    pub fn declarations(&self) -> (Vec<Declaration>, Vec<Declaration>) {
        let (enums, registry) = self.enum_pass();
        let others = self.declaration_pass(&registry);
        (enums, others)
    }

    fn selected<'s>(&'s self, names: &'s [String]) -> impl Iterator<Item = &'s NamedType> {
        names.iter().filter_map(|name| self.schema.get(name))
    }
}

fn write_all(declarations: &[Declaration], output_dir: &Path) -> Result<Vec<String>> {
    declarations
        .iter()
        .map(|decl| {
            decl.write(output_dir)
                .wrap_err_with(|| format!("failed to write declaration for '{}'", decl.name))?;
            Ok(decl.relative_path())
        })
        .collect()
}
