//! Generate command report data structures.

use std::path::PathBuf;

use gqlts_codegen::language::PreviewFile;

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the schema came from.
    pub source: String,
    /// Warning diagnostics from the schema walk.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview of every file, enums first.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Enum files, relative to `output_dir`.
    pub enums: Vec<String>,
    /// Every other file, relative to `output_dir`.
    pub types: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Schema", &self.source);
        out.key_value("Enums", &written.enums.len().to_string());
        out.key_value("Types", &written.types.len().to_string());
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for file in written.enums.iter().chain(&written.types) {
            out.added_item(file);
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}
