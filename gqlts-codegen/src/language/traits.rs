//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit declarations for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Enum files written, relative to the output directory
    pub enums: Vec<String>,
    /// Every other declaration file written, relative to the output directory
    pub types: Vec<String>,
}

impl GenerateResult {
    /// All written files, enums first.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().chain(&self.types).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.enums.len() + self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Maps GraphQL scalar names to target-language type names.
pub trait ScalarMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Look a scalar up in the fixed table.
    fn map_known(&self, name: &str) -> Option<&'static str>;

    /// Type used for scalars outside the fixed table.
    fn fallback(&self) -> &'static str;

    /// Map a scalar, falling back for custom scalars.
    fn map_scalar(&self, name: &str) -> &'static str {
        self.map_known(name).unwrap_or_else(|| self.fallback())
    }

    /// Whether a mapped name is a language primitive that never needs an import.
    fn is_primitive(&self, mapped: &str) -> bool;
}
