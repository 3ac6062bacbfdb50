//! TypeScript declaration generator for gqlts.
//!
//! Turns a walked GraphQL schema into one `.ts` file per type: string enums
//! under `enums/`, interfaces for object and interface types, and type
//! aliases for scalars and unions.
//!
//! ```ignore
//! use gqlts_codegen::pipeline::{Pipeline, WalkOptions};
//! use gqlts_codegen_typescript::{Generator, LanguageCodegen};
//!
//! let ctx = Pipeline::new().run(schema, WalkOptions::default())?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/types/graphql"))?;
//! ```

mod code_file;
mod dependencies;
mod generator;
mod naming;
mod renderer;
mod synthesizer;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use dependencies::DependencyResolver;
pub use generator::Generator;
pub use gqlts_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::{ENUMS_DIR, declaration_path, enum_module, type_module};
pub use renderer::{RenderedType, TypeRenderer};
pub use synthesizer::{Declaration, Synthesizer};
pub use type_mapper::{DATE_MODULE, DATE_TYPE, FALLBACK_TYPE, TEMPORAL_SCALARS, TypeScriptTypeMapper};
