//! Per-declaration generation state.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`EnumRegistry`] - Enum names known once the enum pass has finished

mod enums;
mod imports;

pub use enums::EnumRegistry;
pub use imports::{ImportCollector, ModuleImport};
