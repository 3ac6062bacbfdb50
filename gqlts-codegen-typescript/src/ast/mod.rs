//! TypeScript AST builders for the declarations gqlts emits.
//!
//! Each builder implements [`Renderable`](gqlts_codegen::builder::Renderable)
//! and can also be rendered on its own with `build()`.

mod enums;
mod imports;
mod interface;
mod types;

pub use enums::Enum;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use types::{TypeAlias, Union};
