//! Where declarations live and how other files import them.
//!
//! Enum declarations are written to `enums/<name>.ts`, every other
//! declaration to `<name>.ts`, where `<name>` is the type name with its first
//! letter lowercased. Import specifiers are relative to a non-enum file.

use gqlts_core::lower_first;

/// Directory, relative to the output root, holding enum declarations.
pub const ENUMS_DIR: &str = "enums";

/// Path of a declaration file relative to the output root.
pub fn declaration_path(type_name: &str, is_enum: bool) -> String {
    if is_enum {
        format!("{}/{}.ts", ENUMS_DIR, lower_first(type_name))
    } else {
        format!("{}.ts", lower_first(type_name))
    }
}

/// Import specifier for an enum declaration.
pub fn enum_module(type_name: &str) -> String {
    format!("./{}/{}", ENUMS_DIR, lower_first(type_name))
}

/// Import specifier for a non-enum declaration.
pub fn type_module(type_name: &str) -> String {
    format!("./{}", lower_first(type_name))
}
