//! GraphQL scalar to TypeScript type mapping.

use gqlts_codegen::language::ScalarMapper;

/// The type temporal scalars map to.
pub const DATE_TYPE: &str = "Dayjs";

/// The package [`DATE_TYPE`] is imported from.
pub const DATE_MODULE: &str = "dayjs";

/// Scalars rendered as [`DATE_TYPE`].
pub const TEMPORAL_SCALARS: &[&str] = &["Date", "Time", "DateTime"];

/// Type used for custom scalars.
pub const FALLBACK_TYPE: &str = "any";

const PRIMITIVES: &[&str] = &["string", "number", "boolean"];

/// TypeScript scalar mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl ScalarMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_known(&self, name: &str) -> Option<&'static str> {
        match name {
            "String" | "ID" => Some("string"),
            "Int" | "Float" => Some("number"),
            "Boolean" => Some("boolean"),
            _ if TEMPORAL_SCALARS.contains(&name) => Some(DATE_TYPE),
            _ => None,
        }
    }

    fn fallback(&self) -> &'static str {
        FALLBACK_TYPE
    }

    fn is_primitive(&self, mapped: &str) -> bool {
        PRIMITIVES.contains(&mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_scalar("String"), "string");
        assert_eq!(mapper.map_scalar("ID"), "string");
        assert_eq!(mapper.map_scalar("Int"), "number");
        assert_eq!(mapper.map_scalar("Float"), "number");
        assert_eq!(mapper.map_scalar("Boolean"), "boolean");
        assert_eq!(mapper.map_scalar("Date"), "Dayjs");
        assert_eq!(mapper.map_scalar("Time"), "Dayjs");
        assert_eq!(mapper.map_scalar("DateTime"), "Dayjs");
    }

    #[test]
    fn test_unknown_scalars_fall_back() {
        let mapper = TypeScriptTypeMapper;

        for name in ["JSON", "Upload", "BigInt", "string", "datetime"] {
            assert_eq!(mapper.map_known(name), None, "{name}");
            assert_eq!(mapper.map_scalar(name), "any", "{name}");
        }
    }

    #[test]
    fn test_primitives() {
        let mapper = TypeScriptTypeMapper;

        assert!(mapper.is_primitive("string"));
        assert!(mapper.is_primitive("number"));
        assert!(mapper.is_primitive("boolean"));
        assert!(!mapper.is_primitive("Dayjs"));
        assert!(!mapper.is_primitive("any"));
        assert!(!mapper.is_primitive("Item"));
    }
}
