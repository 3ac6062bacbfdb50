//! Import collection and deduplication.

use indexmap::{IndexMap, IndexSet};

/// Symbols imported from one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImport {
    /// Symbols in first-reference order.
    pub symbols: IndexSet<String>,
    /// True while every symbol was requested as a type-only import.
    pub type_only: bool,
}

/// Tracks the imports of one declaration and deduplicates them.
///
/// Modules keep the order in which they were first referenced so the
/// rendered import section is deterministic.
///
/// # Example
///
/// ```
/// use gqlts_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./enums/color", "Color");
/// imports.add_type("./item", "Item");
/// imports.add_type("./item", "Item");
///
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, ModuleImport>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value import (`import { X } from "module"`).
    ///
    /// A module imported both ways is rendered as a value import.
    pub fn add(&mut self, module: &str, symbol: &str) {
        let entry = self.entry(module, false);
        entry.type_only = false;
        entry.symbols.insert(symbol.to_string());
    }

    /// Add a type-only import (`import type { X } from "module"`).
    pub fn add_type(&mut self, module: &str, symbol: &str) {
        self.entry(module, true).symbols.insert(symbol.to_string());
    }

    fn entry(&mut self, module: &str, type_only: bool) -> &mut ModuleImport {
        self.imports
            .entry(module.to_string())
            .or_insert_with(|| ModuleImport {
                symbols: IndexSet::new(),
                type_only,
            })
    }

    /// Iterate over all imports in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleImport)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_reference_order() {
        let mut imports = ImportCollector::new();
        imports.add_type("./item", "Item");
        imports.add("./enums/color", "Color");
        imports.add_type("./item", "Item");
        imports.add_type("dayjs", "Dayjs");

        let modules: Vec<_> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, vec!["./item", "./enums/color", "dayjs"]);
        assert_eq!(imports.iter().next().unwrap().1.symbols.len(), 1);
    }

    #[test]
    fn test_import_flavor() {
        let mut imports = ImportCollector::new();
        imports.add("./enums/color", "Color");
        imports.add_type("./item", "Item");

        let flavors: Vec<_> = imports.iter().map(|(_, i)| i.type_only).collect();
        assert_eq!(flavors, vec![false, true]);
    }

    #[test]
    fn test_value_import_wins() {
        let mut imports = ImportCollector::new();
        imports.add_type("./enums/color", "Color");
        imports.add("./enums/color", "Color");

        let (_, import) = imports.iter().next().unwrap();
        assert!(!import.type_only);
    }
}
