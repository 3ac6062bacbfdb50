//! TypeScript import builder.

use gqlts_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::{ImportCollector, ModuleImport},
};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn from_module(module: &str, import: &ModuleImport) -> Self {
        let base = import
            .symbols
            .iter()
            .fold(Import::new(module), |i, s| i.named(s.as_str()));
        if import.type_only { base.type_only() } else { base }
    }

    /// One import statement per collected module, in collection order.
    pub fn from_collector(imports: &ImportCollector) -> Vec<Import> {
        imports
            .iter()
            .map(|(module, import)| Self::from_module(module, import))
            .collect()
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            return format!("import \"{}\";", self.from);
        }
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_import() {
        let i = Import::new("./enums/color").named("Color").build();
        assert_eq!(i, "import { Color } from \"./enums/color\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("dayjs").named("Dayjs").type_only().build();
        assert_eq!(i, "import type { Dayjs } from \"dayjs\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }

    #[test]
    fn test_from_collector_keeps_order_and_flavor() {
        let mut collector = ImportCollector::new();
        collector.add_type("./item", "Item");
        collector.add("./enums/color", "Color");

        let rendered: Vec<_> = Import::from_collector(&collector)
            .iter()
            .map(Import::build)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "import type { Item } from \"./item\";\n",
                "import { Color } from \"./enums/color\";\n",
            ]
        );
    }
}
