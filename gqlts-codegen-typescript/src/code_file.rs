//! Structured TypeScript file generation.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A TypeScript file: an import section followed by the body.
///
/// Imports are separated from the body by one blank line; body elements are
/// separated from each other by one blank line.
///
/// # Example
///
/// ```
/// use gqlts_codegen_typescript::{CodeFile, ast::{Import, TypeAlias}};
///
/// let code = CodeFile::new()
///     .import(Import::new("dayjs").named("Dayjs").type_only())
///     .add(TypeAlias::new("DateTime", "Dayjs"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import type { Dayjs } from \"dayjs\";\n\nexport type DateTime = Dayjs;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Interface, TypeAlias};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_body_without_imports_has_no_leading_blank() {
        let code = CodeFile::new().add(TypeAlias::new("JSON", "any")).render();
        assert_eq!(code, "export type JSON = any;\n");
    }

    #[test]
    fn test_imports_then_blank_then_body() {
        let code = CodeFile::new()
            .import(Import::new("./enums/color").named("Color"))
            .import(Import::new("./item").named("Item").type_only())
            .add(Interface::new("Box").field("color", "Color").field("item", "Item"))
            .render();

        assert_eq!(
            code,
            "import { Color } from \"./enums/color\";\n\
             import type { Item } from \"./item\";\n\
             \n\
             export interface Box {\n  color: Color;\n  item: Item;\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = CodeFile::new()
            .add(TypeAlias::new("A", "string"))
            .add(TypeAlias::new("B", "number"))
            .render_with_indent(Indent::Spaces(4));

        assert_eq!(code, "export type A = string;\n\nexport type B = number;\n");
    }
}
