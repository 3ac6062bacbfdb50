//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at the current indentation level.
///
/// Consuming methods (returning `Self`) chain; the `push_*` methods
/// (returning `&mut Self`) suit loops and fragment emitters.
///
/// # Example
///
/// ```
/// use gqlts_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface Item {")
///     .indent()
///     .line("id: string;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface Item {\n  id: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit every fragment of a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent().push_line(&close);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_custom_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .line("{")
            .indent()
            .line("a;")
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "{\n\ta;\n}\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("// generated"),
                    CodeFragment::block(
                        "export enum Color {",
                        vec![
                            CodeFragment::line("RED = \"RED\","),
                            CodeFragment::block("/*", vec![CodeFragment::line("nested")], "*/"),
                        ],
                        "}",
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "// generated\nexport enum Color {\n  RED = \"RED\",\n  /*\n    nested\n  */\n}\n"
        );
    }
}
