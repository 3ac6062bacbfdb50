//! TypeScript string enum builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for exported string enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    members: Vec<(String, String)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member with its string value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("export enum {} {{}}", self.name))];
        }

        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            self.members
                .iter()
                .map(|(name, value)| {
                    CodeFragment::line(format!("{} = \"{}\",", name, escape(value)))
                })
                .collect(),
            "}",
        )]
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_members_in_order() {
        let e = Enum::new("Color")
            .member("RED", "RED")
            .member("GREEN", "GREEN")
            .build();
        assert_eq!(
            e,
            "export enum Color {\n  RED = \"RED\",\n  GREEN = \"GREEN\",\n}\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Never").build(), "export enum Never {}\n");
    }

    #[test]
    fn test_value_is_escaped() {
        let e = Enum::new("Quote").member("Q", "say \"hi\"").build();
        assert!(e.contains(r#"Q = "say \"hi\"","#));
    }
}
