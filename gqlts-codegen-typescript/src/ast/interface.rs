//! TypeScript interface builder.

use gqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property of a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn line(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty))
    }

    /// Add an optional field.
    pub fn optional_field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty).optional())
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!(
                "export interface {} {{}}",
                self.name
            ))];
        }

        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::line(f.line()))
                .collect(),
            "}",
        )]
    }
}
