//! Per-type declaration synthesis.

use std::path::{Path, PathBuf};

use gqlts_codegen::{
    builder::Renderable,
    generation::{EnumRegistry, ImportCollector},
    language::ScalarMapper,
};
use gqlts_core::GeneratedFile;
use gqlts_schema::{EnumValue, Field, NamedType};

use crate::{
    CodeFile,
    ast::{Enum, Import, Interface, TypeAlias, Union},
    dependencies::DependencyResolver,
    naming::declaration_path,
    renderer::TypeRenderer,
    type_mapper::{DATE_MODULE, DATE_TYPE, TypeScriptTypeMapper},
};

/// The generated file for one schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub is_enum: bool,
    /// Full file text: imports, a blank line, then the declaration.
    pub content: String,
}

impl Declaration {
    /// Path relative to the output root.
    pub fn relative_path(&self) -> String {
        declaration_path(&self.name, self.is_enum)
    }
}

impl GeneratedFile for Declaration {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Turns schema types into TypeScript declarations.
///
/// Holds the enum registry from the enum pass so field references to enums
/// become value imports.
pub struct Synthesizer<'a> {
    enums: &'a EnumRegistry,
    mapper: TypeScriptTypeMapper,
}

impl<'a> Synthesizer<'a> {
    pub fn new(enums: &'a EnumRegistry) -> Self {
        Self {
            enums,
            mapper: TypeScriptTypeMapper,
        }
    }

    /// Synthesize one declaration.
    ///
    /// Returns `None` for kinds that have no TypeScript counterpart (input
    /// objects); callers skip those silently.
    pub fn synthesize(&self, ty: &NamedType) -> Option<Declaration> {
        let declaration = match ty {
            NamedType::Object { name, fields } => self.object(name, fields),
            NamedType::Interface { name, fields } => self.interface(name, fields),
            NamedType::Enum { name, values } => Self::enumeration(name, values),
            NamedType::Scalar { name } => self.scalar(name),
            NamedType::Union { name, members } => Self::union(name, members),
            NamedType::InputObject { .. } => return None,
        };
        tracing::debug!(
            name = %declaration.name,
            kind = %ty.kind(),
            "synthesized declaration"
        );
        Some(declaration)
    }

    /// Required fields first, then optional ones, each in schema order.
    fn object(&self, name: &str, fields: &[Field]) -> Declaration {
        let renderer = TypeRenderer::new(&self.mapper);
        let mut resolver = DependencyResolver::new(name, self.enums);
        let mut required = Vec::new();
        let mut optional = Vec::new();

        for field in fields {
            let rendered = renderer.render(&field.ty);
            resolver.resolve(&rendered);
            if rendered.required {
                required.push((field.name.as_str(), rendered.text));
            } else {
                optional.push((field.name.as_str(), rendered.text));
            }
        }

        let interface = required
            .into_iter()
            .fold(Interface::new(name), |i, (n, t)| i.field(n, t));
        let interface = optional
            .into_iter()
            .fold(interface, |i, (n, t)| i.optional_field(n, t));

        declaration(name, false, &resolver.finish(), interface)
    }

    /// Interface fields are always rendered required, even when nullable.
    fn interface(&self, name: &str, fields: &[Field]) -> Declaration {
        let renderer = TypeRenderer::new(&self.mapper);
        let mut resolver = DependencyResolver::new(name, self.enums);
        let mut interface = Interface::new(name);

        for field in fields {
            let rendered = renderer.render(&field.ty);
            resolver.resolve(&rendered);
            interface = interface.field(field.name.as_str(), rendered.text);
        }

        declaration(name, false, &resolver.finish(), interface)
    }

    /// Enum declarations never import anything.
    pub fn enumeration(name: &str, values: &[EnumValue]) -> Declaration {
        let body = values
            .iter()
            .fold(Enum::new(name), |e, v| e.member(v.name.as_str(), v.value.as_str()));
        declaration(name, true, &ImportCollector::new(), body)
    }

    fn scalar(&self, name: &str) -> Declaration {
        let mapped = self.mapper.map_scalar(name);
        if self.mapper.map_known(name).is_none() {
            tracing::debug!(name, fallback = mapped, "custom scalar has no fixed mapping");
        }

        let mut imports = ImportCollector::new();
        if mapped == DATE_TYPE {
            imports.add_type(DATE_MODULE, DATE_TYPE);
        }

        declaration(name, false, &imports, TypeAlias::new(name, mapped))
    }

    /// Union members are not imported.
    fn union(name: &str, members: &[String]) -> Declaration {
        declaration(
            name,
            false,
            &ImportCollector::new(),
            Union::new(name).variants(members.iter().map(String::as_str)),
        )
    }
}

fn declaration(
    name: &str,
    is_enum: bool,
    imports: &ImportCollector,
    body: impl Renderable,
) -> Declaration {
    let content = CodeFile::new()
        .imports(Import::from_collector(imports))
        .add(body)
        .render();

    Declaration {
        name: name.to_string(),
        is_enum,
        content,
    }
}

#[cfg(test)]
mod tests {
    use gqlts_schema::TypeRef;

    use super::*;

    fn field(name: &str, ty: TypeRef) -> Field {
        Field::new(name, ty)
    }

    fn named(name: &str) -> TypeRef {
        TypeRef::named(name)
    }

    fn required(name: &str) -> TypeRef {
        TypeRef::non_null(TypeRef::named(name))
    }

    #[test]
    fn test_object_orders_required_before_optional() {
        let enums: EnumRegistry = ["Color".to_string()].into_iter().collect();
        let item = NamedType::Object {
            name: "Item".into(),
            fields: vec![
                field("id", required("ID")),
                field("color", named("Color")),
                field("name", required("String")),
            ],
        };

        let decl = Synthesizer::new(&enums).synthesize(&item).unwrap();

        assert!(!decl.is_enum);
        assert_eq!(decl.relative_path(), "item.ts");
        assert_eq!(
            decl.content,
            "import { Color } from \"./enums/color\";\n\
             \n\
             export interface Item {\n  id: string;\n  name: string;\n  color?: Color;\n}\n"
        );
    }

    #[test]
    fn test_interface_fields_always_required() {
        let node = NamedType::Interface {
            name: "Node".into(),
            fields: vec![field("id", required("ID")), field("owner", named("User"))],
        };

        let decl = Synthesizer::new(&EnumRegistry::default())
            .synthesize(&node)
            .unwrap();

        assert_eq!(
            decl.content,
            "import type { User } from \"./user\";\n\
             \n\
             export interface Node {\n  id: string;\n  owner: User;\n}\n"
        );
    }

    #[test]
    fn test_enum_declaration() {
        let decl = Synthesizer::enumeration(
            "Color",
            &[EnumValue::new("RED"), EnumValue::new("GREEN")],
        );

        assert!(decl.is_enum);
        assert_eq!(decl.relative_path(), "enums/color.ts");
        assert_eq!(
            decl.content,
            "export enum Color {\n  RED = \"RED\",\n  GREEN = \"GREEN\",\n}\n"
        );
    }

    #[test]
    fn test_scalars() {
        let enums = EnumRegistry::default();
        let synth = Synthesizer::new(&enums);

        let json = synth
            .synthesize(&NamedType::Scalar {
                name: "JSON".into(),
            })
            .unwrap();
        assert_eq!(json.content, "export type JSON = any;\n");
        assert_eq!(json.relative_path(), "jSON.ts");

        let date = synth
            .synthesize(&NamedType::Scalar {
                name: "DateTime".into(),
            })
            .unwrap();
        assert_eq!(
            date.content,
            "import type { Dayjs } from \"dayjs\";\n\nexport type DateTime = Dayjs;\n"
        );
    }

    #[test]
    fn test_union_has_no_imports() {
        let shape = NamedType::Union {
            name: "Shape".into(),
            members: vec!["Circle".into(), "Square".into()],
        };

        let decl = Synthesizer::new(&EnumRegistry::default())
            .synthesize(&shape)
            .unwrap();
        assert_eq!(decl.content, "export type Shape = Circle | Square;\n");
    }

    #[test]
    fn test_input_object_is_skipped() {
        let input = NamedType::InputObject {
            name: "ItemFilter".into(),
        };
        assert!(
            Synthesizer::new(&EnumRegistry::default())
                .synthesize(&input)
                .is_none()
        );
    }

    #[test]
    fn test_empty_object() {
        let empty = NamedType::Object {
            name: "Empty".into(),
            fields: vec![],
        };
        let decl = Synthesizer::new(&EnumRegistry::default())
            .synthesize(&empty)
            .unwrap();
        assert_eq!(decl.content, "export interface Empty {}\n");
    }

    #[test]
    fn test_declaration_writes_to_its_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let decl = Synthesizer::enumeration("Color", &[EnumValue::new("RED")]);

        let written = decl.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("enums/color.ts"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), decl.content);
    }
}
