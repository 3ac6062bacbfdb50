//! Schema definition language (SDL) loading.

use graphql_parser::schema::{
    Definition, Document, Type, TypeDefinition, TypeExtension, parse_schema,
};

use crate::{
    Error, Result,
    model::{EnumValue, Field, NamedType, Schema, TypeRef},
};

/// Parse SDL text into a [`Schema`].
///
/// Type extensions are merged into the type they extend; schema and
/// directive definitions carry nothing the generator needs and are skipped.
pub fn parse_sdl(content: &str, filename: &str) -> Result<Schema> {
    let document: Document<'_, String> = parse_schema(content).map_err(|e| {
        Box::new(Error::Sdl {
            filename: filename.to_string(),
            message: e.to_string(),
        })
    })?;

    let mut schema = Schema::new();
    let mut extensions = Vec::new();

    for definition in document.definitions {
        match definition {
            Definition::TypeDefinition(def) => schema.insert(lower_definition(def)),
            Definition::TypeExtension(ext) => extensions.push(ext),
            Definition::SchemaDefinition(_) | Definition::DirectiveDefinition(_) => {}
        }
    }

    // Extensions may precede the definition they extend
    for extension in extensions {
        apply_extension(&mut schema, extension);
    }

    tracing::debug!(filename, types = schema.len(), "parsed SDL schema");
    Ok(schema)
}

fn lower_definition(def: TypeDefinition<'_, String>) -> NamedType {
    match def {
        TypeDefinition::Scalar(s) => NamedType::Scalar { name: s.name },
        TypeDefinition::Object(o) => NamedType::Object {
            name: o.name,
            fields: lower_fields(o.fields),
        },
        TypeDefinition::Interface(i) => NamedType::Interface {
            name: i.name,
            fields: lower_fields(i.fields),
        },
        TypeDefinition::Union(u) => NamedType::Union {
            name: u.name,
            members: u.types,
        },
        TypeDefinition::Enum(e) => NamedType::Enum {
            name: e.name,
            values: e.values.into_iter().map(|v| EnumValue::new(v.name)).collect(),
        },
        TypeDefinition::InputObject(i) => NamedType::InputObject { name: i.name },
    }
}

fn lower_fields(fields: Vec<graphql_parser::schema::Field<'_, String>>) -> Vec<Field> {
    fields
        .into_iter()
        .map(|f| Field::new(f.name, lower_type(f.field_type)))
        .collect()
}

fn lower_type(ty: Type<'_, String>) -> TypeRef {
    match ty {
        Type::NamedType(name) => TypeRef::Named(name),
        Type::ListType(inner) => TypeRef::list(lower_type(*inner)),
        Type::NonNullType(inner) => TypeRef::non_null(lower_type(*inner)),
    }
}

fn apply_extension(schema: &mut Schema, extension: TypeExtension<'_, String>) {
    match extension {
        TypeExtension::Object(ext) => {
            let extra = lower_fields(ext.fields);
            match schema.get_mut(&ext.name) {
                Some(NamedType::Object { fields, .. }) => fields.extend(extra),
                _ => schema.insert(NamedType::Object {
                    name: ext.name,
                    fields: extra,
                }),
            }
        }
        TypeExtension::Interface(ext) => {
            let extra = lower_fields(ext.fields);
            match schema.get_mut(&ext.name) {
                Some(NamedType::Interface { fields, .. }) => fields.extend(extra),
                _ => schema.insert(NamedType::Interface {
                    name: ext.name,
                    fields: extra,
                }),
            }
        }
        TypeExtension::Enum(ext) => {
            let extra: Vec<_> = ext.values.into_iter().map(|v| EnumValue::new(v.name)).collect();
            match schema.get_mut(&ext.name) {
                Some(NamedType::Enum { values, .. }) => values.extend(extra),
                _ => schema.insert(NamedType::Enum {
                    name: ext.name,
                    values: extra,
                }),
            }
        }
        TypeExtension::Union(ext) => match schema.get_mut(&ext.name) {
            Some(NamedType::Union { members, .. }) => members.extend(ext.types),
            _ => schema.insert(NamedType::Union {
                name: ext.name,
                members: ext.types,
            }),
        },
        TypeExtension::Scalar(ext) => {
            if !schema.contains(&ext.name) {
                schema.insert(NamedType::Scalar { name: ext.name });
            }
        }
        TypeExtension::InputObject(ext) => {
            if !schema.contains(&ext.name) {
                schema.insert(NamedType::InputObject { name: ext.name });
            }
        }
    }
}
