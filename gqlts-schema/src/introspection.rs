//! Schema acquisition through GraphQL introspection.
//!
//! Works both against a live endpoint ([`fetch_introspection`]) and against a
//! saved introspection result ([`parse_introspection`]).

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, Result,
    model::{EnumValue, Field, NamedType, Schema, TypeRef},
};

/// The introspection query sent to live endpoints.
///
/// Only the parts of `__Type` the generator consumes are requested. Type
/// references are unrolled eight levels deep, enough for `[[T!]!]!`-style
/// wrappers.
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  fields(includeDeprecated: true) {
    name
    type {
      ...TypeRef
    }
  }
  enumValues(includeDeprecated: true) {
    name
  }
  possibleTypes {
    name
  }
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    data: Option<IntrospectionData>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
struct IntrospectionSchema {
    types: Vec<FullType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Kind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullType {
    kind: Kind,
    name: Option<String>,
    #[serde(default)]
    fields: Option<Vec<FieldDef>>,
    #[serde(default)]
    enum_values: Option<Vec<NameOnly>>,
    #[serde(default)]
    possible_types: Option<Vec<NameOnly>>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
    name: String,
    #[serde(rename = "type")]
    ty: TypeRefDef,
}

#[derive(Debug, Deserialize)]
struct NameOnly {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeRefDef {
    kind: Kind,
    name: Option<String>,
    #[serde(default)]
    of_type: Option<Box<TypeRefDef>>,
}

/// Convert an introspection result into a [`Schema`].
///
/// Accepts either a full GraphQL response (`{"data": {"__schema": ...}}`)
/// or a bare `{"__schema": ...}` object. `origin` names the URL or file the
/// JSON came from and is only used in error messages.
pub fn parse_introspection(json: &str, origin: &str) -> Result<Schema> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| Error::invalid_introspection(origin, e.to_string()))?;

    let response = if value.get("__schema").is_some() {
        let data = serde_json::from_value(value)
            .map_err(|e| Error::invalid_introspection(origin, e.to_string()))?;
        IntrospectionResponse {
            data: Some(data),
            errors: None,
        }
    } else {
        serde_json::from_value(value)
            .map_err(|e| Error::invalid_introspection(origin, e.to_string()))?
    };

    into_schema(response, origin)
}

/// Fetch a schema from a live GraphQL endpoint.
///
/// `headers` are sent with the request as-is (e.g. `Authorization`).
pub async fn fetch_introspection(url: &str, headers: &IndexMap<String, String>) -> Result<Schema> {
    tracing::info!(url, "fetching schema via introspection");

    let body = serde_json::json!({
        "query": INTROSPECTION_QUERY,
        "operationName": "IntrospectionQuery",
    });

    let mut request = reqwest::Client::new().post(url).json(&body);
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let http_error = |source| {
        Box::new(Error::Http {
            url: url.to_string(),
            source,
        })
    };

    let response = request.send().await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Box::new(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }));
    }

    let text = response.text().await.map_err(http_error)?;
    parse_introspection(&text, url)
}

fn into_schema(response: IntrospectionResponse, origin: &str) -> Result<Schema> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(Box::new(Error::IntrospectionErrors {
            origin: origin.to_string(),
            messages: errors.into_iter().map(|e| e.message).collect(),
        }));
    }

    let data = response
        .data
        .ok_or_else(|| Error::invalid_introspection(origin, "missing `data` field"))?;

    let mut schema = Schema::new();
    for ty in data.schema.types {
        if let Some(named) = lower_full_type(ty, origin)? {
            schema.insert(named);
        }
    }

    tracing::debug!(origin, types = schema.len(), "converted introspection result");
    Ok(schema)
}

fn lower_full_type(ty: FullType, origin: &str) -> Result<Option<NamedType>> {
    let Some(name) = ty.name else {
        return Err(Error::invalid_introspection(origin, "type without a name"));
    };

    let named = match ty.kind {
        Kind::Scalar => NamedType::Scalar { name },
        Kind::Object => NamedType::Object {
            fields: lower_fields(ty.fields, origin)?,
            name,
        },
        Kind::Interface => NamedType::Interface {
            fields: lower_fields(ty.fields, origin)?,
            name,
        },
        Kind::Union => NamedType::Union {
            members: ty
                .possible_types
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.name)
                .collect(),
            name,
        },
        Kind::Enum => NamedType::Enum {
            values: ty
                .enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|v| EnumValue::new(v.name))
                .collect(),
            name,
        },
        Kind::InputObject => NamedType::InputObject { name },
        Kind::List | Kind::NonNull | Kind::Unknown => {
            tracing::warn!(origin, name = %name, kind = ?ty.kind, "skipping type of unexpected kind");
            return Ok(None);
        }
    };

    Ok(Some(named))
}

fn lower_fields(fields: Option<Vec<FieldDef>>, origin: &str) -> Result<Vec<Field>> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|f| Ok(Field::new(f.name, lower_type_ref(f.ty, origin)?)))
        .collect()
}

fn lower_type_ref(ty: TypeRefDef, origin: &str) -> Result<TypeRef> {
    match ty.kind {
        Kind::List | Kind::NonNull => {
            let inner = ty.of_type.ok_or_else(|| {
                Error::invalid_introspection(origin, "wrapper type reference without `ofType`")
            })?;
            let inner = lower_type_ref(*inner, origin)?;
            Ok(if ty.kind == Kind::List {
                TypeRef::list(inner)
            } else {
                TypeRef::non_null(inner)
            })
        }
        _ => ty
            .name
            .map(TypeRef::Named)
            .ok_or_else(|| Error::invalid_introspection(origin, "named type reference without a name")),
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::model::TypeKind;

    const RESPONSE: &str = r#"{
      "data": {
        "__schema": {
          "types": [
            { "kind": "SCALAR", "name": "String" },
            { "kind": "ENUM", "name": "Color", "enumValues": [{ "name": "RED" }, { "name": "GREEN" }] },
            {
              "kind": "OBJECT",
              "name": "Item",
              "fields": [
                { "name": "id", "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } } },
                { "name": "color", "type": { "kind": "ENUM", "name": "Color", "ofType": null } },
                {
                  "name": "tags",
                  "type": {
                    "kind": "NON_NULL", "name": null,
                    "ofType": { "kind": "LIST", "name": null, "ofType": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } } }
                  }
                }
              ],
              "enumValues": null,
              "possibleTypes": null
            },
            { "kind": "UNION", "name": "Shape", "possibleTypes": [{ "name": "Circle" }, { "name": "Square" }] },
            { "kind": "INPUT_OBJECT", "name": "ItemFilter" },
            { "kind": "OBJECT", "name": "__Schema", "fields": [] }
          ]
        }
      }
    }"#;

    #[test]
    fn test_parse_response() {
        let schema = parse_introspection(RESPONSE, "schema.json").unwrap();

        let kinds: Vec<_> = schema.types().map(|t| (t.name(), t.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                ("String", TypeKind::Scalar),
                ("Color", TypeKind::Enum),
                ("Item", TypeKind::Object),
                ("Shape", TypeKind::Union),
                ("ItemFilter", TypeKind::InputObject),
                ("__Schema", TypeKind::Object),
            ]
        );

        let fields: Vec<_> = schema
            .get("Item")
            .and_then(NamedType::fields)
            .unwrap()
            .iter()
            .map(|f| format!("{}: {}", f.name, f.ty))
            .collect();
        assert_eq!(fields, vec!["id: ID!", "color: Color", "tags: [String!]!"]);
    }

    #[test]
    fn test_parse_bare_schema_object() {
        let bare = r#"{ "__schema": { "types": [{ "kind": "SCALAR", "name": "JSON" }] } }"#;
        let schema = parse_introspection(bare, "schema.json").unwrap();
        assert!(schema.contains("JSON"));
    }

    #[test]
    fn test_errors_array_is_fatal() {
        let body = r#"{ "data": null, "errors": [{ "message": "introspection disabled" }] }"#;
        let err = parse_introspection(body, "http://api/graphql").unwrap_err();
        match *err {
            Error::IntrospectionErrors { messages, .. } => {
                assert_eq!(messages, vec!["introspection disabled"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_is_invalid() {
        let err = parse_introspection(r#"{ "errors": [] }"#, "schema.json").unwrap_err();
        assert!(matches!(*err, Error::InvalidIntrospection { .. }));
    }

    #[test]
    fn test_wrapper_without_of_type_is_invalid() {
        let body = r#"{ "__schema": { "types": [{
            "kind": "OBJECT", "name": "Broken",
            "fields": [{ "name": "x", "type": { "kind": "LIST", "name": null, "ofType": null } }]
        }] } }"#;
        let err = parse_introspection(body, "schema.json").unwrap_err();
        assert!(matches!(*err, Error::InvalidIntrospection { .. }));
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        let err = parse_introspection("not json", "schema.json").unwrap_err();
        assert!(matches!(*err, Error::InvalidIntrospection { .. }));
    }

    #[tokio::test]
    async fn test_fetch_introspection() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "operationName": "IntrospectionQuery"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RESPONSE)
            .create_async()
            .await;

        let mut headers = IndexMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret".to_string());

        let url = format!("{}/graphql", server.url());
        let schema = fetch_introspection(&url, &headers).await.unwrap();

        assert!(schema.contains("Item"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_introspection_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(503)
            .create_async()
            .await;

        let url = format!("{}/graphql", server.url());
        let err = fetch_introspection(&url, &IndexMap::new())
            .await
            .unwrap_err();

        match *err {
            Error::Status { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_introspection_graphql_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(r#"{ "errors": [{ "message": "not allowed" }] }"#)
            .create_async()
            .await;

        let url = format!("{}/graphql", server.url());
        let err = fetch_introspection(&url, &IndexMap::new())
            .await
            .unwrap_err();

        assert!(matches!(*err, Error::IntrospectionErrors { .. }));
    }
}
