//! Schema sources: live endpoints and local files.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::{Error, Result, introspection, model::Schema, sdl};

/// Where a schema is acquired from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A live GraphQL endpoint queried with introspection.
    Url(String),
    /// A local file: SDL text, or a saved introspection result when the
    /// extension is `.json`.
    Path(PathBuf),
}

impl SchemaSource {
    /// Classify a configured `schema` value.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SchemaSource::Url(value.to_string())
        } else {
            SchemaSource::Path(PathBuf::from(value))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SchemaSource::Url(_))
    }

    /// Acquire the schema.
    ///
    /// `headers` are only used for live introspection. Any failure aborts
    /// acquisition; a partially loaded schema is never returned.
    pub async fn load(&self, headers: &IndexMap<String, String>) -> Result<Schema> {
        match self {
            SchemaSource::Url(url) => introspection::fetch_introspection(url, headers).await,
            SchemaSource::Path(path) => load_file(path),
        }
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Url(url) => f.write_str(url),
            SchemaSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<Schema> {
    tracing::info!(path = %path.display(), "reading schema file");

    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::ReadSchema {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let filename = path.display().to_string();

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        introspection::parse_introspection(&content, &filename)
    } else {
        sdl::parse_sdl(&content, &filename)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            SchemaSource::parse("https://api.example.com/graphql"),
            SchemaSource::Url("https://api.example.com/graphql".into())
        );
        assert_eq!(
            SchemaSource::parse("http://localhost:4000"),
            SchemaSource::Url("http://localhost:4000".into())
        );
        assert_eq!(
            SchemaSource::parse("./schema.graphql"),
            SchemaSource::Path("./schema.graphql".into())
        );
        assert!(!SchemaSource::parse("schema.graphql").is_remote());
    }

    #[tokio::test]
    async fn test_load_sdl_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.graphql");
        fs::write(&path, "enum Color { RED }\ntype Item { color: Color }\n").unwrap();

        let schema = SchemaSource::Path(path).load(&IndexMap::new()).await.unwrap();
        assert_eq!(schema.len(), 2);
    }

    #[tokio::test]
    async fn test_load_introspection_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        fs::write(
            &path,
            r#"{ "data": { "__schema": { "types": [{ "kind": "SCALAR", "name": "JSON" }] } } }"#,
        )
        .unwrap();

        let schema = SchemaSource::Path(path).load(&IndexMap::new()).await.unwrap();
        assert!(schema.contains("JSON"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = SchemaSource::Path(temp.path().join("missing.graphql"));

        let err = source.load(&IndexMap::new()).await.unwrap_err();
        assert!(matches!(*err, Error::ReadSchema { .. }));
    }
}
