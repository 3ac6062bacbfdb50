use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gqlts-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------
    #[error("failed to read config '{path}'")]
    #[diagnostic(code(gqlts::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(gqlts::config::parse))]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no schema source configured")]
    #[diagnostic(
        code(gqlts::config::missing_schema),
        help("set `schema` in gqlts.toml or pass --schema <URL|PATH>")
    )]
    MissingSchema,

    #[error("invalid header '{header}'")]
    #[diagnostic(
        code(gqlts::config::invalid_header),
        help("headers are written as NAME:VALUE, e.g. 'Authorization: Bearer <token>'")
    )]
    InvalidHeader { header: String },

    // ---------------------------------------------------------------------
    // Schema acquisition
    // ---------------------------------------------------------------------
    #[error("failed to read schema '{path}'")]
    #[diagnostic(code(gqlts::schema::io))]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GraphQL schema '{filename}': {message}")]
    #[diagnostic(code(gqlts::schema::sdl))]
    Sdl { filename: String, message: String },

    #[error("introspection request to '{url}' failed")]
    #[diagnostic(
        code(gqlts::introspection::http),
        help("check that the endpoint is reachable and serves GraphQL over POST")
    )]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("introspection request to '{url}' returned {status}")]
    #[diagnostic(code(gqlts::introspection::status))]
    Status { url: String, status: u16 },

    #[error("introspection of '{origin}' returned errors: {}", .messages.join("; "))]
    #[diagnostic(
        code(gqlts::introspection::errors),
        help("the server may have introspection disabled")
    )]
    IntrospectionErrors {
        origin: String,
        messages: Vec<String>,
    },

    #[error("invalid introspection result from '{origin}': {message}")]
    #[diagnostic(code(gqlts::introspection::invalid))]
    InvalidIntrospection { origin: String, message: String },
}

impl Error {
    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid introspection error
    pub fn invalid_introspection(
        origin: impl Into<String>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIntrospection {
            origin: origin.into(),
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_errors_message() {
        let err = Error::IntrospectionErrors {
            origin: "http://localhost/graphql".into(),
            messages: vec!["first".into(), "second".into()],
        };
        assert_eq!(
            err.to_string(),
            "introspection of 'http://localhost/graphql' returned errors: first; second"
        );
    }

    #[test]
    fn test_config_parse_keeps_span() {
        let src = "schema = \n";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = Error::config_parse(toml_err, src, "gqlts.toml");
        match *err {
            Error::ConfigParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
