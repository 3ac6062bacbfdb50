//! `gqlts.toml` configuration.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::{Error, Result, source::SchemaSource};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gqlts.toml";

/// Output root used when `outDir` is not configured.
pub const DEFAULT_OUT_DIR: &str = "./src/types/graphql";

/// The file as written by the user; every key is optional until merged
/// with command-line overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    schema: Option<String>,
    out_dir: Option<PathBuf>,
    #[serde(default)]
    ignore: Vec<String>,
    #[serde(default)]
    headers: IndexMap<String, String>,
}

/// Values passed on the command line. They take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub schema: Option<String>,
    pub out_dir: Option<PathBuf>,
    /// Added to the ignore set from the file.
    pub ignore: Vec<String>,
    /// `NAME:VALUE` pairs, added to (or replacing) the file's headers.
    pub headers: Vec<String>,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: SchemaSource,
    pub out_dir: PathBuf,
    pub ignore: IndexSet<String>,
    pub headers: IndexMap<String, String>,
}

impl Config {
    /// Load configuration and apply overrides.
    ///
    /// With `path == None` the default `gqlts.toml` is used when present and
    /// silently skipped otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let raw = match path {
            Some(path) => read_raw(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    read_raw(default)?
                } else {
                    tracing::debug!("no {} found, using command-line options", DEFAULT_CONFIG_FILE);
                    RawConfig::default()
                }
            }
        };
        resolve(raw, overrides)
    }

    /// Parse configuration from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        resolve(parse_raw(content, filename)?, overrides)
    }
}

fn read_raw(path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    parse_raw(&content, &path.display().to_string())
}

fn parse_raw(content: &str, filename: &str) -> Result<RawConfig> {
    toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
}

fn resolve(raw: RawConfig, overrides: ConfigOverrides) -> Result<Config> {
    let schema = overrides
        .schema
        .or(raw.schema)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Box::new(Error::MissingSchema))?;

    let out_dir = overrides
        .out_dir
        .or(raw.out_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let ignore = raw.ignore.into_iter().chain(overrides.ignore).collect();

    let mut headers = raw.headers;
    for header in overrides.headers {
        let (name, value) = parse_header(&header)?;
        headers.insert(name, value);
    }

    Ok(Config {
        schema: SchemaSource::parse(&schema),
        out_dir,
        ignore,
        headers,
    })
}

fn parse_header(header: &str) -> Result<(String, String)> {
    match header.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(Box::new(Error::InvalidHeader {
            header: header.to_string(),
        })),
    }
}
