//! Generator configuration (`oagen.toml`).
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration:
//!
//! ```toml
//! input = "openapi.json"
//!
//! [output]
//! root = "gen"
//!
//! [client]
//! output = "clients"
//! data_return_type = "data"
//! client_import = "@oagen/client"
//!
//! [types]
//! output = "zod"
//!
//! [handlers]
//! output = "msw"
//! mocks_output = "mocks"
//!
//! [group]
//! by = "tag"
//! output = "{{tag}}Controller"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema document to read (JSON or YAML).
    pub input: PathBuf,
    /// Output root.
    pub output: OutputConfig,
    /// Request function output.
    pub client: ClientConfig,
    /// Validation schema output.
    pub types: TypesConfig,
    /// Mock handler output; disabled unless the table is present.
    pub handlers: Option<HandlersConfig>,
    /// Per-tag directory naming.
    pub group: GroupConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("openapi.json"),
            output: OutputConfig::default(),
            client: ClientConfig::default(),
            types: TypesConfig::default(),
            handlers: None,
            group: GroupConfig::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every output is written under.
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("gen"),
        }
    }
}

/// What a generated client function returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataReturnType {
    /// Only the response body (`res.data`).
    #[default]
    Data,
    /// The whole response object.
    Full,
}

/// `[client]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Directory under the output root.
    pub output: PathBuf,
    /// Group files into per-tag directories.
    pub group: bool,
    /// What generated functions resolve to.
    pub data_return_type: DataReturnType,
    /// Module the request function is imported from.
    pub client_import: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("clients"),
            group: true,
            data_return_type: DataReturnType::Data,
            client_import: "@oagen/client".to_string(),
        }
    }
}

/// `[types]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    /// Directory under the output root.
    pub output: PathBuf,
    /// Group files into per-tag directories.
    pub group: bool,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("zod"),
            group: true,
        }
    }
}

/// `[handlers]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HandlersConfig {
    /// Directory under the output root.
    pub output: PathBuf,
    /// Group files into per-tag directories.
    pub group: bool,
    /// Where the mock data factories live; handlers import from here.
    pub mocks_output: PathBuf,
}

impl Default for HandlersConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("msw"),
            group: true,
            mocks_output: PathBuf::from("mocks"),
        }
    }
}

/// Grouping key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// First tag of the operation.
    #[default]
    Tag,
}

/// `[group]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Grouping key.
    pub by: GroupBy,
    /// Directory name template; `{{tag}}` is replaced by the camelCased tag.
    pub output: String,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            by: GroupBy::Tag,
            output: "{{tag}}Controller".to_string(),
        }
    }
}
