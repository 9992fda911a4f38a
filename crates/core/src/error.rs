//! Error taxonomy and non-fatal diagnostics.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::naming::NameKind;
use crate::operation::HttpMethod;

/// Errors raised while resolving or generating a single operation or schema.
///
/// None of these abort a run: the orchestrator records them per subject and
/// moves on to the next operation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The naming service produced no identifier.
    #[error("no {kind} name could be resolved for `{original}`")]
    NameResolution {
        /// Name the lookup started from.
        original: String,
        /// Namespace of the lookup.
        kind: NameKind,
    },

    /// The path service produced no output location.
    #[error("no output path could be resolved for `{file_name}`")]
    PathResolution {
        /// File name the lookup started from.
        file_name: String,
    },

    /// Another generated file already claimed the output location.
    #[error("output path `{}` is already taken by another generated file", path.display())]
    OutputConflict {
        /// The contested location.
        path: PathBuf,
    },

    /// An operation without an `operationId` cannot be named.
    #[error("operation {method} {path} has no operationId")]
    MissingOperationId {
        /// Path template of the operation.
        path: String,
        /// Verb of the operation.
        method: HttpMethod,
    },

    /// A `$ref` target is absent from the document.
    #[error("reference `{0}` does not point at anything in the document")]
    ReferenceResolution(String),

    /// A schema matched none of the lowering rules.
    #[error("unsupported schema shape: {0}")]
    UnsupportedSchemaShape(String),

    /// The input document could not be deserialized.
    #[error("failed to parse schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used throughout the engine.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Output was degraded but stays consistent.
    Warning,
    /// Output is incomplete, e.g. an import points at a file that was not generated.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A condition that degraded the output without failing it
/// (e.g. a dangling `$ref` lowered to `any`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the condition is.
    pub severity: Severity,
    /// Owning file and, when known, the property being lowered.
    pub location: String,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// A [`Severity::Warning`] diagnostic.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    /// A [`Severity::Error`] diagnostic.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}
