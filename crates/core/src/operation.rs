//! HTTP operations and their output file identities.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::naming::{NameKind, NamingRegistrar};
use crate::resolver::{OutputKind, Resolver};
use crate::spec::{Operation, Parameter};

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Verbs in the order operations are visited within a path.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// Uppercase form used in labels and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Lowercase form used in generated call expressions (`method: "post"`).
    pub fn as_lower(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// GET requests are queries; everything else mutates.
    pub fn is_query(self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation located in the document.
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    /// Path template (`/pet/{petId}`).
    pub path: &'a str,
    /// Verb the operation is bound to.
    pub method: HttpMethod,
    /// The operation itself.
    pub operation: &'a Operation,
    /// Parameters declared on the enclosing path item.
    pub path_parameters: &'a [Parameter],
}

impl<'a> OperationRef<'a> {
    /// The declared `operationId`.
    pub fn operation_id(&self) -> Option<&'a str> {
        self.operation.operation_id.as_deref()
    }

    /// The first tag; operations are grouped into directories by it.
    pub fn tag(&self) -> Option<&'a str> {
        self.operation.tags.first().map(String::as_str)
    }

    /// Human readable identity for failure reports (`addPet` or `POST /pet`).
    pub fn label(&self) -> String {
        match self.operation_id() {
            Some(id) => id.to_string(),
            None => format!("{} {}", self.method, self.path),
        }
    }
}

/// Where an operation's generated file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
    /// Identifier exported by the file (`addPet`, `AddPet`).
    pub name: String,
    /// `addPet.ts`
    pub file_name: String,
    /// Full path including the file name.
    pub file_path: PathBuf,
}

/// Maps operations to output identities, once per `(kind, method, path)`.
///
/// Resolution is cached so that asking twice for the same operation (once by
/// the client builder, once by the type builder importing from it) never burns
/// a second registrar suffix.
#[derive(Debug, Default)]
pub struct OperationResolver {
    cache: HashMap<(NameKind, HttpMethod, String), FileIdentity>,
}

impl OperationResolver {
    /// An empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the identity of `op` within the given name kind and output.
    pub fn resolve(
        &mut self,
        registrar: &mut NamingRegistrar,
        resolver: &dyn Resolver,
        op: &OperationRef<'_>,
        kind: NameKind,
        output: OutputKind,
    ) -> Result<FileIdentity> {
        let key = (kind, op.method, op.path.to_string());
        if let Some(identity) = self.cache.get(&key) {
            return Ok(identity.clone());
        }

        let operation_id = op
            .operation_id()
            .ok_or_else(|| GenerateError::MissingOperationId {
                path: op.path.to_string(),
                method: op.method,
            })?;

        // Check the path first so a failure leaves the registrar untouched.
        let name = resolver.resolve_name(operation_id, kind).ok_or_else(|| {
            GenerateError::NameResolution {
                original: operation_id.to_string(),
                kind,
            }
        })?;
        let candidate_file = format!("{name}.ts");
        if resolver.resolve_path(&candidate_file, op.tag(), output).is_none() {
            return Err(GenerateError::PathResolution {
                file_name: candidate_file,
            });
        }

        let allocation = registrar
            .try_allocate(operation_id, kind, |candidate| {
                resolver.resolve_name(candidate, kind)
            })
            .ok_or_else(|| GenerateError::NameResolution {
                original: operation_id.to_string(),
                kind,
            })?;

        let file_name = format!("{}.ts", allocation.generated);
        let file_path = resolver
            .resolve_path(&file_name, op.tag(), output)
            .ok_or_else(|| GenerateError::PathResolution {
                file_name: file_name.clone(),
            })?;

        debug!(
            operation_id,
            kind = %kind,
            name = %allocation.generated,
            file_path = %file_path.display(),
            "Resolved operation output."
        );

        let identity = FileIdentity {
            name: allocation.generated,
            file_name,
            file_path,
        };
        self.cache.insert(key, identity.clone());
        Ok(identity)
    }
}
