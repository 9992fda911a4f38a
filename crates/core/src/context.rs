//! Shared state of one generation run.

use std::fmt;

use tracing::{error, warn};

use crate::error::{Diagnostic, Result};
use crate::naming::{NameKind, NamingRegistrar};
use crate::operation::{FileIdentity, OperationRef, OperationResolver};
use crate::refs::{RefCache, ResolvedRef};
use crate::resolver::{OutputKind, Resolver};
use crate::spec::Document;

/// Everything a builder needs to read or allocate during a run.
///
/// Passed by `&mut` to every builder; a fresh context per run makes output
/// independent of previous runs.
pub struct GenerationContext<'a> {
    /// The document being generated.
    pub document: &'a Document,
    /// Name and path service.
    pub resolver: &'a dyn Resolver,
    /// Names allocated so far.
    pub registrar: NamingRegistrar,
    /// `$ref` targets resolved so far.
    pub refs: RefCache,
    /// Operation identities resolved so far.
    pub operations: OperationResolver,
    /// Non-fatal conditions, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Debug for GenerationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationContext")
            .field("registrar", &self.registrar)
            .field("refs", &self.refs)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl<'a> GenerationContext<'a> {
    /// A fresh context with empty registrar and caches.
    pub fn new(document: &'a Document, resolver: &'a dyn Resolver) -> Self {
        Self {
            document,
            resolver,
            registrar: NamingRegistrar::new(),
            refs: RefCache::new(),
            operations: OperationResolver::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Generated identity of a `$ref` target.
    pub fn resolve_ref(&mut self, ref_path: &str) -> Result<ResolvedRef> {
        self.refs
            .resolve(ref_path, self.document, &mut self.registrar, self.resolver)
    }

    /// Client output identity of `op`.
    pub fn resolve_operation(&mut self, op: &OperationRef<'_>) -> Result<FileIdentity> {
        self.resolve_operation_as(op, NameKind::Client, OutputKind::Client)
    }

    /// Companion type output identity of `op`.
    pub fn resolve_operation_type(&mut self, op: &OperationRef<'_>) -> Result<FileIdentity> {
        self.resolve_operation_as(op, NameKind::Type, OutputKind::Types)
    }

    /// Identity of `op` in the `kind` namespace, placed under `output`.
    pub fn resolve_operation_as(
        &mut self,
        op: &OperationRef<'_>,
        kind: NameKind,
        output: OutputKind,
    ) -> Result<FileIdentity> {
        self.operations
            .resolve(&mut self.registrar, self.resolver, op, kind, output)
    }

    /// Record a non-fatal condition and log it.
    pub fn warn(&mut self, location: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(location, message);
        warn!(
            location = %diagnostic.location,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Record a condition that leaves the output incomplete and log it.
    pub fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(location, message);
        error!(
            location = %diagnostic.location,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }
}
