//! Generation orchestration.
//!
//! [`Generator::generate_all`] runs every registered [`OperationGenerator`]
//! over every operation of the document, after emitting one validation file
//! per component schema and the global operation index. A failing operation
//! is recorded in the report and the run continues with the next one.

mod client;
mod handlers;
mod index;
mod schemas;
mod types;

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::context::GenerationContext;
use crate::error::{Diagnostic, GenerateError, Result};
use crate::file::FileDescriptor;
use crate::operation::{HttpMethod, OperationRef};
use crate::resolver::{DefaultResolver, Resolver};
use crate::schemas::OperationSchemas;
use crate::spec::{Document, component_ref};

pub use client::ClientGenerator;
pub use handlers::HandlerGenerator;
pub use index::generate_index;
pub use schemas::generate_schema;
pub use types::TypeGenerator;

/// Produces one file per operation for one output kind.
///
/// `get` and `post` carry their own logic; `put`, `patch` and `delete` share
/// the shape assumptions of `post` and delegate to it.
pub trait OperationGenerator {
    /// Value of [`crate::file::FileMeta::plugin`] for produced files.
    fn name(&self) -> &'static str;

    /// File for a `GET` operation.
    fn get(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor>;

    /// File for a `POST` operation.
    fn post(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor>;

    /// File for a `PUT` operation.
    fn put(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.post(ctx, op, schemas)
    }

    /// File for a `PATCH` operation.
    fn patch(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.post(ctx, op, schemas)
    }

    /// File for a `DELETE` operation.
    fn delete(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.post(ctx, op, schemas)
    }
}

/// Route `op` to the generator method of its verb.
pub fn dispatch(
    generator: &dyn OperationGenerator,
    ctx: &mut GenerationContext<'_>,
    op: &OperationRef<'_>,
    schemas: &OperationSchemas,
) -> Result<FileDescriptor> {
    match op.method {
        HttpMethod::Get => generator.get(ctx, op, schemas),
        HttpMethod::Post => generator.post(ctx, op, schemas),
        HttpMethod::Put => generator.put(ctx, op, schemas),
        HttpMethod::Patch => generator.patch(ctx, op, schemas),
        HttpMethod::Delete => generator.delete(ctx, op, schemas),
    }
}

/// A subject (operation label or schema reference) that produced no output.
#[derive(Debug)]
pub struct Failure {
    /// `GET /pet/{petId}` for operations, the `$ref` for schemas.
    pub subject: String,
    /// Why nothing was produced.
    pub error: GenerateError,
}

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Generated files; no two share a path.
    pub files: Vec<FileDescriptor>,
    /// Subjects that produced no output.
    pub failures: Vec<Failure>,
    /// Non-fatal conditions, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Whether every subject produced its output.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The generated file at `path`.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileDescriptor> {
        let path = path.as_ref();
        self.files.iter().find(|file| file.path == path)
    }
}

/// Runs the registered generators over a document.
pub struct Generator<'a> {
    document: &'a Document,
    resolver: &'a dyn Resolver,
    generators: Vec<Box<dyn OperationGenerator + 'a>>,
}

impl fmt::Debug for Generator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.generators.iter().map(|g| g.name()).collect();
        f.debug_struct("Generator")
            .field("generators", &names)
            .finish_non_exhaustive()
    }
}

impl<'a> Generator<'a> {
    /// A generator with no per-operation outputs; schemas and the index are
    /// still produced.
    pub fn new(document: &'a Document, resolver: &'a dyn Resolver) -> Self {
        Self {
            document,
            resolver,
            generators: Vec::new(),
        }
    }

    /// Client, type and (when configured) handler outputs.
    pub fn from_config(document: &'a Document, resolver: &'a DefaultResolver) -> Self {
        let config = resolver.config();
        let mut generator = Self::new(document, resolver)
            .with_generator(ClientGenerator::new(config.client.clone()))
            .with_generator(TypeGenerator);
        if config.handlers.is_some() {
            generator = generator.with_generator(HandlerGenerator);
        }
        generator
    }

    /// Register one more per-operation output.
    pub fn with_generator(mut self, generator: impl OperationGenerator + 'a) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Run every stage with a fresh naming registrar and reference cache.
    pub fn generate_all(&self) -> GenerationReport {
        let mut ctx = GenerationContext::new(self.document, self.resolver);
        let mut report = GenerationReport::default();
        let mut emitted: HashSet<String> = HashSet::new();
        let mut taken: HashSet<PathBuf> = HashSet::new();

        for (name, schema) in self.document.schemas() {
            let ref_path = component_ref(name);
            emitted.insert(ref_path.clone());
            let result = generate_schema(&mut ctx, &ref_path, schema)
                .and_then(|file| claim(&mut taken, vec![file]));
            match result {
                Ok(files) => report.files.extend(files),
                Err(error) => record_failure(&mut report, ref_path, error),
            }
        }

        if let Some(file) = generate_index(&ctx) {
            let subject = file.path.display().to_string();
            match claim(&mut taken, vec![file]) {
                Ok(files) => report.files.extend(files),
                Err(error) => record_failure(&mut report, subject, error),
            }
        }

        for (path, item) in self.document.paths() {
            for (method, operation) in item.operations() {
                let op = OperationRef {
                    path,
                    method,
                    operation,
                    path_parameters: &item.parameters,
                };
                let result = self
                    .generate_operation(&mut ctx, &op)
                    .and_then(|files| claim(&mut taken, files));
                match result {
                    Ok(files) => report.files.extend(files),
                    Err(error) => record_failure(&mut report, op.label(), error),
                }
            }
        }

        // References outside `components.schemas` are emitted once discovered;
        // lowering them may discover more.
        loop {
            let pending: Vec<String> = ctx
                .refs
                .iter()
                .map(|(ref_path, _)| ref_path.to_string())
                .filter(|ref_path| !emitted.contains(ref_path))
                .collect();
            if pending.is_empty() {
                break;
            }
            for ref_path in pending {
                emitted.insert(ref_path.clone());
                let Some(schema) = self.document.resolve_schema(&ref_path) else {
                    ctx.error(
                        ref_path.as_str(),
                        "reference target is not a schema, its importers point at a missing file",
                    );
                    continue;
                };
                let result = generate_schema(&mut ctx, &ref_path, &schema)
                    .and_then(|file| claim(&mut taken, vec![file]));
                match result {
                    Ok(files) => report.files.extend(files),
                    Err(error) => record_failure(&mut report, ref_path, error),
                }
            }
        }

        report.diagnostics = ctx.diagnostics;
        info!(
            files = report.files.len(),
            failures = report.failures.len(),
            diagnostics = report.diagnostics.len(),
            "Generation finished."
        );
        report
    }

    /// All files of one operation, or the first error.
    fn generate_operation(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
    ) -> Result<Vec<FileDescriptor>> {
        let identity = ctx.resolve_operation_type(op)?;
        let schemas = OperationSchemas::derive(op, &identity.name, self.document);
        debug!(
            operation_id = op.operation_id(),
            path = op.path,
            method = %op.method,
            "Generating operation."
        );

        self.generators
            .iter()
            .map(|generator| dispatch(generator.as_ref(), ctx, op, &schemas))
            .collect()
    }
}

/// Take every path of `files` or, if one is already taken, none of them.
fn claim(taken: &mut HashSet<PathBuf>, files: Vec<FileDescriptor>) -> Result<Vec<FileDescriptor>> {
    let mut claimed: HashSet<&Path> = HashSet::new();
    for file in &files {
        if taken.contains(&file.path) || !claimed.insert(&file.path) {
            return Err(GenerateError::OutputConflict {
                path: file.path.clone(),
            });
        }
    }
    taken.extend(files.iter().map(|file| file.path.clone()));
    Ok(files)
}

fn record_failure(report: &mut GenerationReport, subject: String, error: GenerateError) {
    warn!(subject = %subject, "Generation failed: {error}");
    report.failures.push(Failure { subject, error });
}
