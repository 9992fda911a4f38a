use crate::builder::SchemaBuilder;
use crate::context::GenerationContext;
use crate::error::{GenerateError, Result};
use crate::file::{FileDescriptor, FileMeta};
use crate::naming::NameKind;
use crate::operation::OperationRef;
use crate::render::Render;
use crate::schemas::OperationSchemas;

use super::OperationGenerator;

/// One validation file per operation: a zod constant and an inferred type
/// for each of its schemas.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeGenerator;

impl TypeGenerator {
    fn generate(
        self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
        with_request: bool,
    ) -> Result<FileDescriptor> {
        let identity = ctx.resolve_operation_type(op)?;
        let resolver = ctx.resolver;

        let mut named = Vec::new();
        for entry in schemas.entries(with_request) {
            let const_name = ctx
                .registrar
                .try_allocate(&entry.name, NameKind::Schema, |candidate| {
                    resolver.resolve_name(candidate, NameKind::Schema)
                })
                .ok_or_else(|| GenerateError::NameResolution {
                    original: entry.name.clone(),
                    kind: NameKind::Schema,
                })?
                .generated;
            named.push((entry, const_name));
        }

        let mut builder = SchemaBuilder::new(ctx, identity.file_path.clone());
        for (entry, const_name) in named {
            builder.add(Some(&entry.schema), const_name, &entry.name);
        }
        let (entries, imports) = builder.build();

        Ok(FileDescriptor {
            path: identity.file_path,
            file_name: identity.file_name,
            source: entries.render(),
            imports,
            meta: FileMeta {
                plugin: self.name(),
                tag: op.tag().map(str::to_string),
            },
        })
    }
}

impl OperationGenerator for TypeGenerator {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn get(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.generate(ctx, op, schemas, false)
    }

    fn post(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.generate(ctx, op, schemas, true)
    }
}
