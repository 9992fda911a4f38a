use crate::builder::{HandlerBuilder, MSW_MODULE};
use crate::context::GenerationContext;
use crate::error::{GenerateError, Result};
use crate::file::{FileDescriptor, FileMeta, Import};
use crate::naming::NameKind;
use crate::operation::OperationRef;
use crate::render::Render;
use crate::resolver::OutputKind;
use crate::schemas::OperationSchemas;
use crate::utils::relative_module_path;

use super::OperationGenerator;

/// One mock request handler per operation, answering with the response mock
/// factory of the operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerGenerator;

impl HandlerGenerator {
    fn generate(
        self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        let identity = ctx.resolve_operation_as(op, NameKind::Handler, OutputKind::Handlers)?;
        let resolver = ctx.resolver;

        let response = &schemas.response.name;
        let factory = ctx
            .registrar
            .try_allocate(response, NameKind::Mock, |candidate| {
                resolver.resolve_name(candidate, NameKind::Mock)
            })
            .ok_or_else(|| GenerateError::NameResolution {
                original: response.clone(),
                kind: NameKind::Mock,
            })?
            .generated;
        let factory_file = format!("{factory}.ts");
        let factory_path = resolver
            .resolve_path(&factory_file, op.tag(), OutputKind::Mocks)
            .ok_or(GenerateError::PathResolution {
                file_name: factory_file,
            })?;

        let handler = HandlerBuilder::new(&identity.name, op, &factory).build();
        let imports = vec![
            Import::named("rest", MSW_MODULE),
            Import::named(&factory, relative_module_path(&identity.file_path, &factory_path)),
        ];

        Ok(FileDescriptor {
            path: identity.file_path,
            file_name: identity.file_name,
            source: handler.render(),
            imports,
            meta: FileMeta {
                plugin: self.name(),
                tag: op.tag().map(str::to_string),
            },
        })
    }
}

impl OperationGenerator for HandlerGenerator {
    fn name(&self) -> &'static str {
        "msw"
    }

    fn get(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.generate(ctx, op, schemas)
    }

    fn post(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
    ) -> Result<FileDescriptor> {
        self.generate(ctx, op, schemas)
    }
}
