use crate::builder::ClientBuilder;
use crate::config::ClientConfig;
use crate::context::GenerationContext;
use crate::error::Result;
use crate::file::{FileDescriptor, FileMeta, Import};
use crate::operation::OperationRef;
use crate::render::Render;
use crate::schemas::OperationSchemas;
use crate::utils::relative_module_path;

use super::OperationGenerator;

/// One request function per operation.
#[derive(Debug, Clone)]
pub struct ClientGenerator {
    config: ClientConfig,
}

impl ClientGenerator {
    /// A generator following `config`.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn generate(
        &self,
        ctx: &mut GenerationContext<'_>,
        op: &OperationRef<'_>,
        schemas: &OperationSchemas,
        with_request: bool,
    ) -> Result<FileDescriptor> {
        let identity = ctx.resolve_operation(op)?;
        let types = ctx.resolve_operation_type(op)?;

        let function = ClientBuilder::new(&identity.name, op, schemas)
            .data_return_type(self.config.data_return_type)
            .with_request(with_request)
            .build();

        let mut imports = vec![Import::default_import("client", &self.config.client_import)];
        if function.uses_response_config() {
            imports.push(Import::types(
                vec!["ResponseConfig".to_string()],
                &self.config.client_import,
            ));
        }
        imports.push(Import::types(
            schemas.type_names(with_request),
            relative_module_path(&identity.file_path, &types.file_path),
        ));

        Ok(FileDescriptor {
            path: identity.file_path,
            file_name: identity.file_name,
            source: function.render(),
            imports,
            meta: FileMeta {
                plugin: self.name(),
                tag: op.tag().map(str::to_string),
            },
        })
    }
}

impl OperationGenerator for ClientGenerator {
    fn name(&self) -> &'static str {
        "client"
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
