use tracing::debug;

use crate::builder::SchemaBuilder;
use crate::context::GenerationContext;
use crate::error::{GenerateError, Result};
use crate::file::{FileDescriptor, FileMeta};
use crate::naming::NameKind;
use crate::render::Render;
use crate::spec::Schema;

/// Validation file of a referenceable schema, named exactly as references to
/// it are.
pub fn generate_schema(
    ctx: &mut GenerationContext<'_>,
    ref_path: &str,
    schema: &Schema,
) -> Result<FileDescriptor> {
    let resolved = ctx.resolve_ref(ref_path)?;
    let resolver = ctx.resolver;
    let type_name = ctx
        .registrar
        .try_allocate(&resolved.original_name, NameKind::Type, |candidate| {
            resolver.resolve_name(candidate, NameKind::Type)
        })
        .ok_or_else(|| GenerateError::NameResolution {
            original: resolved.original_name.clone(),
            kind: NameKind::Type,
        })?
        .generated;

    let mut builder = SchemaBuilder::new(ctx, resolved.path.clone());
    builder.add(Some(schema), &resolved.generated_name, type_name);
    let (entries, imports) = builder.build();

    debug!(ref_path, name = %resolved.generated_name, "Generated schema.");

    let file_name = resolved
        .path
        .file_name()
        .map_or_else(
            || format!("{}.ts", resolved.generated_name),
            |name| name.to_string_lossy().into_owned(),
        );

    Ok(FileDescriptor {
        path: resolved.path,
        file_name,
        source: entries.render(),
        imports,
        meta: FileMeta {
            plugin: "zod",
            tag: None,
        },
    })
}
