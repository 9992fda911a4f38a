use tracing::debug;

use crate::context::GenerationContext;
use crate::file::{FileDescriptor, FileMeta};
use crate::naming::NameKind;
use crate::render::{IndexEntry, OperationIndex, Render};
use crate::resolver::OutputKind;
use crate::utils::to_url_path;

const INDEX_NAME: &str = "operations";

/// The global `operations` index. Skipped, not failed, when no name or path
/// can be resolved for it.
pub fn generate_index(ctx: &GenerationContext<'_>) -> Option<FileDescriptor> {
    let mut index = OperationIndex::new();
    for (path, item) in ctx.document.paths() {
        for (method, operation) in item.operations() {
            let Some(operation_id) = operation.operation_id.as_deref() else {
                continue;
            };
            let entry = IndexEntry {
                path: to_url_path(path),
                method: method.as_lower(),
            };
            if !index.insert(operation_id, entry) {
                debug!(operation_id, path = %path, "Duplicate operationId left out of the index.");
            }
        }
    }

    let resolver = ctx.resolver;
    let Some(name) = resolver.resolve_name(INDEX_NAME, NameKind::File) else {
        debug!("No name resolved for the operation index, skipping.");
        return None;
    };
    let file_name = format!("{name}.ts");
    let Some(path) = resolver.resolve_path(&file_name, None, OutputKind::Client) else {
        debug!(file_name = %file_name, "No path resolved for the operation index, skipping.");
        return None;
    };
    debug!(entries = index.len(), name = %name, "Generated operation index.");

    Some(FileDescriptor {
        path,
        file_name,
        source: index.render(),
        imports: Vec::new(),
        meta: FileMeta {
            plugin: "client",
            tag: None,
        },
    })
}
