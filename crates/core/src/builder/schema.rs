use std::path::PathBuf;

use crate::context::GenerationContext;
use crate::file::Import;
use crate::lower::MetaBuilder;
use crate::meta::Meta;
use crate::spec::Schema;

/// Module the validation library is imported from.
pub const ZOD_MODULE: &str = "zod";

/// One exported validation constant and the type inferred from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    /// `petSchema`
    pub const_name: String,
    /// `Pet`
    pub type_name: String,
    /// Validation chain of the constant.
    pub metas: Vec<Meta>,
}

/// Collects the validation entries of one output file.
#[derive(Debug)]
pub struct SchemaBuilder<'c, 'a> {
    meta: MetaBuilder<'c, 'a>,
    entries: Vec<SchemaEntry>,
}

impl<'c, 'a> SchemaBuilder<'c, 'a> {
    /// A builder for the file at `owner`.
    pub fn new(ctx: &'c mut GenerationContext<'a>, owner: impl Into<PathBuf>) -> Self {
        Self {
            meta: MetaBuilder::new(ctx, owner),
            entries: Vec::new(),
        }
    }

    /// Lower `schema` and append it as `const_name` / `type_name`.
    pub fn add(
        &mut self,
        schema: Option<&Schema>,
        const_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> &mut Self {
        let mut metas = self.meta.lower(schema, None);
        if schema.is_some_and(|s| s.nullable == Some(true)) && !metas.contains(&Meta::Null) {
            metas.push(Meta::Nullable);
        }
        self.entries.push(SchemaEntry {
            const_name: const_name.into(),
            type_name: type_name.into(),
            metas,
        });
        self
    }

    /// The entries plus the imports they need: the validation library and
    /// every referenced constant that is actually used.
    pub fn build(self) -> (Vec<SchemaEntry>, Vec<Import>) {
        let mut used: Vec<&str> = Vec::new();
        for meta in self.entries.iter().flat_map(|entry| &entry.metas) {
            meta.collect_refs(&mut used);
        }

        let mut imports = vec![Import::named("z", ZOD_MODULE)];
        imports.extend(self.meta.into_imports().into_iter().filter(|import| {
            import
                .names
                .iter()
                .any(|name| used.contains(&name.as_str()))
        }));
        (self.entries, imports)
    }
}
