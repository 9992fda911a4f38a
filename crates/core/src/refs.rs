//! `$ref` resolution with a run-wide cache.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::naming::{NameKind, NamingRegistrar};
use crate::resolver::{OutputKind, Resolver};
use crate::spec::{Document, ref_name};

/// A reference target bound to its generated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// Identifier of the generated validation constant (`petSchema`).
    pub generated_name: String,
    /// Trailing reference segment after disambiguation (`Pet`, `Pet2`).
    pub original_name: String,
    /// File the generated constant is exported from.
    pub path: PathBuf,
}

/// Memoizing reference resolver. Each target is named exactly once per run.
#[derive(Debug, Default)]
pub struct RefCache {
    refs: IndexMap<String, ResolvedRef>,
}

impl RefCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `ref_path`, allocating a name on first sight.
    ///
    /// A target missing from `document` is a [`GenerateError::ReferenceResolution`];
    /// failures never touch the registrar or the cache.
    pub fn resolve(
        &mut self,
        ref_path: &str,
        document: &Document,
        registrar: &mut NamingRegistrar,
        resolver: &dyn Resolver,
    ) -> Result<ResolvedRef> {
        if let Some(resolved) = self.refs.get(ref_path) {
            return Ok(resolved.clone());
        }

        if !document.contains_ref(ref_path) {
            return Err(GenerateError::ReferenceResolution(ref_path.to_string()));
        }

        let original = ref_name(ref_path);
        let candidate = resolver
            .resolve_name(&original, NameKind::Schema)
            .ok_or_else(|| GenerateError::NameResolution {
                original: original.clone(),
                kind: NameKind::Schema,
            })?;
        if resolver
            .resolve_path(&format!("{candidate}.ts"), None, OutputKind::Types)
            .is_none()
        {
            return Err(GenerateError::PathResolution {
                file_name: format!("{candidate}.ts"),
            });
        }

        let allocation = registrar
            .try_allocate(&original, NameKind::Schema, |candidate| {
                resolver.resolve_name(candidate, NameKind::Schema)
            })
            .ok_or_else(|| GenerateError::NameResolution {
                original: original.clone(),
                kind: NameKind::Schema,
            })?;

        let file_name = format!("{}.ts", allocation.generated);
        let path = resolver
            .resolve_path(&file_name, None, OutputKind::Types)
            .ok_or(GenerateError::PathResolution { file_name })?;

        debug!(
            ref_path,
            name = %allocation.generated,
            "Resolved reference."
        );

        let resolved = ResolvedRef {
            generated_name: allocation.generated,
            original_name: allocation.original,
            path,
        };
        self.refs.insert(ref_path.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Resolved targets in first-resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedRef)> {
        self.refs.iter().map(|(ref_path, resolved)| (ref_path.as_str(), resolved))
    }

    /// Number of resolved targets.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
