//! Generated file descriptors and import printing.

use std::path::PathBuf;

use indexmap::IndexMap;

/// One `import` of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Default binding (`import client from ...`).
    pub default: Option<String>,
    /// Named bindings (`import { petSchema } from ...`).
    pub names: Vec<String>,
    /// Module specifier, already relative to the importing file.
    pub path: String,
    /// Printed as `import type`.
    pub type_only: bool,
}

impl Import {
    /// `import { name } from "path"`
    pub fn named(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            default: None,
            names: vec![name.into()],
            path: path.into(),
            type_only: false,
        }
    }

    /// `import name from "path"`
    pub fn default_import(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            default: Some(name.into()),
            names: Vec::new(),
            path: path.into(),
            type_only: false,
        }
    }

    /// `import type { ... } from "path"`
    pub fn types(names: Vec<String>, path: impl Into<String>) -> Self {
        Self {
            default: None,
            names,
            path: path.into(),
            type_only: true,
        }
    }

    /// Every identifier this import binds.
    pub fn bindings(&self) -> impl Iterator<Item = &str> {
        self.default
            .iter()
            .chain(self.names.iter())
            .map(String::as_str)
    }
}

/// Classification tags for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// Generator that produced the file (`client`, `zod`, `msw`).
    pub plugin: &'static str,
    /// First tag of the owning operation.
    pub tag: Option<String>,
}

/// One generated file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Output location, including the file name.
    pub path: PathBuf,
    /// `addPet.ts`
    pub file_name: String,
    /// Source text without import lines.
    pub source: String,
    /// Imports, possibly repeated; see [`FileDescriptor::merged_imports`].
    pub imports: Vec<Import>,
    /// Classification tags.
    pub meta: FileMeta,
}

impl FileDescriptor {
    /// Imports merged by `(path, type_only)`, names deduplicated in first-seen order.
    pub fn merged_imports(&self) -> Vec<Import> {
        let mut merged: IndexMap<(&str, bool), Import> = IndexMap::new();
        for import in &self.imports {
            let entry = merged
                .entry((import.path.as_str(), import.type_only))
                .or_insert_with(|| Import {
                    default: None,
                    names: Vec::new(),
                    path: import.path.clone(),
                    type_only: import.type_only,
                });
            if entry.default.is_none() {
                entry.default.clone_from(&import.default);
            }
            for name in &import.names {
                if !entry.names.contains(name) {
                    entry.names.push(name.clone());
                }
            }
        }
        merged.into_values().collect()
    }

    /// Full file text: import lines followed by the source.
    pub fn print(&self) -> String {
        let mut out = String::new();
        let imports = self.merged_imports();
        for import in &imports {
            out.push_str(&print_import(import));
            out.push('\n');
        }
        if !imports.is_empty() {
            out.push('\n');
        }
        out.push_str(self.source.trim_end());
        out.push('\n');
        out
    }
}

fn print_import(import: &Import) -> String {
    let keyword = if import.type_only {
        "import type"
    } else {
        "import"
    };
    let names = if import.names.is_empty() {
        None
    } else {
        Some(format!("{{ {} }}", import.names.join(", ")))
    };
    let bindings = match (&import.default, names) {
        (Some(default), Some(names)) => format!("{default}, {names}"),
        (Some(default), None) => default.clone(),
        (None, Some(names)) => names,
        (None, None) => return format!("import \"{}\";", import.path),
    };
    format!("{keyword} {bindings} from \"{}\";", import.path)
}
