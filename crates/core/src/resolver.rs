//! Name and path service.
//!
//! The engine never decides file names or casing itself; it asks a
//! [`Resolver`]. [`DefaultResolver`] implements the conventions configured in
//! [`Config`].

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::naming::NameKind;
use crate::utils::{camel_case, pascal_case, sanitize_ts_identifier};

/// Which output tree a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Request functions and the operation index.
    Client,
    /// Validation schemas.
    Types,
    /// Mock request handlers.
    Handlers,
    /// Mock data factories.
    Mocks,
}

/// Decides identifiers and file locations for generated artifacts.
pub trait Resolver {
    /// Final identifier for `original` in `kind`, or `None` if no identifier
    /// can be derived.
    fn resolve_name(&self, original: &str, kind: NameKind) -> Option<String>;

    /// Location of `file_name` in `output`, grouped under `group` (the
    /// operation's first tag) when grouping applies.
    fn resolve_path(&self, file_name: &str, group: Option<&str>, output: OutputKind)
    -> Option<PathBuf>;
}

/// Resolver driven by a [`Config`].
#[derive(Debug, Clone)]
pub struct DefaultResolver {
    config: Config,
}

impl DefaultResolver {
    /// A resolver for `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this resolver follows.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn output_dir(&self, output: OutputKind) -> Option<(&Path, bool)> {
        match output {
            OutputKind::Client => Some((&self.config.client.output, self.config.client.group)),
            OutputKind::Types => Some((&self.config.types.output, self.config.types.group)),
            OutputKind::Handlers => self
                .config
                .handlers
                .as_ref()
                .map(|handlers| (handlers.output.as_path(), handlers.group)),
            OutputKind::Mocks => self
                .config
                .handlers
                .as_ref()
                .map(|handlers| (handlers.mocks_output.as_path(), handlers.group)),
        }
    }

    fn group_dir(&self, tag: &str) -> Option<String> {
        let tag = camel_case(tag);
        if tag.is_empty() {
            return None;
        }
        Some(self.config.group.output.replace("{{tag}}", &tag))
    }
}

impl Resolver for DefaultResolver {
    fn resolve_name(&self, original: &str, kind: NameKind) -> Option<String> {
        let camel = camel_case(original);
        if camel.is_empty() {
            return None;
        }
        let name = match kind {
            NameKind::Client => sanitize_ts_identifier(original),
            NameKind::Type => pascal_case(original),
            NameKind::Schema => format!("{camel}Schema"),
            NameKind::Handler => format!("{camel}Handler"),
            NameKind::Mock => format!("create{}", pascal_case(original)),
            NameKind::File => camel,
        };
        Some(name)
    }

    fn resolve_path(
        &self,
        file_name: &str,
        group: Option<&str>,
        output: OutputKind,
    ) -> Option<PathBuf> {
        if file_name.is_empty() {
            return None;
        }
        let (dir, grouped) = self.output_dir(output)?;
        let mut path = self.config.output.root.join(dir);
        if grouped && let Some(group_dir) = group.and_then(|tag| self.group_dir(tag)) {
            path.push(group_dir);
        }
        path.push(file_name);
        Some(path)
    }
}
