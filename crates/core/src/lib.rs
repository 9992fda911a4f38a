//! Schema resolution and code generation engine.
//!
//! Turns an OpenAPI document into typed request functions, zod validation
//! files and mock request handlers:
//!
//! 1. [`spec`] parses the document and classifies schema nodes.
//! 2. [`lower`] lowers schemas into [`meta`] directives, resolving `$ref`s
//!    through the run-wide [`refs::RefCache`] and [`naming::NamingRegistrar`].
//! 3. [`builder`] assembles structured descriptions of each file, which
//!    [`render`] turns into source text.
//! 4. [`generator`] runs all of the above over every operation and collects
//!    [`file::FileDescriptor`]s, failures and diagnostics.
//!
//! ```no_run
//! use oagen_core::{Config, DefaultResolver, Document, Generator};
//!
//! # fn main() -> Result<(), oagen_core::GenerateError> {
//! let document = Document::from_json(r#"{ "openapi": "3.1.0", "paths": {} }"#)?;
//! let resolver = DefaultResolver::new(Config::default());
//! let report = Generator::from_config(&document, &resolver).generate_all();
//! for file in &report.files {
//!     println!("{}", file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod file;
pub mod generator;
pub mod lower;
pub mod meta;
pub mod naming;
pub mod operation;
pub mod refs;
pub mod render;
pub mod resolver;
pub mod schemas;
pub mod spec;
pub mod utils;

pub use config::Config;
pub use context::GenerationContext;
pub use error::{Diagnostic, GenerateError, Result, Severity};
pub use file::{FileDescriptor, FileMeta, Import};
pub use generator::{GenerationReport, Generator, OperationGenerator};
pub use naming::{NameKind, NamingRegistrar};
pub use operation::{HttpMethod, OperationRef};
pub use resolver::{DefaultResolver, OutputKind, Resolver};
pub use spec::Document;
