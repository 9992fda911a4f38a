use crate::operation::{HttpMethod, OperationRef};
use crate::utils::to_url_path;

/// Module the request interception API is imported from.
pub const MSW_MODULE: &str = "msw";

/// Structured description of one mock request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFunction {
    /// Exported handler name.
    pub name: String,
    /// Verb the handler intercepts.
    pub method: HttpMethod,
    /// Match pattern (`*/pet/:petId`).
    pub url: String,
    /// Factory producing the mocked response body.
    pub factory: String,
}

/// Builds the [`HandlerFunction`] of an operation.
#[derive(Debug)]
pub struct HandlerBuilder<'a> {
    name: String,
    op: &'a OperationRef<'a>,
    factory: String,
}

impl<'a> HandlerBuilder<'a> {
    /// A builder for the handler `name` of `op`, answering with `factory()`.
    pub fn new(name: impl Into<String>, op: &'a OperationRef<'a>, factory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op,
            factory: factory.into(),
        }
    }

    /// Assemble the handler description.
    pub fn build(&self) -> HandlerFunction {
        HandlerFunction {
            name: self.name.clone(),
            method: self.op.method,
            url: format!("*{}", to_url_path(self.op.path)),
            factory: self.factory.clone(),
        }
    }
}
