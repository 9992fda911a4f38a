//! Builders assemble structured descriptions of generated code.
//!
//! They decide *what* a file contains (parameters, generics, validation
//! chains, handler wiring); turning a description into text is the job of
//! [`crate::render`].

mod client;
mod handler;
mod schema;

pub use client::{CLIENT_OPTIONS_TYPE, ClientBuilder, ClientFunction};
pub use handler::{HandlerBuilder, HandlerFunction, MSW_MODULE};
pub use schema::{SchemaBuilder, SchemaEntry, ZOD_MODULE};

/// One parameter of a generated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParam {
    /// Parameter name.
    pub name: String,
    /// Type annotation.
    pub ty: Option<String>,
    /// Whether callers must pass it.
    pub required: bool,
    /// Default value expression; implies the parameter may be omitted.
    pub default: Option<String>,
}

impl FunctionParam {
    /// A typed parameter without a default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            required,
            default: None,
        }
    }

    /// An optional parameter with a default value expression.
    pub fn with_default(
        name: impl Into<String>,
        ty: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            required: false,
            default: Some(default.into()),
        }
    }

    fn rank(&self) -> u8 {
        match (self.required, &self.default) {
            (_, Some(_)) => 2,
            (true, None) => 0,
            (false, None) => 1,
        }
    }
}

/// Required parameters first, then optional ones, then defaulted ones.
/// Relative order within each group is kept.
pub fn order_params(mut params: Vec<FunctionParam>) -> Vec<FunctionParam> {
    params.sort_by_key(FunctionParam::rank);
    params
}
