use crate::config::DataReturnType;
use crate::operation::{HttpMethod, OperationRef};
use crate::schemas::OperationSchemas;
use crate::utils::{escape_js_string, sanitize_ts_identifier, to_template_literal, to_url_path};

use super::{FunctionParam, order_params};

/// Type of the trailing `options` parameter of every client function.
pub const CLIENT_OPTIONS_TYPE: &str = "Partial<Parameters<typeof client>[0]>";

/// Structured description of one request function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFunction {
    /// Exported function name.
    pub name: String,
    /// Generic declarations (`TData = AddPetMutationResponse`).
    pub generics: Vec<String>,
    /// Generic arguments forwarded to the request function.
    pub client_generics: Vec<String>,
    /// Parameters in declaration order.
    pub params: Vec<FunctionParam>,
    /// Declared return type.
    pub return_type: String,
    /// Verb of the request.
    pub method: HttpMethod,
    /// URL as a template literal (`` `/pet/${petId}` ``).
    pub url: String,
    /// Forwards a request body.
    pub with_data: bool,
    /// Forwards query parameters.
    pub with_params: bool,
    /// Forwards request headers.
    pub with_headers: bool,
    /// JSDoc lines without the leading `*`.
    pub comments: Vec<String>,
    /// What the function resolves to.
    pub data_return_type: DataReturnType,
}

impl ClientFunction {
    /// Whether the rendered function mentions `ResponseConfig`.
    pub fn uses_response_config(&self) -> bool {
        self.data_return_type == DataReturnType::Full
    }
}

/// Builds the [`ClientFunction`] of an operation.
#[derive(Debug)]
pub struct ClientBuilder<'a> {
    name: String,
    op: &'a OperationRef<'a>,
    schemas: &'a OperationSchemas,
    data_return_type: DataReturnType,
    with_request: bool,
}

impl<'a> ClientBuilder<'a> {
    /// A builder for the function `name` of `op`.
    pub fn new(name: impl Into<String>, op: &'a OperationRef<'a>, schemas: &'a OperationSchemas) -> Self {
        Self {
            name: name.into(),
            op,
            schemas,
            data_return_type: DataReturnType::Data,
            with_request: true,
        }
    }

    /// Resolve to the body only or to the whole response.
    pub fn data_return_type(mut self, data_return_type: DataReturnType) -> Self {
        self.data_return_type = data_return_type;
        self
    }

    /// Whether a request body is sent at all. Queries never send one.
    pub fn with_request(mut self, with_request: bool) -> Self {
        self.with_request = with_request;
        self
    }

    /// Assemble the function description.
    pub fn build(&self) -> ClientFunction {
        let request = self.schemas.request.as_ref().filter(|_| self.with_request);

        let mut generics = vec![format!("TData = {}", self.schemas.response.name)];
        let mut client_generics = vec!["TData".to_string()];
        if let Some(request) = request {
            generics.push(format!("TVariables = {}", request.name));
            client_generics.push("TVariables".to_string());
        }

        let mut params = Vec::new();
        if let Some(path_params) = &self.schemas.path_params {
            for name in path_params.schema.properties.iter().flat_map(|p| p.keys()) {
                params.push(FunctionParam::new(
                    sanitize_ts_identifier(name),
                    format!("{}[\"{}\"]", path_params.name, escape_js_string(name)),
                    true,
                ));
            }
        }
        if request.is_some() {
            params.push(FunctionParam::new(
                "data",
                "TVariables",
                self.schemas.request_required(),
            ));
        }
        if let Some(query) = &self.schemas.query_params {
            params.push(FunctionParam::new("params", &query.name, query.schema.has_required()));
        }
        if let Some(headers) = &self.schemas.header_params {
            params.push(FunctionParam::new(
                "headers",
                &headers.name,
                headers.schema.has_required(),
            ));
        }
        params.push(FunctionParam::with_default("options", CLIENT_OPTIONS_TYPE, "{}"));

        let return_type = match self.data_return_type {
            DataReturnType::Data => "Promise<TData>".to_string(),
            DataReturnType::Full => "Promise<ResponseConfig<TData>>".to_string(),
        };

        ClientFunction {
            name: self.name.clone(),
            generics,
            client_generics,
            params: order_params(params),
            return_type,
            method: self.op.method,
            url: to_template_literal(self.op.path),
            with_data: request.is_some(),
            with_params: self.schemas.query_params.is_some(),
            with_headers: self.schemas.header_params.is_some(),
            comments: self.comments(),
            data_return_type: self.data_return_type,
        }
    }

    fn comments(&self) -> Vec<String> {
        let operation = self.op.operation;
        let mut comments = Vec::new();
        if let Some(description) = &operation.description {
            comments.push(format!("@description {}", description.replace('\n', " ")));
        }
        if let Some(summary) = &operation.summary {
            comments.push(format!("@summary {}", summary.replace('\n', " ")));
        }
        if operation.deprecated {
            comments.push("@deprecated".to_string());
        }
        comments.push(format!("@link {}", to_url_path(self.op.path)));
        comments
    }
}
