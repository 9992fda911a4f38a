//! Per-operation schema grouping.
//!
//! Parameters are split by location and synthesized into object schemas, the
//! request body and the success response are picked from their content maps.
//! Names are derived from the operation's type name (`AddPet` becomes
//! `AddPetMutationRequest`, `AddPetPathParams`, ...).

use indexmap::IndexMap;

use crate::operation::OperationRef;
use crate::spec::{Document, MediaType, ParamLocation, Parameter, Schema, SchemaType};

/// Status codes searched for the response schema, in priority order.
const SUCCESS_STATUSES: [&str; 7] = ["200", "201", "202", "203", "204", "default", "2XX"];

/// A schema with the type name it is exported under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSchema {
    /// Exported type name (`AddPetMutationRequest`).
    pub name: String,
    /// The schema itself.
    pub schema: Schema,
}

/// The schemas a single operation needs, derived once before builders run.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSchemas {
    /// Path parameters as one object schema.
    pub path_params: Option<NamedSchema>,
    /// Query parameters as one object schema.
    pub query_params: Option<NamedSchema>,
    /// Header parameters as one object schema.
    pub header_params: Option<NamedSchema>,
    /// Request body.
    pub request: Option<NamedSchema>,
    /// Success response body; the empty schema when none is declared.
    pub response: NamedSchema,
    request_required: bool,
}

impl OperationSchemas {
    /// Group the schemas of `op`. `type_name` is the operation's resolved type name.
    pub fn derive(op: &OperationRef<'_>, type_name: &str, document: &Document) -> Self {
        let parameters = merge_parameters(op.path_parameters, &op.operation.parameters);
        let group = |location: ParamLocation, suffix: &str| {
            parameter_schema(&parameters, location).map(|schema| NamedSchema {
                name: format!("{type_name}{suffix}"),
                schema,
            })
        };

        let kind = if op.method.is_query() {
            "Query"
        } else {
            "Mutation"
        };

        let request = op
            .operation
            .request_body
            .as_ref()
            .and_then(|body| json_schema(&body.content))
            .map(|schema| NamedSchema {
                name: format!("{type_name}{kind}Request"),
                schema: schema.clone(),
            });

        let request_required = request.as_ref().is_some_and(|request| {
            let target = request
                .schema
                .ref_path
                .as_deref()
                .and_then(|ref_path| document.component(ref_path))
                .unwrap_or(&request.schema);
            target.has_required()
        });

        let response_schema = SUCCESS_STATUSES
            .iter()
            .filter_map(|status| op.operation.responses.get(*status))
            .find_map(|response| json_schema(&response.content))
            .cloned()
            .unwrap_or_default();

        Self {
            path_params: group(ParamLocation::Path, "PathParams"),
            query_params: group(ParamLocation::Query, "QueryParams"),
            header_params: group(ParamLocation::Header, "HeaderParams"),
            request,
            response: NamedSchema {
                name: format!("{type_name}{kind}Response"),
                schema: response_schema,
            },
            request_required,
        }
    }

    /// Whether the request body schema lists required fields.
    pub fn request_required(&self) -> bool {
        self.request_required
    }

    /// Entries in export order: request, response, path, query, header.
    pub fn entries(&self, include_request: bool) -> Vec<&NamedSchema> {
        let request = self.request.as_ref().filter(|_| include_request);
        request
            .into_iter()
            .chain(std::iter::once(&self.response))
            .chain(self.path_params.as_ref())
            .chain(self.query_params.as_ref())
            .chain(self.header_params.as_ref())
            .collect()
    }

    /// Type names of [`OperationSchemas::entries`].
    pub fn type_names(&self, include_request: bool) -> Vec<String> {
        self.entries(include_request)
            .into_iter()
            .map(|entry| entry.name.clone())
            .collect()
    }
}

/// Path-level parameters overridden by operation-level ones with the same
/// name and location. Cookie parameters are not carried.
fn merge_parameters<'p>(shared: &'p [Parameter], own: &'p [Parameter]) -> Vec<&'p Parameter> {
    let mut merged: IndexMap<(&str, ParamLocation), &Parameter> = IndexMap::new();
    for param in shared.iter().chain(own) {
        if param.location == ParamLocation::Cookie {
            continue;
        }
        merged.insert((param.name.as_str(), param.location), param);
    }
    merged.into_values().collect()
}

fn parameter_schema(parameters: &[&Parameter], location: ParamLocation) -> Option<Schema> {
    let params: Vec<&Parameter> = parameters
        .iter()
        .copied()
        .filter(|param| param.location == location)
        .collect();
    if params.is_empty() {
        return None;
    }

    let mut properties = IndexMap::new();
    let mut required = Vec::new();
    for param in params {
        let mut schema = param.schema.clone().unwrap_or_default();
        if schema.description.is_none() {
            schema.description.clone_from(&param.description);
        }
        properties.insert(param.name.clone(), schema);
        if param.required || location == ParamLocation::Path {
            required.push(param.name.clone());
        }
    }

    Some(Schema {
        schema_type: Some(SchemaType::Single("object".to_string())),
        properties: Some(properties),
        required: Some(required),
        ..Schema::default()
    })
}

/// The schema of the first JSON-like media type, else of the first media type.
fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&Schema> {
    content
        .iter()
        .find(|(media_type, _)| media_type.contains("json"))
        .or_else(|| content.first())
        .and_then(|(_, media)| media.schema.as_ref())
}
