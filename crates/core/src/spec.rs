//! OpenAPI document structs for serde deserialization.
//!
//! This module defines the subset of OpenAPI 3.0/3.1 the generator needs.
//! Maps are insertion ordered so paths, properties and component schemas are
//! visited in document order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::operation::HttpMethod;

const COMPONENT_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// Root OpenAPI specification.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiSpec {
    /// Path templates to their operations, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable definitions.
    pub components: Option<Components>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schemas, in document order.
    #[serde(default, deserialize_with = "deserialize_component_schemas")]
    pub schemas: IndexMap<String, Schema>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// `GET` operation.
    pub get: Option<Operation>,
    /// `POST` operation.
    pub post: Option<Operation>,
    /// `PUT` operation.
    pub put: Option<Operation>,
    /// `PATCH` operation.
    pub patch: Option<Operation>,
    /// `DELETE` operation.
    pub delete: Option<Operation>,
    /// Path-level parameters shared by all operations.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// The operation bound to `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }

    /// Present operations in fixed verb order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique identifier; generated names derive from it.
    pub operation_id: Option<String>,
    /// Tags; the first one selects the group directory.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Marked as deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Request body.
    pub request_body: Option<RequestBody>,
    /// Responses by status code.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into the path template.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie, not carried into generated code.
    Cookie,
}

/// A parameter (query, path, header or cookie).
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the parameter is carried.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Description, copied onto the synthesized property.
    pub description: Option<String>,
    /// Value schema.
    #[serde(default, deserialize_with = "deserialize_schema")]
    pub schema: Option<Schema>,
}

/// A request body definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    /// Whether a body must be sent.
    #[serde(default)]
    pub required: bool,
    /// Media types to their schemas.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Description.
    pub description: Option<String>,
    /// Media types to their schemas.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Clone, Deserialize)]
pub struct MediaType {
    /// Body schema.
    #[serde(default, deserialize_with = "deserialize_schema")]
    pub schema: Option<Schema>,
}

/// JSON Schema definition used in OpenAPI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array, null).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types.
    #[serde(default, deserialize_with = "deserialize_schema_map")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types. `items: false` is read as absent.
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Option<Box<Schema>>,

    /// Positional item schemas for tuple types.
    #[serde(default, deserialize_with = "deserialize_schema_list")]
    pub prefix_items: Option<Vec<Schema>>,

    /// Enum values (can be strings, integers, floats, booleans, or null).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Display names for enum values.
    #[serde(rename = "x-enumNames")]
    pub enum_names: Option<Vec<String>>,

    /// Union type (any of these schemas).
    #[serde(rename = "anyOf", default, deserialize_with = "deserialize_schema_list")]
    pub any_of: Option<Vec<Schema>>,

    /// Union type (exactly one of these schemas).
    #[serde(rename = "oneOf", default, deserialize_with = "deserialize_schema_list")]
    pub one_of: Option<Vec<Schema>>,

    /// Intersection type (all of these schemas combined).
    #[serde(rename = "allOf", default, deserialize_with = "deserialize_schema_list")]
    pub all_of: Option<Vec<Schema>>,

    /// Additional properties for object types (for Record/dict types).
    pub additional_properties: Option<AdditionalProperties>,

    /// Format hint (e.g., date-time, uuid).
    pub format: Option<String>,

    /// Description text.
    pub description: Option<String>,

    /// Default value for the schema.
    pub default: Option<Value>,

    /// OpenAPI 3.0 nullable flag (3.1 uses type arrays instead).
    pub nullable: Option<bool>,

    /// Value is read-only.
    pub read_only: Option<bool>,

    /// Regex pattern for string validation.
    pub pattern: Option<String>,

    /// Inclusive lower bound for numbers.
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numbers.
    pub maximum: Option<f64>,
    /// Minimum string length.
    pub min_length: Option<u64>,
    /// Maximum string length.
    pub max_length: Option<u64>,
    /// Minimum array length.
    pub min_items: Option<u64>,
    /// Maximum array length.
    pub max_items: Option<u64>,
}

/// A schema position that also admits the boolean schemas of JSON Schema
/// 2020-12 and OpenAPI 3.1.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrSchema {
    Bool(bool),
    Schema(Box<Schema>),
}

impl BoolOrSchema {
    /// Both `true` and `false` read as the empty schema. Only `items` treats
    /// `false` differently, see [`deserialize_items`].
    fn into_schema(self) -> Schema {
        match self {
            BoolOrSchema::Bool(_) => Schema::default(),
            BoolOrSchema::Schema(schema) => *schema,
        }
    }
}

fn deserialize_schema<'de, D>(deserializer: D) -> Result<Option<Schema>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BoolOrSchema>::deserialize(deserializer)?;
    Ok(value.map(BoolOrSchema::into_schema))
}

/// `items: false` forbids items beyond `prefixItems`, so it is dropped and a
/// tuple stays a tuple. `items: true` is an array of anything.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Option<Box<Schema>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BoolOrSchema>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(BoolOrSchema::Bool(false)) => None,
        Some(BoolOrSchema::Bool(true)) => Some(Box::default()),
        Some(BoolOrSchema::Schema(schema)) => Some(schema),
    })
}

fn deserialize_schema_list<'de, D>(deserializer: D) -> Result<Option<Vec<Schema>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<BoolOrSchema>>::deserialize(deserializer)?;
    Ok(value.map(|list| list.into_iter().map(BoolOrSchema::into_schema).collect()))
}

fn deserialize_schema_map<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, Schema>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IndexMap<String, BoolOrSchema>>::deserialize(deserializer)?;
    Ok(value.map(|map| {
        map.into_iter()
            .map(|(name, schema)| (name, schema.into_schema()))
            .collect()
    }))
}

fn deserialize_component_schemas<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Schema>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_schema_map(deserializer)?.unwrap_or_default())
}

/// Enum value can be string, integer, float, boolean, null, or any other JSON value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// String member.
    String(String),
    /// Integer member.
    Integer(i64),
    /// Non-integer number.
    Float(f64),
    /// Boolean member.
    Bool(bool),
    /// `null` member.
    Null,
    /// Object or array member, kept as raw JSON.
    Other(Value),
}

impl EnumValue {
    /// Numeric value of a number member, so `1` and `1.0` compare equal.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            EnumValue::Integer(n) => Some(*n as f64),
            EnumValue::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::String(s) => f.write_str(s),
            EnumValue::Integer(n) => write!(f, "{n}"),
            EnumValue::Float(n) => write!(f, "{n}"),
            EnumValue::Bool(b) => write!(f, "{b}"),
            EnumValue::Null => f.write_str("null"),
            EnumValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Schema type can be a single type or an array of types (for nullable).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` admits any extra key, `false` none.
    Bool(bool),
    /// Schema every extra value must match.
    Schema(Box<Schema>),
}

/// Which composition keyword to strip in [`Schema::without`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// `oneOf`
    OneOf,
    /// `anyOf`
    AnyOf,
    /// `allOf`
    AllOf,
}

/// Structural classification of a schema node.
///
/// Variants are listed in dispatch priority: [`Schema::shape`] returns the
/// first one whose predicate holds, so a schema with both `oneOf` and
/// `properties` is a [`SchemaShape::OneOf`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaShape<'a> {
    /// No type-determining keyword at all (`{}` or description only).
    Empty,
    /// `$ref`
    Reference(&'a str),
    /// `oneOf` members.
    OneOf(&'a [Schema]),
    /// `anyOf` members.
    AnyOf(&'a [Schema]),
    /// `allOf` members.
    AllOf(&'a [Schema]),
    /// `enum` values.
    Enum(&'a [EnumValue]),
    /// `items` schema.
    Array(&'a Schema),
    /// `prefixItems` slots.
    Tuple(&'a [Schema]),
    /// `properties` or an admitting `additionalProperties`.
    Object,
    /// A `type` array.
    MultiType(&'a [String]),
    /// A single known `type`.
    Primitive(&'a str),
    /// Carries a type or format that no rule understands.
    Unsupported,
}

/// Single `type` keywords with a direct primitive lowering.
pub const PRIMITIVE_TYPES: [&str; 7] = [
    "string", "number", "integer", "boolean", "null", "object", "array",
];

impl Schema {
    /// Classify this node. First match wins.
    pub fn shape(&self) -> SchemaShape<'_> {
        if let Some(ref_path) = &self.ref_path {
            return SchemaShape::Reference(ref_path);
        }
        if let Some(one_of) = &self.one_of {
            return SchemaShape::OneOf(one_of);
        }
        if let Some(any_of) = &self.any_of {
            return SchemaShape::AnyOf(any_of);
        }
        if let Some(all_of) = &self.all_of {
            return SchemaShape::AllOf(all_of);
        }
        if let Some(values) = &self.enum_values {
            return SchemaShape::Enum(values);
        }
        if let Some(items) = &self.items {
            return SchemaShape::Array(items);
        }
        if let Some(prefix_items) = &self.prefix_items {
            return SchemaShape::Tuple(prefix_items);
        }
        if self.properties.is_some() || self.has_additional_properties() {
            return SchemaShape::Object;
        }
        match &self.schema_type {
            Some(SchemaType::Multiple(types)) => SchemaShape::MultiType(types),
            Some(SchemaType::Single(t)) if PRIMITIVE_TYPES.contains(&t.as_str()) => {
                SchemaShape::Primitive(t)
            }
            Some(SchemaType::Single(_)) => SchemaShape::Unsupported,
            None if self.format.is_some() => SchemaShape::Unsupported,
            None => SchemaShape::Empty,
        }
    }

    /// `additionalProperties` that admits extra keys (`true` or a schema).
    pub fn has_additional_properties(&self) -> bool {
        matches!(
            self.additional_properties,
            Some(AdditionalProperties::Bool(true) | AdditionalProperties::Schema(_))
        )
    }

    /// Whether the declared type is `number` or `integer`.
    pub fn is_numeric(&self) -> bool {
        matches!(&self.schema_type, Some(SchemaType::Single(t)) if t == "number" || t == "integer")
    }

    /// Copy of this schema with one composition keyword removed.
    pub fn without(&self, composition: Composition) -> Schema {
        let mut schema = self.clone();
        match composition {
            Composition::OneOf => schema.one_of = None,
            Composition::AnyOf => schema.any_of = None,
            Composition::AllOf => schema.all_of = None,
        }
        schema
    }

    /// Copy of this schema with a single concrete `type`.
    pub fn with_type(&self, schema_type: &str) -> Schema {
        let mut schema = self.clone();
        schema.schema_type = Some(SchemaType::Single(schema_type.to_string()));
        schema
    }

    /// Whether any property is listed as required.
    pub fn has_required(&self) -> bool {
        self.required.as_ref().is_some_and(|r| !r.is_empty())
    }
}

/// A parsed document plus its raw JSON, used for reference lookups.
#[derive(Debug, Clone)]
pub struct Document {
    spec: OpenApiSpec,
    raw: Value,
}

impl Document {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::from_value(raw)
    }

    /// Build a document from an already parsed JSON value (e.g. converted from YAML).
    pub fn from_value(raw: Value) -> Result<Self> {
        let spec = OpenApiSpec::deserialize(&raw)?;
        Ok(Self { spec, raw })
    }

    /// The typed document.
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }

    /// Path items in document order.
    pub fn paths(&self) -> &IndexMap<String, PathItem> {
        &self.spec.paths
    }

    /// The operation bound to `(path, method)`, if any.
    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<&Operation> {
        self.spec.paths.get(path)?.operation(method)
    }

    /// Component schemas in document order.
    pub fn schemas(&self) -> impl Iterator<Item = (&String, &Schema)> {
        self.spec
            .components
            .iter()
            .flat_map(|components| components.schemas.iter())
    }

    /// The component schema a `#/components/schemas/<name>` reference points at.
    pub fn component(&self, ref_path: &str) -> Option<&Schema> {
        let name = unescape_pointer_segment(ref_path.strip_prefix(COMPONENT_SCHEMAS_PREFIX)?);
        self.spec.components.as_ref()?.schemas.get(name.as_str())
    }

    /// The schema a local reference points at, deserialized on demand when the
    /// target lives outside `components.schemas`.
    pub fn resolve_schema(&self, ref_path: &str) -> Option<Schema> {
        if let Some(schema) = self.component(ref_path) {
            return Some(schema.clone());
        }
        let pointer = ref_path.strip_prefix('#')?;
        BoolOrSchema::deserialize(self.raw.pointer(pointer)?)
            .ok()
            .map(BoolOrSchema::into_schema)
    }

    /// Whether a local reference (`#/...`) points at an existing node.
    pub fn contains_ref(&self, ref_path: &str) -> bool {
        if self.component(ref_path).is_some() {
            return true;
        }
        ref_path
            .strip_prefix('#')
            .is_some_and(|pointer| self.raw.pointer(pointer).is_some())
    }
}

/// Reference for a component schema name, with JSON pointer escaping.
pub fn component_ref(name: &str) -> String {
    format!(
        "{COMPONENT_SCHEMAS_PREFIX}{}",
        name.replace('~', "~0").replace('/', "~1")
    )
}

/// The trailing segment of a reference (`#/components/schemas/Pet` -> `Pet`).
pub fn ref_name(ref_path: &str) -> String {
    let segment = ref_path.rsplit('/').next().unwrap_or(ref_path);
    unescape_pointer_segment(segment)
}

fn unescape_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_shape_dispatch_order() {
        assert_eq!(schema("{}").shape(), SchemaShape::Empty);
        assert_eq!(
            schema(r#"{ "description": "free form" }"#).shape(),
            SchemaShape::Empty
        );
        assert!(matches!(
            schema(r##"{ "$ref": "#/components/schemas/Pet", "type": "object" }"##).shape(),
            SchemaShape::Reference("#/components/schemas/Pet")
        ));
        assert!(matches!(
            schema(r#"{ "oneOf": [{ "type": "string" }], "anyOf": [], "properties": {} }"#).shape(),
            SchemaShape::OneOf(_)
        ));
        assert!(matches!(
            schema(r#"{ "anyOf": [{ "type": "string" }], "allOf": [] }"#).shape(),
            SchemaShape::AnyOf(_)
        ));
        assert!(matches!(
            schema(r#"{ "type": "string", "enum": ["a"] }"#).shape(),
            SchemaShape::Enum(_)
        ));
        assert!(matches!(
            schema(r#"{ "type": "array", "items": { "type": "string" } }"#).shape(),
            SchemaShape::Array(_)
        ));
        assert!(matches!(
            schema(r#"{ "type": "array", "prefixItems": [{ "type": "string" }] }"#).shape(),
            SchemaShape::Tuple(_)
        ));
        assert_eq!(
            schema(r#"{ "additionalProperties": true }"#).shape(),
            SchemaShape::Object
        );
        assert!(matches!(
            schema(r#"{ "type": ["string", "null"] }"#).shape(),
            SchemaShape::MultiType(_)
        ));
        assert_eq!(
            schema(r#"{ "type": "boolean" }"#).shape(),
            SchemaShape::Primitive("boolean")
        );
        assert_eq!(
            schema(r#"{ "type": "file" }"#).shape(),
            SchemaShape::Unsupported
        );
        assert_eq!(
            schema(r#"{ "format": "binary" }"#).shape(),
            SchemaShape::Unsupported
        );
    }

    #[test]
    fn test_additional_properties_false_is_not_an_object() {
        assert_eq!(
            schema(r#"{ "additionalProperties": false }"#).shape(),
            SchemaShape::Empty
        );
    }

    #[test]
    fn test_boolean_schemas() {
        let point = schema(
            r#"{
  "type": "array",
  "prefixItems": [{ "type": "number" }, true],
  "items": false
}"#,
        );
        assert!(point.items.is_none());
        assert!(matches!(point.shape(), SchemaShape::Tuple([_, _])));

        let list = schema(r#"{ "type": "array", "items": true }"#);
        assert_eq!(list.shape(), SchemaShape::Array(&Schema::default()));

        let object = schema(
            r#"{ "type": "object", "properties": { "extra": true, "never": false } }"#,
        );
        let properties = object.properties.unwrap();
        assert_eq!(properties["extra"], Schema::default());
        assert_eq!(properties["never"], Schema::default());

        let union = schema(r#"{ "anyOf": [{ "type": "string" }, true] }"#);
        assert!(matches!(union.shape(), SchemaShape::AnyOf([_, _])));
    }

    #[test]
    fn test_document_with_boolean_schemas() {
        let doc = Document::from_json(
            r##"{
  "openapi": "3.1.0",
  "paths": {
    "/echo": {
      "post": {
        "operationId": "echo",
        "parameters": [{ "name": "any", "in": "query", "schema": true }],
        "requestBody": { "content": { "application/json": { "schema": true } } },
        "responses": {}
      }
    }
  },
  "components": { "schemas": { "Anything": true, "Nothing": false } }
}"##,
        )
        .unwrap();

        let op = doc.operation("/echo", HttpMethod::Post).unwrap();
        assert_eq!(op.parameters[0].schema, Some(Schema::default()));
        assert_eq!(doc.schemas().count(), 2);
        assert_eq!(doc.component("#/components/schemas/Nothing"), Some(&Schema::default()));
    }

    #[test]
    fn test_document_lookups() {
        let doc = Document::from_json(
            r##"{
  "openapi": "3.1.0",
  "paths": {
    "/pets": { "get": { "operationId": "listPets", "responses": {} } }
  },
  "components": {
    "schemas": {
      "Pet": { "type": "object" },
      "a/b": { "type": "string" }
    },
    "responses": { "NotFound": { "description": "missing" } }
  }
}"##,
        )
        .unwrap();

        assert!(doc.operation("/pets", HttpMethod::Get).is_some());
        assert!(doc.operation("/pets", HttpMethod::Post).is_none());
        assert!(doc.component("#/components/schemas/Pet").is_some());
        assert!(doc.component(&component_ref("a/b")).is_some());
        assert!(doc.contains_ref("#/components/responses/NotFound"));
        assert!(!doc.contains_ref("#/components/schemas/Missing"));
        assert!(doc.resolve_schema("#/components/responses/NotFound").is_some());
        assert!(doc.resolve_schema("#/components/schemas/Missing").is_none());
        assert_eq!(ref_name("#/components/schemas/a~1b"), "a/b");
        assert_eq!(doc.schemas().count(), 2);
    }

    #[test]
    fn test_enum_value_display() {
        let values: Vec<EnumValue> =
            serde_json::from_str(r#"["a", 1, 1.5, true, null, {"k":1}, [1,2]]"#).unwrap();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["a", "1", "1.5", "true", "null", r#"{"k":1}"#, "[1,2]"]
        );
        assert!(matches!(values[5], EnumValue::Other(_)));
        assert_eq!(values[1].as_f64(), Some(1.0));
        assert_eq!(values[0].as_f64(), None);
    }
}
