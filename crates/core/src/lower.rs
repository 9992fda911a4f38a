//! Schema to meta directive lowering.
//!
//! [`MetaBuilder::lower`] walks a schema node in the fixed order given by
//! [`Schema::shape`] and produces a directive list. References never recurse
//! into their target: they resolve through the run's [`RefCache`] to a
//! [`Meta::Ref`], which is what makes self-referential schemas terminate.
//!
//! [`RefCache`]: crate::refs::RefCache

use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::Value;

use crate::context::GenerationContext;
use crate::error::GenerateError;
use crate::file::Import;
use crate::meta::{DefaultValue, Meta, Primitive};
use crate::spec::{AdditionalProperties, Composition, EnumValue, Schema, SchemaShape, SchemaType};
use crate::utils::relative_module_path;

/// Lowers schemas on behalf of one output file, recording the imports the
/// produced references need.
#[derive(Debug)]
pub struct MetaBuilder<'c, 'a> {
    ctx: &'c mut GenerationContext<'a>,
    owner: PathBuf,
    imports: IndexMap<String, Import>,
}

impl<'c, 'a> MetaBuilder<'c, 'a> {
    /// `owner` is the path of the file the lowered directives end up in.
    pub fn new(ctx: &'c mut GenerationContext<'a>, owner: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            owner: owner.into(),
            imports: IndexMap::new(),
        }
    }

    /// Imports recorded so far, one per referenced constant.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    /// Consume the builder, yielding its imports in first-seen order.
    pub fn into_imports(self) -> Vec<Import> {
        self.imports.into_values().collect()
    }

    /// Lower `schema` into directives. `base_name` is the semantic name of the
    /// node (usually the property it belongs to).
    pub fn lower(&mut self, schema: Option<&Schema>, base_name: Option<&str>) -> Vec<Meta> {
        let Some(schema) = schema else {
            return vec![Meta::Any];
        };

        match schema.shape() {
            SchemaShape::Empty => vec![Meta::Any],
            SchemaShape::Reference(ref_path) => vec![self.lower_ref(ref_path, base_name)],
            SchemaShape::OneOf(branches) => {
                self.lower_union(schema, branches, Composition::OneOf, base_name)
            }
            SchemaShape::AnyOf(branches) => {
                self.lower_union(schema, branches, Composition::AnyOf, base_name)
            }
            SchemaShape::AllOf(branches) => self.lower_intersection(schema, branches, base_name),
            SchemaShape::Enum(values) => lower_enum(schema, values),
            SchemaShape::Array(items) => vec![Meta::Array(self.lower(Some(items), base_name))],
            SchemaShape::Tuple(slots) => {
                // Slots do not inherit the tuple's name.
                let slots = slots.iter().map(|slot| self.lower(Some(slot), None)).collect();
                vec![Meta::Tuple(slots)]
            }
            SchemaShape::Object => self.lower_object(schema),
            SchemaShape::MultiType(types) => {
                let mut metas = match types.iter().find(|t| t.as_str() != "null") {
                    Some(concrete) => self.lower(Some(&schema.with_type(concrete)), base_name),
                    None => Vec::new(),
                };
                metas.push(Meta::Null);
                metas
            }
            SchemaShape::Primitive(schema_type) => vec![lower_primitive(schema_type)],
            SchemaShape::Unsupported => {
                let err = GenerateError::UnsupportedSchemaShape(describe_shape(schema));
                let location = self.location(base_name);
                self.ctx.warn(location, format!("{err}, lowered to any"));
                vec![Meta::Any]
            }
        }
    }

    fn lower_ref(&mut self, ref_path: &str, base_name: Option<&str>) -> Meta {
        match self.ctx.resolve_ref(ref_path) {
            Ok(resolved) => {
                if resolved.path != self.owner && !self.imports.contains_key(&resolved.generated_name)
                {
                    let module = relative_module_path(&self.owner, &resolved.path);
                    self.imports.insert(
                        resolved.generated_name.clone(),
                        Import::named(resolved.generated_name.clone(), module),
                    );
                }
                Meta::Ref(resolved.generated_name)
            }
            Err(err) => {
                let location = self.location(base_name);
                self.ctx.warn(location, format!("{err}, lowered to any"));
                Meta::Any
            }
        }
    }

    fn lower_union(
        &mut self,
        schema: &Schema,
        branches: &[Schema],
        composition: Composition,
        base_name: Option<&str>,
    ) -> Vec<Meta> {
        let members = self.first_directives(branches);
        let union = Meta::Union(members);

        let rest = schema.without(composition);
        if rest.properties.is_some() {
            let mut metas = self.lower(Some(&rest), base_name);
            metas.push(union);
            return metas;
        }
        vec![union]
    }

    fn lower_intersection(
        &mut self,
        schema: &Schema,
        branches: &[Schema],
        base_name: Option<&str>,
    ) -> Vec<Meta> {
        let mut members = self.first_directives(branches);

        let rest = schema.without(Composition::AllOf);
        if rest.properties.is_some() {
            members.extend(self.lower(Some(&rest), base_name));
        }
        vec![Meta::Intersection(members)]
    }

    /// First directive of each branch, skipping branches that lower to `any`.
    fn first_directives(&mut self, branches: &[Schema]) -> Vec<Meta> {
        branches
            .iter()
            .filter_map(|branch| self.lower(Some(branch), None).into_iter().next())
            .filter(|meta| *meta != Meta::Any)
            .collect()
    }

    fn lower_object(&mut self, schema: &Schema) -> Vec<Meta> {
        let required: &[String] = schema.required.as_deref().unwrap_or_default();
        let mut properties = IndexMap::new();

        for (name, property) in schema.properties.iter().flatten() {
            let mut metas = self.lower(Some(property), Some(name));

            if let Some(description) = &property.description {
                metas.push(Meta::Describe(
                    description.replace('\n', " ").replace('`', "'"),
                ));
            }

            let is_enum = property.enum_values.is_some()
                || metas.iter().any(|meta| matches!(meta, Meta::Enum(_)));
            if !is_enum {
                if let Some(min) = lower_bound(property) {
                    metas.push(Meta::Min(min));
                }
                if let Some(max) = upper_bound(property) {
                    metas.push(Meta::Max(max));
                }
            }

            if let Some(pattern) = &property.pattern {
                metas.push(Meta::Matches(strip_delimiters(pattern).to_string()));
            }

            match property.format.as_deref() {
                Some("date-time") => metas.push(Meta::Datetime),
                Some("email") => metas.push(Meta::Email),
                Some("uri" | "hostname") => metas.push(Meta::Url),
                Some("uuid") => metas.push(Meta::Uuid),
                _ => {}
            }

            if property.read_only == Some(true) {
                metas.push(Meta::ReadOnly);
            }

            match &property.default {
                Some(Value::String(value)) => {
                    metas.push(Meta::Default(DefaultValue::String(value.clone())));
                }
                Some(Value::Bool(value)) => metas.push(Meta::Default(DefaultValue::Bool(*value))),
                _ => {}
            }

            let is_required = required.contains(name);
            let nullable = property.nullable == Some(true);
            match (is_required, nullable) {
                (true, true) => metas.push(Meta::Null),
                (false, true) => metas.push(Meta::Nullish),
                (false, false) => metas.push(Meta::Optional),
                (true, false) => {}
            }

            properties.insert(name.clone(), metas);
        }

        let mut metas = vec![Meta::Object(properties)];
        match &schema.additional_properties {
            Some(AdditionalProperties::Bool(true)) => metas.push(Meta::Catchall(vec![Meta::Any])),
            Some(AdditionalProperties::Schema(extra)) => {
                let extra = self.lower(Some(extra), None);
                metas.push(Meta::Catchall(extra));
            }
            _ => {}
        }
        metas
    }

    fn location(&self, base_name: Option<&str>) -> String {
        match base_name {
            Some(name) => format!("{}#{name}", self.owner.display()),
            None => self.owner.display().to_string(),
        }
    }
}

fn lower_primitive(schema_type: &str) -> Meta {
    match schema_type {
        "null" => Meta::Null,
        "object" => Meta::Object(IndexMap::new()),
        "array" => Meta::Array(vec![Meta::Any]),
        other => Primitive::from_type(other).map_or(Meta::Any, Meta::Primitive),
    }
}

fn lower_enum(schema: &Schema, values: &[EnumValue]) -> Vec<Meta> {
    if let Some(names) = &schema.enum_names {
        return vec![Meta::Enum(dedup(names.iter().cloned()))];
    }

    if schema.is_numeric() {
        let mut literals: Vec<EnumValue> = Vec::new();
        for value in values {
            if !literals.iter().any(|seen| same_literal(seen, value)) {
                literals.push(value.clone());
            }
        }
        let members = literals.into_iter().map(Meta::Literal).collect();
        return vec![Meta::Union(members)];
    }

    let members = dedup(
        values
            .iter()
            .filter(|value| **value != EnumValue::Null)
            .map(ToString::to_string),
    );
    let mut metas = vec![Meta::Enum(members)];
    if values.contains(&EnumValue::Null) {
        metas.push(Meta::Null);
    }
    metas
}

/// Numbers compare by value, so `1` and `1.0` are one member and the first
/// spelling is kept.
#[allow(clippy::float_cmp)]
fn same_literal(a: &EnumValue, b: &EnumValue) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn lower_bound(schema: &Schema) -> Option<f64> {
    schema
        .minimum
        .or_else(|| schema.min_length.map(|n| n as f64))
        .or_else(|| schema.min_items.map(|n| n as f64))
}

#[allow(clippy::cast_precision_loss)]
fn upper_bound(schema: &Schema) -> Option<f64> {
    schema
        .maximum
        .or_else(|| schema.max_length.map(|n| n as f64))
        .or_else(|| schema.max_items.map(|n| n as f64))
}

/// `/^[a-z]+$/` -> `^[a-z]+$`
fn strip_delimiters(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
    pattern.strip_suffix('/').unwrap_or(pattern)
}

fn describe_shape(schema: &Schema) -> String {
    match (&schema.schema_type, &schema.format) {
        (Some(SchemaType::Single(t)), Some(format)) => format!("type `{t}` with format `{format}`"),
        (Some(SchemaType::Single(t)), None) => format!("type `{t}`"),
        (_, Some(format)) => format!("format `{format}`"),
        _ => "schema without a recognized keyword".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::resolver::DefaultResolver;
    use crate::spec::Document;

    const DOC: &str = r##"{
  "openapi": "3.1.0",
  "paths": {},
  "components": {
    "schemas": {
      "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } },
      "Category": { "type": "object" },
      "Node": {
        "type": "object",
        "properties": {
          "children": { "type": "array", "items": { "$ref": "#/components/schemas/Node" } }
        }
      }
    }
  }
}"##;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    fn lower(json: &str) -> Vec<Meta> {
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let mut builder = MetaBuilder::new(&mut ctx, "gen/zod/AddPet.ts");
        builder.lower(Some(&schema(json)), None)
    }

    fn property(metas: &[Meta], name: &str) -> Vec<Meta> {
        match &metas[0] {
            Meta::Object(properties) => properties[name].clone(),
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_missing_schemas_are_any() {
        assert_eq!(lower("{}"), vec![Meta::Any]);
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let mut builder = MetaBuilder::new(&mut ctx, "gen/zod/AddPet.ts");
        assert_eq!(builder.lower(None, Some("x")), vec![Meta::Any]);
    }

    #[test]
    fn test_reference_records_one_import_per_file() {
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let mut builder = MetaBuilder::new(&mut ctx, "gen/zod/petController/AddPet.ts");
        let pet = schema(r##"{ "$ref": "#/components/schemas/Pet" }"##);

        let first = builder.lower(Some(&pet), None);
        let second = builder.lower(Some(&pet), Some("other"));

        assert_eq!(first, vec![Meta::Ref("petSchema".into())]);
        assert_eq!(first, second);
        let imports = builder.into_imports();
        assert_eq!(imports, vec![Import::named("petSchema", "../petSchema")]);
    }

    #[test]
    fn test_self_reference_terminates_without_self_import() {
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let node_ref = ctx.resolve_ref("#/components/schemas/Node").unwrap();
        let node = doc.component("#/components/schemas/Node").unwrap();
        let mut builder = MetaBuilder::new(&mut ctx, node_ref.path.clone());

        let metas = builder.lower(Some(node), None);
        assert_eq!(
            property(&metas, "children"),
            vec![Meta::Array(vec![Meta::Ref("nodeSchema".into())]), Meta::Optional]
        );
        assert_eq!(builder.imports().count(), 0);
    }

    #[test]
    fn test_dangling_reference_degrades_to_any_with_diagnostic() {
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let mut builder = MetaBuilder::new(&mut ctx, "gen/zod/AddPet.ts");
        let metas = builder.lower(
            Some(&schema(r##"{ "$ref": "#/components/schemas/Missing" }"##)),
            Some("owner"),
        );
        assert_eq!(metas, vec![Meta::Any]);
        assert_eq!(builder.imports().count(), 0);
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].location, "gen/zod/AddPet.ts#owner");
        assert!(ctx.diagnostics[0].message.contains("Missing"));
    }

    #[test]
    fn test_one_of_drops_any_branches() {
        let metas = lower(r#"{ "oneOf": [{ "type": "string" }, {}, { "type": "integer" }] }"#);
        assert_eq!(
            metas,
            vec![Meta::Union(vec![
                Meta::Primitive(Primitive::String),
                Meta::Primitive(Primitive::Integer),
            ])]
        );
    }

    #[test]
    fn test_any_of_with_inline_properties_is_object_then_union() {
        let metas = lower(
            r##"{
  "anyOf": [{ "$ref": "#/components/schemas/Pet" }, { "$ref": "#/components/schemas/Category" }],
  "properties": { "kind": { "type": "string" } },
  "required": ["kind"]
}"##,
        );
        assert_eq!(metas.len(), 2);
        assert_eq!(property(&metas, "kind"), vec![Meta::Primitive(Primitive::String)]);
        assert_eq!(
            metas[1],
            Meta::Union(vec![
                Meta::Ref("petSchema".into()),
                Meta::Ref("categorySchema".into()),
            ])
        );
    }

    #[test]
    fn test_all_of_merges_inline_properties_into_intersection() {
        let metas = lower(
            r##"{
  "allOf": [{ "$ref": "#/components/schemas/Pet" }, { "$ref": "#/components/schemas/Category" }],
  "properties": { "x": { "type": "string" } }
}"##,
        );
        let [Meta::Intersection(members)] = metas.as_slice() else {
            panic!("expected a single intersection, got {metas:?}");
        };
        assert_eq!(members.len(), 3);
        assert_eq!(members[0], Meta::Ref("petSchema".into()));
        assert_eq!(members[1], Meta::Ref("categorySchema".into()));
        let Meta::Object(properties) = &members[2] else {
            panic!("expected object member");
        };
        assert_eq!(
            properties["x"],
            vec![Meta::Primitive(Primitive::String), Meta::Optional]
        );
    }

    #[test]
    fn test_enum_values_are_deduplicated_in_order() {
        assert_eq!(
            lower(r#"{ "type": "string", "enum": ["a", "a", "b"] }"#),
            vec![Meta::Enum(vec!["a".into(), "b".into()])]
        );
        assert_eq!(
            lower(r#"{ "type": "integer", "enum": [1, 2, 1] }"#),
            vec![Meta::Union(vec![
                Meta::Literal(EnumValue::Integer(1)),
                Meta::Literal(EnumValue::Integer(2)),
            ])]
        );
        assert_eq!(
            lower(r#"{ "type": "string", "enum": ["a", "b"], "x-enumNames": ["Same", "Same"] }"#),
            vec![Meta::Enum(vec!["Same".into()])]
        );
        assert_eq!(
            lower(r#"{ "type": "string", "enum": ["a", null] }"#),
            vec![Meta::Enum(vec!["a".into()]), Meta::Null]
        );
    }

    #[test]
    fn test_numeric_enum_members_compare_by_value() {
        assert_eq!(
            lower(r#"{ "type": "number", "enum": [1, 1.0, 2, 2.5, 2.50] }"#),
            vec![Meta::Union(vec![
                Meta::Literal(EnumValue::Integer(1)),
                Meta::Literal(EnumValue::Integer(2)),
                Meta::Literal(EnumValue::Float(2.5)),
            ])]
        );
    }

    #[test]
    fn test_enum_with_object_member_is_stringified() {
        assert_eq!(
            lower(r#"{ "type": "string", "enum": ["a", {"k": 1}, [1]] }"#),
            vec![Meta::Enum(vec![
                "a".into(),
                r#"{"k":1}"#.into(),
                "[1]".into(),
            ])]
        );
    }

    #[test]
    fn test_boolean_schemas_lower() {
        assert_eq!(
            lower(
                r#"{
  "type": "array",
  "prefixItems": [{ "type": "number" }],
  "items": false
}"#
            ),
            vec![Meta::Tuple(vec![vec![Meta::Primitive(Primitive::Number)]])]
        );
        assert_eq!(
            lower(r#"{ "type": "array", "items": true }"#),
            vec![Meta::Array(vec![Meta::Any])]
        );

        let metas = lower(
            r#"{ "type": "object", "required": ["extra"], "properties": { "extra": true } }"#,
        );
        assert_eq!(property(&metas, "extra"), vec![Meta::Any]);
    }

    #[test]
    fn test_tuple_and_multi_type() {
        assert_eq!(
            lower(r#"{ "type": "array", "prefixItems": [{ "type": "string" }, { "type": "number" }] }"#),
            vec![Meta::Tuple(vec![
                vec![Meta::Primitive(Primitive::String)],
                vec![Meta::Primitive(Primitive::Number)],
            ])]
        );
        assert_eq!(
            lower(r#"{ "type": ["null", "string"] }"#),
            vec![Meta::Primitive(Primitive::String), Meta::Null]
        );
        assert_eq!(lower(r#"{ "type": ["null"] }"#), vec![Meta::Null]);
    }

    #[test]
    fn test_unsupported_shapes_degrade_to_any() {
        let doc = Document::from_json(DOC).unwrap();
        let resolver = DefaultResolver::new(Config::default());
        let mut ctx = GenerationContext::new(&doc, &resolver);
        let mut builder = MetaBuilder::new(&mut ctx, "gen/zod/Upload.ts");
        let metas = builder.lower(Some(&schema(r#"{ "type": "file" }"#)), Some("file"));
        assert_eq!(metas, vec![Meta::Any]);
        assert!(ctx.diagnostics[0].message.contains("type `file`"));
    }

    #[test]
    fn test_nullable_required_matrix() {
        let metas = lower(
            r#"{
  "type": "object",
  "required": ["a", "b"],
  "properties": {
    "a": { "type": "string", "nullable": true },
    "b": { "type": "string" },
    "c": { "type": "string", "nullable": true },
    "d": { "type": "string" }
  }
}"#,
        );
        let string = Meta::Primitive(Primitive::String);
        assert_eq!(property(&metas, "a"), vec![string.clone(), Meta::Null]);
        assert_eq!(property(&metas, "b"), vec![string.clone()]);
        assert_eq!(property(&metas, "c"), vec![string.clone(), Meta::Nullish]);
        assert_eq!(property(&metas, "d"), vec![string, Meta::Optional]);
    }

    #[test]
    fn test_property_constraints_follow_fixed_order() {
        let metas = lower(
            r#"{
  "type": "object",
  "required": ["name"],
  "properties": {
    "name": {
      "type": "string",
      "description": "the `name`\nof a pet",
      "minLength": 1,
      "maxLength": 64,
      "pattern": "/^[a-z]+$/",
      "format": "email",
      "readOnly": true,
      "default": "rex"
    },
    "status": { "type": "string", "enum": ["a"], "minLength": 1 },
    "count": { "type": "integer", "default": 3, "minimum": 0 },
    "url": { "type": "string", "format": "hostname" }
  },
  "additionalProperties": { "type": "string" }
}"#,
        );

        assert_eq!(
            property(&metas, "name"),
            vec![
                Meta::Primitive(Primitive::String),
                Meta::Describe("the 'name' of a pet".into()),
                Meta::Min(1.0),
                Meta::Max(64.0),
                Meta::Matches("^[a-z]+$".into()),
                Meta::Email,
                Meta::ReadOnly,
                Meta::Default(DefaultValue::String("rex".into())),
            ]
        );
        assert_eq!(
            property(&metas, "status"),
            vec![Meta::Enum(vec!["a".into()]), Meta::Optional]
        );
        assert_eq!(
            property(&metas, "count"),
            vec![Meta::Primitive(Primitive::Integer), Meta::Min(0.0), Meta::Optional]
        );
        assert_eq!(
            property(&metas, "url"),
            vec![Meta::Primitive(Primitive::String), Meta::Url, Meta::Optional]
        );
        assert_eq!(
            metas[1],
            Meta::Catchall(vec![Meta::Primitive(Primitive::String)])
        );
    }
}
