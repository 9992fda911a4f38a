//! Meta directives: the target-agnostic intermediate representation.
//!
//! A schema lowers to a `Vec<Meta>`: the first element is the base construct
//! (`object`, `array`, `union`, ...) and the rest are modifiers applied to it
//! (`min`, `describe`, `optional`, ...).

use indexmap::IndexMap;

use crate::spec::EnumValue;

/// Primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`, rendered as a number constrained to integers.
    Integer,
    /// `boolean`
    Boolean,
}

impl Primitive {
    /// Map a JSON Schema `type` keyword.
    pub fn from_type(schema_type: &str) -> Option<Self> {
        match schema_type {
            "string" => Some(Primitive::String),
            "number" => Some(Primitive::Number),
            "integer" => Some(Primitive::Integer),
            "boolean" => Some(Primitive::Boolean),
            _ => None,
        }
    }
}

/// Default values that are carried into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// A string default.
    String(String),
    /// A boolean default.
    Bool(bool),
}

/// One IR node.
#[derive(Debug, Clone, PartialEq)]
pub enum Meta {
    /// Accepts any value.
    Any,
    /// A primitive value type.
    Primitive(Primitive),
    /// Only `null`.
    Null,
    /// Property name to its directive list, in document order.
    Object(IndexMap<String, Vec<Meta>>),
    /// Array of the given item directives.
    Array(Vec<Meta>),
    /// One directive list per slot.
    Tuple(Vec<Vec<Meta>>),
    /// Any one of the members.
    Union(Vec<Meta>),
    /// All of the members.
    Intersection(Vec<Meta>),
    /// Named enum over string members, already deduplicated.
    Enum(Vec<String>),
    /// Exactly this value.
    Literal(EnumValue),
    /// Indirection to a generated constant by name.
    Ref(String),
    /// Lower bound: value, length or item count.
    Min(f64),
    /// Upper bound: value, length or item count.
    Max(f64),
    /// Regex source without delimiters.
    Matches(String),
    /// ISO 8601 date-time string.
    Datetime,
    /// Email address string.
    Email,
    /// URL string.
    Url,
    /// UUID string.
    Uuid,
    /// Value is read-only.
    ReadOnly,
    /// Value used when absent.
    Default(DefaultValue),
    /// Property may be absent.
    Optional,
    /// Value may be `null`.
    Nullable,
    /// Property may be absent or `null`.
    Nullish,
    /// Schema of properties not listed in the object.
    Catchall(Vec<Meta>),
    /// Description text.
    Describe(String),
}

impl Meta {
    /// Whether this directive refines a preceding construct rather than
    /// standing on its own.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Meta::Min(_)
                | Meta::Max(_)
                | Meta::Matches(_)
                | Meta::Datetime
                | Meta::Email
                | Meta::Url
                | Meta::Uuid
                | Meta::ReadOnly
                | Meta::Default(_)
                | Meta::Optional
                | Meta::Nullable
                | Meta::Nullish
                | Meta::Catchall(_)
                | Meta::Describe(_)
        )
    }

    /// Ref names reachable from this node, in first-seen order.
    pub fn collect_refs<'m>(&'m self, out: &mut Vec<&'m str>) {
        match self {
            Meta::Ref(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Meta::Object(properties) => {
                for meta in properties.values().flatten() {
                    meta.collect_refs(out);
                }
            }
            Meta::Tuple(slots) => {
                for meta in slots.iter().flatten() {
                    meta.collect_refs(out);
                }
            }
            Meta::Array(metas)
            | Meta::Union(metas)
            | Meta::Intersection(metas)
            | Meta::Catchall(metas) => {
                for meta in metas {
                    meta.collect_refs(out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        assert!(Meta::ReadOnly.is_modifier());
        assert!(!Meta::Intersection(vec![]).is_modifier());
        assert!(Meta::Nullish.is_modifier());
        assert!(!Meta::Null.is_modifier());
        assert!(!Meta::Ref("petSchema".into()).is_modifier());
    }

    #[test]
    fn test_collect_refs_is_deduplicated_and_ordered() {
        let mut properties = IndexMap::new();
        properties.insert("a".to_string(), vec![Meta::Ref("tagSchema".into())]);
        properties.insert(
            "b".to_string(),
            vec![Meta::Array(vec![Meta::Ref("categorySchema".into())])],
        );
        properties.insert("c".to_string(), vec![Meta::Ref("tagSchema".into()), Meta::Optional]);
        let meta = Meta::Union(vec![Meta::Object(properties)]);

        let mut refs = Vec::new();
        meta.collect_refs(&mut refs);
        assert_eq!(refs, vec!["tagSchema", "categorySchema"]);
    }
}
