//! Zod rendering of meta directives.
//!
//! A directive list renders as one chain: the first construct, then every
//! modifier as a method call (`z.string().min(1).optional()`). A further
//! construct in the same list is joined with `.and(...)`.

use crate::builder::SchemaEntry;
use crate::meta::{DefaultValue, Meta, Primitive};
use crate::spec::EnumValue;
use crate::utils::{escape_js_string, format_number, quote_if_needed};

use super::Render;

impl Render for [Meta] {
    fn render(&self) -> String {
        let mut out = String::new();
        for meta in self {
            if out.is_empty() {
                if meta.is_modifier() {
                    out.push_str("z.any()");
                    out.push_str(&render_modifier(meta));
                } else {
                    out.push_str(&render_construct(meta));
                }
            } else if *meta == Meta::Null {
                out.push_str(".nullable()");
            } else if meta.is_modifier() {
                out.push_str(&render_modifier(meta));
            } else {
                out.push_str(&format!(".and({})", render_construct(meta)));
            }
        }
        if out.is_empty() {
            out.push_str("z.any()");
        }
        out
    }
}

impl Render for Meta {
    fn render(&self) -> String {
        std::slice::from_ref(self).render()
    }
}

impl Render for SchemaEntry {
    fn render(&self) -> String {
        format!(
            "export const {const_name} = {chain};\nexport type {type_name} = z.infer<typeof {const_name}>;\n",
            const_name = self.const_name,
            type_name = self.type_name,
            chain = self.metas.render(),
        )
    }
}

impl Render for [SchemaEntry] {
    fn render(&self) -> String {
        self.iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Constructs
// =============================================================================

fn render_construct(meta: &Meta) -> String {
    match meta {
        Meta::Any => "z.any()".to_string(),
        Meta::Primitive(primitive) => render_primitive(*primitive).to_string(),
        Meta::Null => "z.null()".to_string(),
        Meta::Object(properties) => {
            if properties.is_empty() {
                return "z.object({})".to_string();
            }
            let fields = properties
                .iter()
                .map(|(name, metas)| format!("{}: {}", quote_if_needed(name), metas.render()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("z.object({{ {fields} }})")
        }
        Meta::Array(items) => format!("z.array({})", items.render()),
        Meta::Tuple(slots) => {
            let slots = slots
                .iter()
                .map(|slot| slot.render())
                .collect::<Vec<_>>()
                .join(", ");
            format!("z.tuple([{slots}])")
        }
        Meta::Union(members) => match members.as_slice() {
            [] => "z.any()".to_string(),
            [single] => single.render(),
            _ => {
                let members = members
                    .iter()
                    .map(Render::render)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("z.union([{members}])")
            }
        },
        Meta::Intersection(members) => render_intersection(members),
        Meta::Enum(values) => {
            if values.is_empty() {
                return "z.any()".to_string();
            }
            let values = values
                .iter()
                .map(|value| format!("\"{}\"", escape_js_string(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("z.enum([{values}])")
        }
        Meta::Literal(value) => format!("z.literal({})", render_literal(value)),
        Meta::Ref(name) => format!("z.lazy(() => {name})"),
        modifier => format!("z.any(){}", render_modifier(modifier)),
    }
}

fn render_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "z.string()",
        Primitive::Number => "z.number()",
        Primitive::Integer => "z.number().int()",
        Primitive::Boolean => "z.boolean()",
    }
}

fn render_literal(value: &EnumValue) -> String {
    match value {
        EnumValue::String(s) => format!("\"{}\"", escape_js_string(s)),
        other => other.to_string(),
    }
}

/// Members are split into segments at every construct so that modifiers stay
/// attached to the construct they follow.
fn render_intersection(members: &[Meta]) -> String {
    let mut segments: Vec<Vec<Meta>> = Vec::new();
    for member in members {
        match segments.last_mut() {
            Some(segment) if member.is_modifier() => segment.push(member.clone()),
            _ => segments.push(vec![member.clone()]),
        }
    }

    let mut rendered = segments.iter().map(|segment| segment.render());
    let Some(first) = rendered.next() else {
        return "z.any()".to_string();
    };
    rendered.fold(first, |acc, next| format!("{acc}.and({next})"))
}

// =============================================================================
// Modifiers
// =============================================================================

fn render_modifier(meta: &Meta) -> String {
    match meta {
        Meta::Min(n) => format!(".min({})", format_number(*n)),
        Meta::Max(n) => format!(".max({})", format_number(*n)),
        Meta::Matches(pattern) => format!(".regex(new RegExp('{}'))", escape_single_quoted(pattern)),
        Meta::Datetime => ".datetime()".to_string(),
        Meta::Email => ".email()".to_string(),
        Meta::Url => ".url()".to_string(),
        Meta::Uuid => ".uuid()".to_string(),
        Meta::ReadOnly => ".readonly()".to_string(),
        Meta::Default(DefaultValue::String(value)) => {
            format!(".default(\"{}\")", escape_js_string(value))
        }
        Meta::Default(DefaultValue::Bool(value)) => format!(".default({value})"),
        Meta::Optional => ".optional()".to_string(),
        Meta::Nullable | Meta::Null => ".nullable()".to_string(),
        Meta::Nullish => ".nullish()".to_string(),
        Meta::Catchall(metas) => format!(".catchall({})", metas.render()),
        Meta::Describe(text) => format!(".describe(\"{}\")", escape_js_string(text)),
        construct => format!(".and({})", render_construct(construct)),
    }
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
