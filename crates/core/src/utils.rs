//! Common utilities shared by the lowering, builder and rendering stages.
//!
//! Identifier casing, JS string escaping, URL template conversion and relative
//! module paths between generated files.

use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if a name needs quoting to be used as an object key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript double-quoted string literals.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Quote a string if needed for use as a property key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Sanitize an identifier to be a valid TypeScript identifier.
/// - Prepends `_` if it starts with a digit
/// - Escapes reserved words with a `_` prefix
pub fn sanitize_ts_identifier(name: &str) -> String {
    let camel = camel_case(name);
    if camel.is_empty() {
        return "_empty".to_string();
    }

    let mut result = camel;
    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result = format!("_{result}");
    }
    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result = format!("_{result}");
    }
    result
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter of a string.
pub fn uncapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert an arbitrary name (`add-pet`, `add_pet`, `Add Pet`, `AddPet`) to camelCase.
///
/// Word boundaries are any non-alphanumeric characters; inner capitals are kept.
pub fn camel_case(name: &str) -> String {
    let mut result = String::new();
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        if result.is_empty() {
            result.push_str(&uncapitalize_first(word));
        } else {
            result.push_str(&capitalize_first(word));
        }
    }
    result
}

/// Convert an arbitrary name to PascalCase.
pub fn pascal_case(name: &str) -> String {
    capitalize_first(&camel_case(name))
}

/// Convert an OpenAPI path template to the `:param` URL form (`/pet/{petId}` -> `/pet/:petId`).
pub fn to_url_path(path: &str) -> String {
    path.replace('{', ":").replace('}', "")
}

/// Convert an OpenAPI path template to a JS template literal body
/// (`/pet/{pet-id}` -> `` `/pet/${petId}` ``), sanitizing placeholder names.
pub fn to_template_literal(path: &str) -> String {
    let mut out = String::from("`");
    let mut current = String::new();
    let mut placeholder = String::new();
    let mut in_param = false;

    for c in path.chars() {
        if c == '{' {
            out.push_str(&current);
            current.clear();
            placeholder.clear();
            in_param = true;
        } else if c == '}' && in_param {
            out.push_str(&format!("${{{}}}", sanitize_ts_identifier(&placeholder)));
            in_param = false;
        } else if in_param {
            placeholder.push(c);
        } else {
            current.push(c);
        }
    }
    out.push_str(&current);
    out.push('`');
    out
}

/// Format a number the way it would be written in source: integral values
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Module specifier for importing `to` from a file located at `from`.
///
/// Both are file paths; the result uses forward slashes, always starts with
/// `./` or `../`, and drops the `.ts` extension.
pub fn relative_module_path(from: &Path, to: &Path) -> String {
    let from_dir: Vec<Component<'_>> = from
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_dir
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..from_dir.len() {
        segments.push("..".to_string());
    }
    for part in &to_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }

    let mut joined = segments.join("/");
    if let Some(stripped) = joined.strip_suffix(".ts") {
        joined = stripped.to_string();
    }
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_needs_bracket_notation() {
        assert!(!needs_bracket_notation("foo"));
        assert!(!needs_bracket_notation("_foo"));
        assert!(!needs_bracket_notation("$foo"));
        assert!(!needs_bracket_notation("foo123"));

        assert!(needs_bracket_notation(""));
        assert!(needs_bracket_notation("123foo"));
        assert!(needs_bracket_notation("foo-bar"));
        assert!(needs_bracket_notation("foo.bar"));
        assert!(needs_bracket_notation("foo:bar"));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("hello"), "hello");
        assert_eq!(escape_js_string("hel\"lo"), "hel\\\"lo");
        assert_eq!(escape_js_string("hel\\lo"), "hel\\\\lo");
        assert_eq!(escape_js_string("^\\d+$"), "^\\\\d+$");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("123"), "\"123\"");
    }

    #[test]
    fn test_sanitize_ts_identifier() {
        assert_eq!(sanitize_ts_identifier("foo"), "foo");
        assert_eq!(sanitize_ts_identifier("foo-bar"), "fooBar");
        assert_eq!(sanitize_ts_identifier("foo.bar"), "fooBar");
        assert_eq!(sanitize_ts_identifier("123foo"), "_123foo");
        assert_eq!(sanitize_ts_identifier("delete"), "_delete");
        assert_eq!(sanitize_ts_identifier("---"), "_empty");
    }

    #[test]
    fn test_casing() {
        assert_eq!(camel_case("addPet"), "addPet");
        assert_eq!(camel_case("AddPet"), "addPet");
        assert_eq!(camel_case("add_pet"), "addPet");
        assert_eq!(camel_case("Add Pet"), "addPet");
        assert_eq!(pascal_case("add-pet"), "AddPet");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_url_conversions() {
        assert_eq!(to_url_path("/pet/{petId}"), "/pet/:petId");
        assert_eq!(to_url_path("/store/order"), "/store/order");
        assert_eq!(to_template_literal("/pet/{petId}/uploadImage"), "`/pet/${petId}/uploadImage`");
        assert_eq!(to_template_literal("/pet/{pet-id}"), "`/pet/${petId}`");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_relative_module_path() {
        let from = PathBuf::from("gen/clients/petController/addPet.ts");
        let to = PathBuf::from("gen/zod/petController/AddPet.ts");
        assert_eq!(relative_module_path(&from, &to), "../../zod/petController/AddPet");

        let sibling = PathBuf::from("gen/zod/petSchema.ts");
        let owner = PathBuf::from("gen/zod/categorySchema.ts");
        assert_eq!(relative_module_path(&owner, &sibling), "./petSchema");
    }
}
