//! Structured value serializer.
//!
//! Renders a [`Value`] tree as deterministic, human-readable nested text for
//! the debug bar's dump panel. Scalars render as bare literals; sequences,
//! mappings, and structured values render across multiple lines with
//! two-space indentation per level. Recursion is bounded by a depth cap:
//! any node deeper than the cap renders as `...` regardless of its variant.
//!
//! Strings are wrapped in double quotes with no escaping of embedded quotes
//! or control characters. The output is display text, never re-parsed; the
//! JSON envelope it ships in is escaped separately by `serde_json`.
//!
//! # Example
//! ```
//! use debugbar_client::{serialize, Value};
//!
//! let v = Value::map([("a", 1i64)]);
//! assert_eq!(serialize(&v), "[\n  'a' => 1\n]");
//! ```

use crate::value::{MapKey, Value};

/// Default maximum recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Renders a value with the default depth cap.
pub fn serialize(value: &Value) -> String {
    serialize_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Renders a value, truncating nodes deeper than `max_depth` to `...`.
///
/// Pure and deterministic: equal inputs yield byte-identical output, and the
/// recursion never exceeds `max_depth` calls along any path.
pub fn serialize_with_depth(value: &Value, max_depth: usize) -> String {
    let mut out = String::new();
    render(value, 0, max_depth, &mut out);
    out
}

/// Per-variant dispatch. `depth` is 0 for the root call.
fn render(value: &Value, depth: usize, max_depth: usize, out: &mut String) {
    if depth > max_depth {
        out.push_str("...");
        return;
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Seq(items) => render_seq(items, depth, max_depth, out),
        Value::Map(entries) => render_map(entries, depth, max_depth, out),
        Value::Structured { name, fields } => {
            render_structured(name, fields, depth, max_depth, out);
        }
    }
}

/// `[]` when empty, otherwise one element per line at `depth + 1`
/// indentation with the closing bracket back at `depth`.
fn render_seq(items: &[Value], depth: usize, max_depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    let indent = make_indent(depth);
    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        out.push_str("  ");
        render(item, depth + 1, max_depth, out);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push(']');
}

/// Same bracketing as a sequence, with each entry prefixed by its key:
/// `'key' => ` for string keys, the bare integer for integer keys.
/// An empty mapping is indistinguishable from an empty sequence.
fn render_map(entries: &[(MapKey, Value)], depth: usize, max_depth: usize, out: &mut String) {
    if entries.is_empty() {
        out.push_str("[]");
        return;
    }

    let indent = make_indent(depth);
    out.push_str("[\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        out.push_str("  ");
        match key {
            MapKey::Str(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            MapKey::Int(n) => out.push_str(&n.to_string()),
        }
        out.push_str(" => ");
        render(value, depth + 1, max_depth, out);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push(']');
}

/// `Name {}` when the value has no fields, otherwise `Name {` followed by
/// one `field: value` line per field and a matching-indent `}`.
fn render_structured(
    name: &str,
    fields: &[(String, Value)],
    depth: usize,
    max_depth: usize,
    out: &mut String,
) {
    if fields.is_empty() {
        out.push_str(name);
        out.push_str(" {}");
        return;
    }

    let indent = make_indent(depth);
    out.push_str(name);
    out.push_str(" {\n");
    for (i, (field, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&indent);
        out.push_str("  ");
        out.push_str(field);
        out.push_str(": ");
        render(value, depth + 1, max_depth, out);
    }
    out.push('\n');
    out.push_str(&indent);
    out.push('}');
}

/// Generates a 2-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
