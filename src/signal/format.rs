//! Recursive signal formatting.
//!
//! Turns a raw signal bag into ordered, display-ready [`SignalEntry`] values:
//! primitives render to text, composites decompose into bounded-depth
//! [`StructuredItem`] trees, and entries are sorted and truncated for the
//! summary views. Every failure path degrades to the `—` placeholder; nothing
//! in this module returns an error or panics on caller data.

use super::layout::layout_hint;
use super::tone::classify;
use super::types::{EntryLimit, SignalEntry, StructuredItem};
use super::value::SignalValue;

/// Maximum nesting depth of a decomposed item tree. Composite values that
/// would exceed it are serialized to compact text instead of recursing.
pub const MAX_DEPTH: usize = 3;

/// Decimal digits kept when rendering numbers.
pub const PRECISION: usize = 10;

/// Placeholder shown for absent, blank, or unrepresentable values.
pub const PLACEHOLDER: &str = "—";

/// Kind context whose entries receive priority ordering; other contexts keep
/// the bag's insertion order.
pub const OVERALL_KIND: &str = "overall";

const PRIORITY_PROTOCOL_GROUPS: u8 = 0;
const PRIORITY_COMBINED: u8 = 1;
const PRIORITY_DEFAULT: u8 = 5;

/// Format a signal bag into ordered display entries.
///
/// Keys that are empty or whitespace-only are skipped. Entries keep the bag's
/// insertion order except under the [`OVERALL_KIND`] context, where protocol
/// group keys sort first and `combined` second. The `limit` cap applies after
/// ordering.
pub fn format_signals(
    signals: &[(String, SignalValue)],
    kind: &str,
    limit: EntryLimit,
) -> Vec<SignalEntry> {
    let mut entries: Vec<SignalEntry> = signals
        .iter()
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| build_entry(key, value))
        .collect();

    // Vec::sort_by_key is stable, so ties keep insertion order.
    entries.sort_by_key(|entry| entry_priority(kind, &entry.raw_key));

    match limit {
        EntryLimit::All => entries,
        EntryLimit::First(count) => {
            entries.truncate(count);
            entries
        }
    }
}

fn build_entry(raw_key: &str, value: &SignalValue) -> SignalEntry {
    let structured_children = decompose(value, 0, raw_key);
    let rendered_text = if structured_children.is_some() {
        String::new()
    } else {
        primitive_text(value)
    };
    SignalEntry {
        raw_key: raw_key.to_string(),
        display_key: humanize_key(raw_key),
        rendered_text,
        tone: classify(raw_key, value),
        structured_children,
    }
}

fn entry_priority(kind: &str, raw_key: &str) -> u8 {
    if !kind.trim().eq_ignore_ascii_case(OVERALL_KIND) {
        return PRIORITY_DEFAULT;
    }
    let key = raw_key.trim().to_ascii_lowercase();
    match key.as_str() {
        "components" | "protocols" => PRIORITY_PROTOCOL_GROUPS,
        "combined" => PRIORITY_COMBINED,
        _ => PRIORITY_DEFAULT,
    }
}

// ---------------------------------------------------------------------------
// Composite decomposition
// ---------------------------------------------------------------------------

/// Decompose a composite value into display items.
///
/// Primitives are not decomposable and return `None`. Empty composites yield
/// a single placeholder item. `depth` is the nesting level already consumed;
/// top-level callers pass 0. When `parent_key` names a protocol group, every
/// returned item carries the protocol layout hint.
pub fn decompose(
    value: &SignalValue,
    depth: usize,
    parent_key: &str,
) -> Option<Vec<StructuredItem>> {
    let mut items = match value {
        SignalValue::List(elements) => {
            if elements.is_empty() {
                vec![StructuredItem::leaf("Entries", PLACEHOLDER)]
            } else {
                elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| {
                        build_item(format!("Entry {}", index + 1), element, depth, "")
                    })
                    .collect()
            }
        }
        SignalValue::Map(entries) => {
            if entries.is_empty() {
                vec![StructuredItem::leaf("Value", PLACEHOLDER)]
            } else {
                entries
                    .iter()
                    .map(|(key, child)| build_item(humanize_key(key), child, depth, key))
                    .collect()
            }
        }
        _ => return None,
    };

    if let Some(layout) = layout_hint(parent_key) {
        for item in &mut items {
            item.layout = Some(layout);
        }
    }
    Some(items)
}

/// Build one item for a child value sitting one level below `depth`.
fn build_item(label: String, child: &SignalValue, depth: usize, child_key: &str) -> StructuredItem {
    if !child.is_composite() {
        return StructuredItem::leaf(label, primitive_text(child));
    }
    let child_depth = depth + 1;
    if child_depth >= MAX_DEPTH {
        // Recursing further would exceed the depth bound; flatten the rest.
        return StructuredItem::leaf(label, compact_text(child));
    }
    match decompose(child, child_depth, child_key) {
        Some(children) => StructuredItem::branch(label, children),
        None => StructuredItem::leaf(label, primitive_text(child)),
    }
}

// ---------------------------------------------------------------------------
// Primitive rendering
// ---------------------------------------------------------------------------

/// Render a primitive value to display text.
fn primitive_text(value: &SignalValue) -> String {
    match value {
        SignalValue::Null => PLACEHOLDER.to_string(),
        SignalValue::Bool(true) => "Yes".to_string(),
        SignalValue::Bool(false) => "No".to_string(),
        SignalValue::Number(number) => format_number(*number),
        SignalValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                trimmed.to_string()
            }
        }
        // Composites are decomposed before rendering; compact text keeps
        // this total for direct callers.
        SignalValue::List(_) | SignalValue::Map(_) => compact_text(value),
    }
}

/// Render a number rounded to [`PRECISION`] decimal digits, with trailing
/// zeros stripped and `-0` normalized to `0`. Non-finite values render as the
/// placeholder.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rendered = format!("{value:.precision$}", precision = PRECISION);
    // A fixed precision above zero always emits a fractional part, so
    // stripping trailing zeros and then the dot never eats integer digits.
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    if rendered == "-0" {
        "0".to_string()
    } else {
        rendered.to_string()
    }
}

// ---------------------------------------------------------------------------
// Compact serialization
// ---------------------------------------------------------------------------

/// Serialize a value to single-line JSON-shaped text, with numbers rendered
/// through [`format_number`] and non-finite numbers as `null`.
pub fn compact_text(value: &SignalValue) -> String {
    let mut out = String::new();
    write_compact(value, &mut out);
    out
}

fn write_compact(value: &SignalValue, out: &mut String) {
    match value {
        SignalValue::Null => out.push_str("null"),
        SignalValue::Bool(true) => out.push_str("true"),
        SignalValue::Bool(false) => out.push_str("false"),
        SignalValue::Number(number) => {
            if number.is_finite() {
                out.push_str(&format_number(*number));
            } else {
                out.push_str("null");
            }
        }
        SignalValue::Text(text) => write_quoted(text, out),
        SignalValue::List(elements) => {
            out.push('[');
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_compact(element, out);
            }
            out.push(']');
        }
        SignalValue::Map(entries) => {
            out.push('{');
            for (index, (key, child)) in entries.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_quoted(key, out);
                out.push(':');
                write_compact(child, out);
            }
            out.push('}');
        }
    }
}

fn write_quoted(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

// ---------------------------------------------------------------------------
// Key humanization
// ---------------------------------------------------------------------------

/// Humanize a raw signal key for display: separator runs collapse to single
/// spaces, surrounding separators drop, and each word is title-cased.
pub fn humanize_key(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut pending_space = false;
    let mut capitalize_next = true;
    for c in key.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            pending_space = !result.is_empty();
            capitalize_next = true;
            continue;
        }
        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
