//! Display-ready output types produced by the signal formatter.

use serde::Serialize;

use super::layout::ItemLayout;
use super::tone::Tone;

/// One display entry per top-level key of a signal bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEntry {
    /// The key exactly as it appeared in the signal bag.
    pub raw_key: String,
    /// Humanized key for display, e.g. `uptime_score` → `Uptime Score`.
    pub display_key: String,
    /// Rendered primitive text; empty when `structured_children` is set.
    pub rendered_text: String,
    /// Qualitative tone of the entry's value.
    pub tone: Tone,
    /// Decomposed children for composite values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_children: Option<Vec<StructuredItem>>,
}

/// A recursively decomposed, display-ready node of a composite signal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredItem {
    /// Display label for this node.
    pub label: String,
    /// Rendered leaf text; absent when `children` carries the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Nested items for composite nodes above the depth limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<StructuredItem>>,
    /// Layout hint for the presentation layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<ItemLayout>,
}

impl StructuredItem {
    /// Leaf item carrying rendered text.
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            children: None,
            layout: None,
        }
    }

    /// Item whose content is a list of nested children.
    pub fn branch(label: impl Into<String>, children: Vec<StructuredItem>) -> Self {
        Self {
            label: label.into(),
            value: None,
            children: Some(children),
            layout: None,
        }
    }
}

/// Cap applied to the formatted entry list after ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLimit {
    /// Return every entry.
    All,
    /// Return at most the first `n` entries; zero yields an empty list.
    First(usize),
}
