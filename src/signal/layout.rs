//! Structural layout hints inferred from signal keys.

use serde::Serialize;

/// Layout hint attached to decomposed children for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemLayout {
    /// Children are per-protocol score groups and render as a protocol grid.
    Protocol,
}

/// Key whose decomposed children carry the protocol layout.
const PROTOCOL_PARENT_KEY: &str = "components";

/// Infer the layout for children decomposed under `parent_key`.
///
/// The comparison ignores case and surrounding whitespace; keys arrive from
/// an external scoring service and are not normalized upstream.
pub fn layout_hint(parent_key: &str) -> Option<ItemLayout> {
    if parent_key.trim().eq_ignore_ascii_case(PROTOCOL_PARENT_KEY) {
        Some(ItemLayout::Protocol)
    } else {
        None
    }
}
