//! Reputation signal presentation.
//!
//! Converts the dynamically-shaped signal bags returned by the scoring
//! service into ordered, bounded-depth display entries with qualitative tone
//! annotations. All transforms here are pure and total: bad input degrades to
//! placeholders, never to errors.
//!
//! # Sub-modules
//! - [`value`] - the dynamic signal value type and JSON ingestion
//! - [`tone`] - qualitative tone classification
//! - [`layout`] - structural layout hints
//! - [`types`] - display-ready output types
//! - [`format`] - recursive formatting, ordering and truncation

pub mod format;
pub mod layout;
pub mod tone;
pub mod types;
pub mod value;

pub use format::{
    MAX_DEPTH, OVERALL_KIND, PLACEHOLDER, PRECISION, compact_text, decompose, format_number,
    format_signals, humanize_key,
};
pub use layout::{ItemLayout, layout_hint};
pub use tone::{Tone, classify};
pub use types::{EntryLimit, SignalEntry, StructuredItem};
pub use value::SignalValue;
