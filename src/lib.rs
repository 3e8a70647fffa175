//! Signal presentation and response highlighting for ProxyScope.
//!
//! ProxyScope checks proxies and gathers per-protocol reputation signals;
//! this crate turns those raw signal bags into display-ready structures and
//! highlights pattern matches inside captured response bodies.
//!
//! # Features
//! - Recursive signal formatting with a bounded decomposition depth
//! - Qualitative tone classification per signal key and value
//! - Protocol-grid layout hints for component groups
//! - Regex highlighting with HTML-safe output and forgiving pattern fallbacks
//!
//! Everything here is a pure transform: no I/O, no shared state, and no
//! panics on caller data. Render paths can call these functions on every
//! pass; identical inputs always produce identical outputs.

pub mod highlight;
pub mod signal;

pub use highlight::{
    DEFAULT_HIGHLIGHT_TOKENS, DEFAULT_SPEC, PatternError, PatternFlags, PatternSpec, escape_html,
    highlight,
};
pub use signal::{
    EntryLimit, ItemLayout, SignalEntry, SignalValue, StructuredItem, Tone, classify,
    format_signals,
};
