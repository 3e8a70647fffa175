//! Response-body highlighting.
//!
//! Compiles a highlight spec into a regex and wraps every match in the body
//! with `<mark>` tags, escaping all text on the way out. Pattern problems
//! never surface to the caller: a spec that cannot be compiled degrades to
//! plain escaped text.
//!
//! # Sub-modules
//! - [`escape`] - HTML entity escaping
//! - [`spec`] - pattern spec parsing and compilation

pub mod escape;
pub mod spec;

#[cfg(test)]
mod tests;

pub use escape::escape_html;
pub use spec::{
    DEFAULT_HIGHLIGHT_TOKENS, DEFAULT_SPEC, PatternError, PatternFlags, PatternSpec,
};

use regex::Regex;

/// Opening tag wrapped around each match.
const MARK_OPEN: &str = "<mark>";
/// Closing tag wrapped around each match.
const MARK_CLOSE: &str = "</mark>";

/// Highlight `spec` matches inside `body` and return HTML-safe text.
///
/// An empty body yields an empty string; an absent or empty spec yields the
/// escaped body with no marks. Specs that fail to compile fall back through
/// the chain in [`compile_spec`] and ultimately to escape-only output, so
/// this function cannot fail.
pub fn highlight(body: &str, spec: Option<&str>) -> String {
    if body.is_empty() {
        return String::new();
    }
    let Some(spec) = spec.filter(|spec| !spec.is_empty()) else {
        return escape_html(body);
    };
    match compile_spec(spec) {
        Some(regex) => wrap_matches(body, &regex),
        None => escape_html(body),
    }
}

/// Compile a spec string, falling back where possible.
///
/// The parsed form is tried first. If a delimited literal fails (bad flags,
/// or a pattern that only parses under another dialect) the whole spec is
/// retried as a raw pattern, matching it literally rather than dropping it.
/// Raw specs already compiled exactly that string, so only delimited specs
/// get the retry; the built-in default gets none.
fn compile_spec(spec: &str) -> Option<Regex> {
    let parsed = PatternSpec::parse(spec);
    match parsed.compile() {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::debug!("Highlight spec {spec:?} failed to compile: {err}");
            if !matches!(parsed, PatternSpec::Delimited { .. }) {
                return None;
            }
            match Regex::new(spec) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    log::debug!("Highlight spec {spec:?} failed as a raw pattern: {err}");
                    None
                }
            }
        }
    }
}

/// Scan `body` left to right, escaping unmatched spans and mark-wrapping
/// matches.
///
/// Matches are non-overlapping and the iterator steps past zero-length
/// matches on its own, so the scan always terminates. Every span of `body`
/// passes through [`escape_html`] exactly once.
fn wrap_matches(body: &str, regex: &Regex) -> String {
    let mut out = String::with_capacity(body.len() + body.len() / 4);
    let mut last_end = 0;
    for found in regex.find_iter(body) {
        out.push_str(&escape_html(&body[last_end..found.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(found.as_str()));
        out.push_str(MARK_CLOSE);
        last_end = found.end();
    }
    out.push_str(&escape_html(&body[last_end..]));
    out
}
