//! Highlight pattern specs.
//!
//! A spec string arrives alongside a verification response and selects what
//! to mark in the body: the sentinel `"default"` for the built-in header
//! token pattern, a delimited literal like `/socks[45]/i`, or a raw pattern.
//! Compilation reports errors; the caller decides how to fall back.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Sentinel spec selecting the built-in header token pattern.
pub const DEFAULT_SPEC: &str = "default";

/// Header tokens matched by the [`DEFAULT_SPEC`] pattern, in order. Literal
/// hyphens widen to `[-_]` so snake_case header variants match too.
pub const DEFAULT_HIGHLIGHT_TOKENS: &[&str] =
    &["USER-AGENT", "HOST", "ACCEPT", "ACCEPT-ENCODING"];

/// Errors produced while turning a pattern spec into a compiled regex.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A flag letter outside the recognized set.
    #[error("unsupported pattern flag '{0}'")]
    UnsupportedFlag(char),
    /// The pattern itself failed to compile.
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// Regex flags parsed from the trailing segment of a delimited literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl PatternFlags {
    /// Parse a flag segment letter by letter.
    ///
    /// `g`, `u` and `y` are accepted and ignored: scanning here is always
    /// global and operates on UTF-8 text. Any other letter is an error.
    pub fn parse(flags: &str) -> Result<Self, PatternError> {
        let mut parsed = Self::default();
        for c in flags.chars() {
            match c {
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                'x' => parsed.ignore_whitespace = true,
                'g' | 'u' | 'y' => {}
                other => return Err(PatternError::UnsupportedFlag(other)),
            }
        }
        Ok(parsed)
    }
}

/// A parsed highlight pattern spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    /// The built-in header token pattern.
    Default,
    /// A `/pattern/flags` delimited literal.
    Delimited { pattern: String, flags: String },
    /// A bare pattern string.
    Raw(String),
}

impl PatternSpec {
    /// Classify a spec string. Never fails; strings that look like neither
    /// the sentinel nor a delimited literal are raw patterns.
    pub fn parse(spec: &str) -> Self {
        if spec == DEFAULT_SPEC {
            return Self::Default;
        }
        if let Some((pattern, flags)) = split_delimited(spec) {
            return Self::Delimited {
                pattern: pattern.to_string(),
                flags: flags.to_string(),
            };
        }
        Self::Raw(spec.to_string())
    }

    /// Compile this spec into a scanning regex.
    pub fn compile(&self) -> Result<Regex, PatternError> {
        match self {
            Self::Default => default_token_regex(),
            Self::Delimited { pattern, flags } => {
                let flags = PatternFlags::parse(flags)?;
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(flags.case_insensitive)
                    .multi_line(flags.multi_line)
                    .dot_matches_new_line(flags.dot_matches_new_line)
                    .ignore_whitespace(flags.ignore_whitespace)
                    .build()?;
                Ok(regex)
            }
            Self::Raw(pattern) => Ok(Regex::new(pattern)?),
        }
    }
}

/// Split a `/pattern/flags` literal into pattern and flag segments.
///
/// Requires a leading `/` and a later closing `/`; the flag segment is
/// whatever follows the last slash, so patterns may contain `/` freely.
fn split_delimited(spec: &str) -> Option<(&str, &str)> {
    let rest = spec.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Build the built-in pattern: each token regex-escaped with hyphens widened
/// to `[-_]`, all joined as alternatives, compiled case-insensitive.
fn default_token_regex() -> Result<Regex, PatternError> {
    let alternatives: Vec<String> = DEFAULT_HIGHLIGHT_TOKENS
        .iter()
        .map(|token| regex::escape(token).replace(r"\-", "[-_]"))
        .collect();
    let regex = RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()?;
    Ok(regex)
}
