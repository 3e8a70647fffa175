use super::*;

// -- Degenerate inputs --

#[test]
fn test_empty_body_yields_empty_output() {
    assert_eq!(highlight("", Some("default")), "");
    assert_eq!(highlight("", None), "");
}

#[test]
fn test_absent_spec_escapes_only() {
    assert_eq!(highlight("a < b & c", None), "a &lt; b &amp; c");
    assert_eq!(highlight("a < b & c", Some("")), "a &lt; b &amp; c");
}

// -- Default spec --

#[test]
fn test_default_wraps_header_tokens_case_insensitively() {
    assert_eq!(
        highlight("USER-AGENT: Mozilla/5.0", Some("default")),
        "<mark>USER-AGENT</mark>: Mozilla/5.0"
    );
    assert_eq!(
        highlight("user-agent: curl/8", Some("default")),
        "<mark>user-agent</mark>: curl/8"
    );
}

#[test]
fn test_default_matches_underscore_variants() {
    assert_eq!(
        highlight("USER_AGENT=python-requests", Some("default")),
        "<mark>USER_AGENT</mark>=python-requests"
    );
}

#[test]
fn test_default_marks_every_token_occurrence() {
    assert_eq!(
        highlight("Host: a\nHost: b", Some("default")),
        "<mark>Host</mark>: a\n<mark>Host</mark>: b"
    );
}

#[test]
fn test_default_matches_substrings() {
    // Token matching is substring-based, not word-bounded.
    assert_eq!(highlight("Ghost", Some("default")), "G<mark>host</mark>");
}

#[test]
fn test_default_prefers_earlier_tokens() {
    // `ACCEPT` precedes `ACCEPT-ENCODING` in the token list, so the shorter
    // alternative wins at the same position.
    assert_eq!(
        highlight("Accept-Encoding: gzip", Some("default")),
        "<mark>Accept</mark>-Encoding: gzip"
    );
}

// -- Custom specs --

#[test]
fn test_raw_pattern_marks_all_matches() {
    assert_eq!(
        highlight("socks5 then socks4", Some("socks[45]")),
        "<mark>socks5</mark> then <mark>socks4</mark>"
    );
}

#[test]
fn test_delimited_pattern_applies_flags() {
    assert_eq!(
        highlight("Mozilla/5.0 (mozilla)", Some("/mozilla/i")),
        "<mark>Mozilla</mark>/5.0 (<mark>mozilla</mark>)"
    );
}

#[test]
fn test_matches_do_not_overlap() {
    assert_eq!(
        highlight("aaaa", Some("aa")),
        "<mark>aa</mark><mark>aa</mark>"
    );
}

#[test]
fn test_unicode_bodies_highlight_cleanly() {
    assert_eq!(
        highlight("based in 東京 datacenter", Some("東京")),
        "based in <mark>東京</mark> datacenter"
    );
}

// -- Escaping guarantees --

#[test]
fn test_unmatched_spans_are_escaped() {
    assert_eq!(
        highlight("<b>host</b>", Some("host")),
        "&lt;b&gt;<mark>host</mark>&lt;/b&gt;"
    );
}

#[test]
fn test_matched_spans_are_escaped() {
    assert_eq!(
        highlight("x<b>y", Some("<b>")),
        "x<mark>&lt;b&gt;</mark>y"
    );
}

#[test]
fn test_no_double_escaping() {
    assert_eq!(
        highlight("a & b", Some("b")),
        "a &amp; <mark>b</mark>"
    );
}

// -- Fallbacks --

#[test]
fn test_invalid_pattern_falls_back_to_escape() {
    assert_eq!(
        highlight("tunnel <ok>", Some("(unclosed")),
        "tunnel &lt;ok&gt;"
    );
}

#[test]
fn test_failed_literal_retries_as_raw_text() {
    // `/foo/Z` fails as a delimited literal (unknown flag) but compiles as a
    // raw pattern matching itself.
    assert_eq!(
        highlight("path /foo/Z here", Some("/foo/Z")),
        "path <mark>/foo/Z</mark> here"
    );
}

#[test]
fn test_invalid_delimited_and_raw_falls_back_to_escape() {
    assert_eq!(
        highlight("a < b", Some("/(bad/i")),
        "a &lt; b"
    );
}

// -- Zero-length matches --

#[test]
fn test_zero_length_matches_terminate() {
    assert_eq!(
        highlight("abc", Some("x*")),
        "<mark></mark>a<mark></mark>b<mark></mark>c<mark></mark>"
    );
}

#[test]
fn test_empty_alternation_terminates() {
    // The empty match abutting the end of the `x` match is suppressed, so
    // marks stay non-overlapping.
    assert_eq!(
        highlight("axa", Some("x|")),
        "<mark></mark>a<mark>x</mark>a<mark></mark>"
    );
}
