//! Content-type rules: validation of caller-supplied MIME types and
//! autodetection for bodies that don't declare one.

use regex::Regex;
use std::sync::LazyLock;

/// MIME types the gateway will accept or emit. The list is closed on
/// purpose: this endpoint relays plain-text and HTML mail, nothing else.
const ALLOWED_TYPES: [&str; 2] = ["text/plain", "text/html"];

/// General MIME token syntax, optionally followed by `; key=value` parameters.
static MIME_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$&^_-]*/[a-zA-Z0-9!#$&^_-]*(\s*;\s*[a-zA-Z0-9!#$&^_-]*=[a-zA-Z0-9!#$&^_-]*)*$")
        .unwrap()
});

/// Anything that looks like a markup tag: `<`, any non-`>` run, `>`.
static HTML_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Check a caller-supplied MIME type: syntax first, then the allow-list.
///
/// The allow-list comparison is case-insensitive; a type with parameters
/// (`text/html; charset=utf-8`) passes the syntax check but not the
/// allow-list, and is rejected.
pub fn is_valid_content_type(value: &str) -> bool {
    if !MIME_TYPE_PATTERN.is_match(value) {
        return false;
    }

    ALLOWED_TYPES.contains(&value.to_ascii_lowercase().as_str())
}

/// Detect HTML bodies by the presence of any tag-like substring.
pub fn looks_like_html(body: &str) -> bool {
    HTML_TAG_PATTERN.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_types_pass() {
        assert!(is_valid_content_type("text/plain"));
        assert!(is_valid_content_type("text/html"));
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        assert!(is_valid_content_type("TEXT/HTML"));
        assert!(is_valid_content_type("Text/Plain"));
    }

    #[test]
    fn test_syntactically_valid_but_not_allowed_is_rejected() {
        // The regex alone would accept these; the allow-list must not.
        assert!(!is_valid_content_type("application/json"));
        assert!(!is_valid_content_type("image/png"));
        assert!(!is_valid_content_type("text/csv"));
    }

    #[test]
    fn test_invalid_syntax_is_rejected() {
        assert!(!is_valid_content_type("not-a-mime"));
        assert!(!is_valid_content_type("text html"));
        assert!(!is_valid_content_type("text/ht ml"));
        assert!(!is_valid_content_type(""));
    }

    #[test]
    fn test_parameters_fail_the_allow_list() {
        assert!(!is_valid_content_type("text/html; charset=utf-8"));
    }

    #[test]
    fn test_html_detection() {
        assert!(looks_like_html("<b>hi</b>"));
        assert!(looks_like_html("before <p>after"));
        assert!(!looks_like_html("hi there"));
        assert!(!looks_like_html("a < b"));
        // A `<` later closed by any `>` counts as a tag, even across words.
        assert!(looks_like_html("a < b and b > a"));
    }

    #[test]
    fn test_empty_tag_counts_as_html() {
        assert!(looks_like_html("hello <> world"));
    }
}
