//! Small HTML text helpers shared by the parser and the renderers
//!
//! Nothing here understands table structure; these are the string-level
//! primitives: entity escaping, tag stripping, and attribute extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    static ref ATTR_RE: Regex =
        Regex::new(r#"([a-zA-Z][a-zA-Z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref WS_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Escape text for use inside an element body
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the handful of entities the extraction service emits
pub fn unescape(input: &str) -> String {
    input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Remove all tags, leaving only text content
pub fn strip_tags(input: &str) -> String {
    TAG_RE.replace_all(input, "").to_string()
}

/// Text content of a markup fragment: tags removed, entities decoded,
/// whitespace collapsed and trimmed
pub fn text_content(input: &str) -> String {
    let stripped = strip_tags(input);
    let decoded = unescape(&stripped);
    WS_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Look up a named attribute inside a raw attribute string
///
/// `attrs` is everything between the tag name and the closing `>`,
/// e.g. ` src="a.png" alt='x'`.
pub fn attr_value(attrs: &str, name: &str) -> Option<String> {
    for caps in ATTR_RE.captures_iter(attrs) {
        if caps[1].eq_ignore_ascii_case(name) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            return Some(unescape(value));
        }
    }
    None
}

/// Whether a class attribute string contains the given class token
pub fn has_class(attrs: &str, class: &str) -> bool {
    match attr_value(attrs, "class") {
        Some(value) => value.split_whitespace().any(|c| c == class),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_roundtrip() {
        let raw = "a < b & c > \"d\"";
        assert_eq!(unescape(&escape_attr(raw)), raw);
    }

    #[test]
    fn test_text_content() {
        assert_eq!(text_content("  <b>Widget</b>&nbsp;2  "), "Widget 2");
        assert_eq!(text_content("<img src=\"x.png\">"), "");
    }

    #[test]
    fn test_attr_value() {
        let attrs = r#" src="img/a.png" alt='logo' draggable="true""#;
        assert_eq!(attr_value(attrs, "src").as_deref(), Some("img/a.png"));
        assert_eq!(attr_value(attrs, "alt").as_deref(), Some("logo"));
        assert_eq!(attr_value(attrs, "missing"), None);
    }

    #[test]
    fn test_has_class() {
        let attrs = r#" class="action-column-cell shaded""#;
        assert!(has_class(attrs, "action-column-cell"));
        assert!(has_class(attrs, "shaded"));
        assert!(!has_class(attrs, "action"));
    }
}
