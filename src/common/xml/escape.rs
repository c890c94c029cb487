use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use fods::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Other entity or character references are left unchanged.
///
/// # Examples
///
/// ```
/// use fods::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("R&amp;D &lt;x&gt;"), "R&D <x>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// First character in `s` that XML 1.0 does not allow anywhere in a
/// document, escaped or not.
///
/// That is every C0 control except tab, line feed and carriage return, plus
/// the noncharacters U+FFFE and U+FFFF.
///
/// # Examples
///
/// ```
/// use fods::common::xml::forbidden_xml_char;
/// assert_eq!(forbidden_xml_char("a\u{1}b"), Some('\u{1}'));
/// assert_eq!(forbidden_xml_char("tab\tand\nnewline"), None);
/// ```
pub fn forbidden_xml_char(s: &str) -> Option<char> {
    s.chars().find(|&c| {
        (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) || matches!(c, '\u{FFFE}' | '\u{FFFF}')
    })
}

/// How raw cell text is written into attribute values and `<text:p>` bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Escape `& < > " '`.
    ///
    /// Characters that XML 1.0 forbids outright (see [`forbidden_xml_char`])
    /// cannot be escaped and pass through unchanged. JSON input containing
    /// them is rejected when it is read. Cells built in Rust are not checked.
    #[default]
    Escape,
    /// Copy values through untouched.
    ///
    /// Reproduces legacy output byte for byte. A value containing markup
    /// characters produces a broken document under this policy.
    Verbatim,
}

impl EscapePolicy {
    /// Apply the policy to a piece of text.
    ///
    /// # Examples
    ///
    /// ```
    /// use fods::common::xml::EscapePolicy;
    /// assert_eq!(EscapePolicy::Escape.apply("R&D"), "R&amp;D");
    /// assert_eq!(EscapePolicy::Verbatim.apply("R&D"), "R&D");
    /// ```
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            EscapePolicy::Verbatim => Cow::Borrowed(s),
            EscapePolicy::Escape if !s.contains(['&', '<', '>', '"', '\'']) => Cow::Borrowed(s),
            EscapePolicy::Escape => Cow::Owned(escape_xml(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_policy_borrows_clean_text() {
        assert!(matches!(EscapePolicy::Escape.apply("42.3324"), Cow::Borrowed(_)));
        assert!(matches!(EscapePolicy::Escape.apply("a<b"), Cow::Owned(_)));
    }

    #[test]
    fn test_default_policy_escapes() {
        assert_eq!(EscapePolicy::default(), EscapePolicy::Escape);
    }

    #[test]
    fn test_unescape_all_entities() {
        assert_eq!(unescape_xml("&amp;&lt;&gt;&quot;&apos;"), r#"&<>"'"#);
        assert_eq!(unescape_xml(&escape_xml("R&D <\"x\">")), "R&D <\"x\">");
        assert_eq!(unescape_xml("&unknown; &#38;"), "&unknown; &#38;");
    }

    #[test]
    fn test_forbidden_xml_char() {
        assert_eq!(forbidden_xml_char("a\u{1}b"), Some('\u{1}'));
        assert_eq!(forbidden_xml_char("\u{1F}"), Some('\u{1F}'));
        assert_eq!(forbidden_xml_char("x\u{FFFF}"), Some('\u{FFFF}'));
        assert_eq!(forbidden_xml_char("line\r\n\tcol"), None);
        assert_eq!(forbidden_xml_char("€ 42"), None);
    }

    #[test]
    fn test_policy_does_not_touch_control_characters() {
        assert_eq!(EscapePolicy::Escape.apply("a\u{1}b"), "a\u{1}b");
    }
}
