//! Twitch/IRCv3 message tag parsing and escaping.

use std::collections::BTreeMap;
use std::fmt::{Result as FmtResult, Write};

/// Parse the tag segment of a line (the text after `@`, up to the first space).
///
/// Segments are separated by `;`. Empty segments are skipped. A segment
/// without `=` becomes a key with an empty value. Values are kept exactly as
/// they appear on the wire; see [`unescape_tag_value`] for the decoded form.
///
/// ```
/// use twitch_chat_proto::message::tags::parse_tags;
///
/// let tags = parse_tags("a=1;b;c=3");
/// assert_eq!(tags["a"], "1");
/// assert_eq!(tags["b"], "");
/// assert_eq!(tags["c"], "3");
/// ```
pub fn parse_tags(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_owned(), value.to_owned()),
            None => (segment.to_owned(), String::new()),
        })
        .collect()
}

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses the escaping applied by [`escape_tag_value`]. Twitch uses this
/// for values such as `system-msg` where spaces arrive as `\s`.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tags() {
        let tags = parse_tags("a=1;b;c=3");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.get("a").map(String::as_str), Some("1"));
        assert_eq!(tags.get("b").map(String::as_str), Some(""));
        assert_eq!(tags.get("c").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let tags = parse_tags(";;a=1;;b=2;");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["a"], "1");
        assert_eq!(tags["b"], "2");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let tags = parse_tags("emotes=25:0-4;reply=a=b");
        assert_eq!(tags["emotes"], "25:0-4");
        assert_eq!(tags["reply"], "a=b");
    }

    #[test]
    fn test_parse_empty_value_with_equals() {
        let tags = parse_tags("badge-info=;user-type=");
        assert_eq!(tags["badge-info"], "");
        assert_eq!(tags["user-type"], "");
    }

    #[test]
    fn test_parse_duplicate_key_keeps_last() {
        let tags = parse_tags("a=1;a=2");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags["a"], "2");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(";;;").is_empty());
    }

    #[test]
    fn test_parse_keeps_raw_escapes() {
        let tags = parse_tags("system-msg=5\\sraiders");
        assert_eq!(tags["system-msg"], "5\\sraiders");
    }

    #[test]
    fn test_unescape_semicolon() {
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
    }

    #[test]
    fn test_unescape_space() {
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d\\re\\nf";
        let expected = "a;b c\\d\re\nf";
        assert_eq!(unescape_tag_value(input), expected);
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(unescape_tag_value("test\\"), "test");
    }

    #[test]
    fn test_unescape_unknown_escape() {
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
    }

    #[test]
    fn test_escape_then_unescape() {
        for original in ["with space", "with;semicolon", "complex; \\ \n \r all"] {
            let mut escaped = String::new();
            escape_tag_value(&mut escaped, original).unwrap();
            assert!(!escaped.contains(' '));
            assert_eq!(unescape_tag_value(&escaped), original);
        }
    }
}
