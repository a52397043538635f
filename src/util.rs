//! Length limits and UTF-8 safe string clipping for outgoing chat text.

/// Maximum length of an IRC line, including the CRLF terminator.
pub const MAX_MESSAGE_BODY: usize = 512;

/// Maximum length of the text of a Twitch chat message.
pub const TWITCH_MAX_MESSAGE_LENGTH: usize = 500;

/// Truncates a string to at most `max_bytes` bytes without breaking
/// a multi-byte UTF-8 codepoint at the end.
///
/// # Examples
///
/// ```
/// use twitch_chat_proto::util::truncate_utf8_safe;
///
/// assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
///
/// let emoji = "Hello 👋 World";
/// assert_eq!(truncate_utf8_safe(emoji, 8), "Hello ");
///
/// assert_eq!(truncate_utf8_safe("hi", 10), "hi");
/// ```
#[inline]
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Splits a long text into chunks of at most `max_bytes` bytes, never
/// splitting a codepoint.
///
/// A codepoint wider than `max_bytes` is emitted as a chunk of its own, so
/// the chunks always concatenate back to the input.
///
/// ```
/// use twitch_chat_proto::util::split_message;
///
/// let chunks: Vec<_> = split_message("Hello World! This is a test.", 10).collect();
/// assert_eq!(chunks, vec!["Hello Worl", "d! This is", " a test."]);
/// ```
pub fn split_message(s: &str, max_bytes: usize) -> impl Iterator<Item = &str> {
    SplitMessage {
        remaining: s,
        max_bytes,
    }
}

struct SplitMessage<'a> {
    remaining: &'a str,
    max_bytes: usize,
}

impl<'a> Iterator for SplitMessage<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.remaining.chars().next()?;
        let mut chunk = truncate_utf8_safe(self.remaining, self.max_bytes);
        if chunk.is_empty() {
            chunk = &self.remaining[..first.len_utf8()];
        }
        self.remaining = &self.remaining[chunk.len()..];
        Some(chunk)
    }
}
