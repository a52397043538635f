use std::fmt::{self, Write};

use super::types::IrcMessage;

/// Writes the message back in wire form, without a line terminator.
///
/// Tags are written in key order, and a tag with an empty value is written
/// as a bare key. Tag values are already in wire form and are not escaped
/// again.
///
/// Parsed Twitch lines read back equal. Hand-built or odd messages may not:
/// an empty tag key is written as nothing and is lost, and a command that
/// starts with `:` (e.g. from `@a=1 \t:x`) is read back as a prefix.
impl fmt::Display for IrcMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.tags.is_empty() {
            f.write_char('@')?;
            for (i, (key, value)) in self.tags.iter().enumerate() {
                if i > 0 {
                    f.write_char(';')?;
                }
                f.write_str(key)?;
                if !value.is_empty() {
                    f.write_char('=')?;
                    f.write_str(value)?;
                }
            }
            f.write_char(' ')?;
        }

        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        if let Some(trailing) = &self.trailing {
            write!(f, " :{}", trailing)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_simple() {
        let msg = IrcMessage::new("PING").with_trailing("tmi.twitch.tv");
        assert_eq!(msg.to_string(), "PING :tmi.twitch.tv");
    }

    #[test]
    fn test_display_full() {
        let msg = IrcMessage::new("PRIVMSG")
            .with_tag("mod", "1")
            .with_tag("badge-info", "")
            .with_prefix("nick!user@host")
            .with_param("#chan")
            .with_trailing("hello world");
        assert_eq!(
            msg.to_string(),
            "@badge-info;mod=1 :nick!user@host PRIVMSG #chan :hello world"
        );
    }

    #[test]
    fn test_display_drops_empty_tag_key() {
        let msg = IrcMessage::parse("@=;b CMD").unwrap();
        assert_eq!(msg.tags.len(), 2);
        assert_eq!(msg.to_string(), "@;b CMD");

        let reparsed = IrcMessage::parse(&msg.to_string()).unwrap();
        assert_eq!(reparsed.tag("b"), Some(""));
        assert_eq!(reparsed.tags.len(), 1);
    }

    #[test]
    fn test_display_colon_command_is_read_as_prefix() {
        let msg = IrcMessage::parse("@a=1 \t:x").unwrap();
        assert_eq!(msg.command, ":X");
        assert_eq!(msg.to_string(), "@a=1 :X");
        assert_eq!(
            IrcMessage::parse(&msg.to_string()),
            Err(crate::error::MessageParseError::MissingCommand)
        );
    }

    #[test]
    fn test_display_reparses() {
        let original = "@a=1;b;c=3 :tmi.twitch.tv COMMAND p1 p2 :some text";
        let msg = IrcMessage::parse(original).unwrap();
        let reparsed = IrcMessage::parse(&msg.to_string()).unwrap();
        assert_eq!(msg, reparsed);
    }
}
