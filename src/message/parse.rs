use std::str::FromStr;

use tracing::{debug, trace};

use super::nom_parser::ParsedLine;
use super::tags::parse_tags;
use super::types::IrcMessage;
use crate::error::{MessageParseError, Result};

impl IrcMessage {
    /// Parse a raw protocol line.
    ///
    /// Surrounding whitespace, including a trailing CRLF, is ignored. An
    /// empty or whitespace-only line fails with
    /// [`MessageParseError::EmptyLine`].
    ///
    /// ```
    /// use twitch_chat_proto::IrcMessage;
    ///
    /// let msg = IrcMessage::parse(":nick!user@host PRIVMSG #chan :hello world").unwrap();
    /// assert_eq!(msg.nick(), Some("nick"));
    /// assert_eq!(msg.params, vec!["#chan"]);
    /// assert_eq!(msg.trailing.as_deref(), Some("hello world"));
    /// ```
    pub fn parse(raw: &str) -> Result<IrcMessage> {
        let line = raw.trim();
        if line.is_empty() {
            debug!("discarding empty line");
            return Err(MessageParseError::EmptyLine);
        }

        let parsed = ParsedLine::parse(line).map_err(|err| {
            debug!(%err, line, "discarding unparseable line");
            err
        })?;

        let message = IrcMessage {
            command: parsed.command.to_uppercase(),
            params: parsed.params.into_iter().map(str::to_owned).collect(),
            prefix: parsed.prefix.map(str::to_owned),
            tags: parsed.tags.map(parse_tags).unwrap_or_default(),
            trailing: parsed.trailing.map(str::to_owned),
        };
        trace!(
            command = %message.command,
            params = message.params.len(),
            "parsed line"
        );
        Ok(message)
    }
}

impl FromStr for IrcMessage {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<IrcMessage> {
        IrcMessage::parse(s)
    }
}
