//! Owned protocol message type.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};

use super::tags::{escape_tag_value, unescape_tag_value};

/// A parsed line of the Twitch IRC protocol.
///
/// Created once per incoming line and not changed afterwards. The nickname
/// is not stored; [`IrcMessage::nick`] derives it from the prefix on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrcMessage {
    /// Upper-cased command name. Never empty for a parsed message.
    pub command: String,
    /// Middle parameters, in wire order.
    pub params: Vec<String>,
    /// Raw prefix, either `nick!user@host` or a server name.
    pub prefix: Option<String>,
    /// Tag values in wire (escaped) form.
    pub tags: BTreeMap<String, String>,
    /// Free text following the first `" :"` marker.
    pub trailing: Option<String>,
}

impl IrcMessage {
    /// Create a message with the given command and nothing else.
    ///
    /// The command is upper-cased the same way the parser does it.
    pub fn new(command: &str) -> Self {
        IrcMessage {
            command: command.to_uppercase(),
            params: Vec::new(),
            prefix: None,
            tags: BTreeMap::new(),
            trailing: None,
        }
    }

    /// Append a middle parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the trailing parameter.
    #[must_use]
    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }

    /// Add a tag. The value is given unescaped and stored in wire form.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: &str) -> Self {
        let mut escaped = String::with_capacity(value.len());
        // Writing into a String cannot fail.
        let _ = escape_tag_value(&mut escaped, value);
        self.tags.insert(key.into(), escaped);
        self
    }

    /// Nickname of the sender.
    ///
    /// The part of the prefix before the first `!`, or the whole prefix
    /// when it has no `!` (a server name such as `tmi.twitch.tv`).
    pub fn nick(&self) -> Option<&str> {
        self.prefix
            .as_deref()
            .map(|prefix| prefix.split_once('!').map_or(prefix, |(nick, _)| nick))
    }

    /// Raw (still escaped) value of a tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Tag value with IRCv3 escapes such as `\s` decoded.
    pub fn tag_unescaped(&self, key: &str) -> Option<String> {
        self.tag(key).map(unescape_tag_value)
    }

    /// Twitch numeric boolean tag (`0` or `1`).
    pub fn tag_bool(&self, key: &str) -> Option<bool> {
        match self.tag(key)? {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        }
    }

    /// Numeric tag such as `room-id` or `bits`.
    pub fn tag_number<N: FromStr>(&self, key: &str) -> Option<N> {
        self.tag(key)?.parse().ok()
    }

    /// Comma-separated tag value, with empty entries dropped.
    pub fn tag_csv(&self, key: &str) -> Option<Vec<&str>> {
        self.tag(key)
            .map(|value| value.split(',').filter(|v| !v.is_empty()).collect())
    }

    /// Server timestamp from the `tmi-sent-ts` tag (milliseconds since the
    /// UNIX epoch).
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.tag_number::<i64>("tmi-sent-ts")?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nick_from_full_prefix() {
        let msg = IrcMessage::new("PRIVMSG").with_prefix("bar!x@y");
        assert_eq!(msg.nick(), Some("bar"));
    }

    #[test]
    fn test_nick_from_server_prefix() {
        let msg = IrcMessage::new("PING").with_prefix("tmi.twitch.tv");
        assert_eq!(msg.nick(), Some("tmi.twitch.tv"));
    }

    #[test]
    fn test_nick_without_prefix() {
        assert_eq!(IrcMessage::new("PING").nick(), None);
    }

    #[test]
    fn test_nick_splits_on_first_bang() {
        let msg = IrcMessage::new("PRIVMSG").with_prefix("a!b!c@d");
        assert_eq!(msg.nick(), Some("a"));
    }

    #[test]
    fn test_new_uppercases_command() {
        assert_eq!(IrcMessage::new("privmsg").command, "PRIVMSG");
    }

    #[test]
    fn test_with_tag_stores_escaped_value() {
        let msg = IrcMessage::new("USERNOTICE").with_tag("system-msg", "5 raiders; wow");
        assert_eq!(msg.tag("system-msg"), Some("5\\sraiders\\:\\swow"));
        assert_eq!(
            msg.tag_unescaped("system-msg").as_deref(),
            Some("5 raiders; wow")
        );
    }

    #[test]
    fn test_typed_tag_accessors() {
        let msg = IrcMessage::new("PRIVMSG")
            .with_tag("mod", "1")
            .with_tag("subscriber", "0")
            .with_tag("turbo", "yes")
            .with_tag("room-id", "11148817")
            .with_tag("flags", "")
            .with_tag("emote-sets", "0,,33,42");

        assert_eq!(msg.tag_bool("mod"), Some(true));
        assert_eq!(msg.tag_bool("subscriber"), Some(false));
        assert_eq!(msg.tag_bool("turbo"), None);
        assert_eq!(msg.tag_bool("missing"), None);
        assert_eq!(msg.tag_number::<u64>("room-id"), Some(11148817));
        assert_eq!(msg.tag_number::<u64>("flags"), None);
        assert_eq!(msg.tag_csv("emote-sets"), Some(vec!["0", "33", "42"]));
        assert_eq!(msg.tag_csv("flags"), Some(vec![]));
        assert_eq!(msg.tag_csv("missing"), None);
    }

    #[test]
    fn test_sent_at() {
        let msg = IrcMessage::new("PRIVMSG").with_tag("tmi-sent-ts", "1594545155039");
        let sent = msg.sent_at().unwrap();
        assert_eq!(sent.timestamp_millis(), 1594545155039);

        let msg = IrcMessage::new("PRIVMSG").with_tag("tmi-sent-ts", "soon");
        assert!(msg.sent_at().is_none());
        assert!(IrcMessage::new("PRIVMSG").sent_at().is_none());
    }
}
