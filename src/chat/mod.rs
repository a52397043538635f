//! Application-level chat model and its projection from protocol messages.
//!
//! Only `PRIVMSG` lines become [`ChatMessage`]s. Everything else (PING,
//! JOIN, ROOMSTATE, numerics) yields no projection, which is a normal
//! outcome rather than an error.

use std::collections::BTreeSet;

use tracing::trace;

mod badges;
mod context;

pub use self::badges::{badge_roles, parse_badges, Badge};
pub use self::context::CommandContext;

use crate::encode::build_privmsg;
use crate::message::IrcMessage;
use crate::util::{split_message, truncate_utf8_safe};

/// A chat message posted to a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    /// Channel the message was posted to, as sent (e.g. `#pajlada`).
    pub channel: String,
    /// Display name, falling back to the login nick.
    pub user: String,
    pub text: String,
    /// Badge names from the `badges` tag.
    pub roles: BTreeSet<String>,
    /// Copy of the message this was derived from.
    pub raw: IrcMessage,
}

impl ChatMessage {
    /// Whether the sender holds the badge `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Moderators and the channel owner.
    pub fn is_moderator(&self) -> bool {
        self.has_role("moderator") || self.has_role("broadcaster")
    }

    /// Outgoing message to the channel this message came from.
    pub fn reply(&self, text: impl Into<String>) -> OutgoingMessage {
        OutgoingMessage::new(self.channel.clone(), text)
    }

    /// Badges with their versions, parsed from the source message.
    pub fn badges(&self) -> Vec<Badge> {
        parse_badges(self.raw.tag("badges").unwrap_or_default())
    }
}

impl IrcMessage {
    /// Project this message into a [`ChatMessage`].
    ///
    /// Returns `None` unless the command is `PRIVMSG` with at least one
    /// parameter.
    ///
    /// ```
    /// use twitch_chat_proto::IrcMessage;
    ///
    /// let msg = IrcMessage::parse("@badges=moderator/1 :foo!foo@foo PRIVMSG #chan :hi").unwrap();
    /// let chat = msg.to_chat_message().unwrap();
    /// assert_eq!(chat.channel, "#chan");
    /// assert_eq!(chat.user, "foo");
    /// assert!(chat.has_role("moderator"));
    ///
    /// assert!(IrcMessage::parse("PING :tmi.twitch.tv").unwrap().to_chat_message().is_none());
    /// ```
    pub fn to_chat_message(&self) -> Option<ChatMessage> {
        if !self.is_chat_line() {
            return None;
        }
        self.clone().into_chat_message()
    }

    /// Like [`to_chat_message`](Self::to_chat_message), but moves `self`
    /// into the result instead of copying it.
    pub fn into_chat_message(self) -> Option<ChatMessage> {
        if !self.is_chat_line() {
            return None;
        }
        let channel = self.params.first()?.clone();

        let user = match self.tag("display-name") {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.nick().unwrap_or_default().to_owned(),
        };
        let text = self.trailing.clone().unwrap_or_default();
        let roles = badge_roles(self.tag("badges").unwrap_or_default());

        Some(ChatMessage {
            channel,
            user,
            text,
            roles,
            raw: self,
        })
    }

    /// `PRIVMSG` with a channel parameter.
    fn is_chat_line(&self) -> bool {
        if self.command != "PRIVMSG" {
            return false;
        }
        if self.params.is_empty() {
            trace!("PRIVMSG without a channel parameter");
            return false;
        }
        true
    }
}

/// A message the application wants to post to a channel.
///
/// Convert it to a wire line with [`OutgoingMessage::to_line`] or write it
/// with [`IrcEncode`](crate::encode::IrcEncode).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutgoingMessage {
    pub channel: String,
    pub text: String,
}

impl OutgoingMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        OutgoingMessage {
            channel: channel.into(),
            text: text.into(),
        }
    }

    /// `PRIVMSG` line for this message.
    pub fn to_line(&self) -> String {
        build_privmsg(&self.channel, &self.text)
    }

    /// Copy with the text clipped to `max_bytes` on a codepoint boundary.
    #[must_use]
    pub fn truncated(&self, max_bytes: usize) -> OutgoingMessage {
        OutgoingMessage::new(
            self.channel.clone(),
            truncate_utf8_safe(&self.text, max_bytes),
        )
    }

    /// Split the text into consecutive messages of at most `max_bytes` each.
    ///
    /// No text is lost: a codepoint wider than `max_bytes` travels in a
    /// message of its own. An empty text yields no messages.
    pub fn split(&self, max_bytes: usize) -> Vec<OutgoingMessage> {
        split_message(&self.text, max_bytes)
            .map(|chunk| OutgoingMessage::new(self.channel.clone(), chunk))
            .collect()
    }
}
