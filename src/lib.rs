//! # twitch-chat-proto
//!
//! Parsing and construction of Twitch-flavored IRC lines, and their
//! projection into a normalized chat-message model.
//!
//! ## Features
//!
//! - Tokenizing `[@tags] [:prefix] COMMAND [params] [:trailing]` lines
//! - Tag parsing with typed accessors and IRCv3 unescaping
//! - Projection of `PRIVMSG` lines into [`ChatMessage`]s with badge roles
//! - Chat command splitting via [`CommandContext`]
//! - Builders for outgoing `PRIVMSG`, `PONG`, `JOIN`, `PART`, `CAP` and the
//!   `PASS`/`NICK` handshake
//!
//! Transport, reconnection and rate limiting are left to the caller. Every
//! function here is pure and may be called from any thread.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use twitch_chat_proto::{build_pass_nick, build_pong, IrcMessage};
//!
//! let raw = "@badges=moderator/1;display-name=Foo :foo!foo@foo.tmi.twitch.tv PRIVMSG #chan :hello";
//! let msg: IrcMessage = raw.parse().expect("valid line");
//!
//! if let Some(chat) = msg.to_chat_message() {
//!     assert_eq!(chat.user, "Foo");
//!     assert!(chat.is_moderator());
//!     assert_eq!(chat.reply("hi!").to_line(), "PRIVMSG #chan :hi!");
//! }
//!
//! assert_eq!(build_pass_nick("tok", "mybot"), ["PASS oauth:tok", "NICK mybot"]);
//! assert_eq!(build_pong("tmi.twitch.tv"), "PONG :tmi.twitch.tv");
//! ```

pub mod chat;
pub mod encode;
pub mod error;
pub mod message;
pub mod util;

pub use self::chat::{badge_roles, Badge, ChatMessage, CommandContext, OutgoingMessage};
pub use self::encode::{
    build_cap_req, build_join, build_part, build_pass_nick, build_pong, build_privmsg, IrcEncode,
};
pub use self::error::{MessageParseError, Result};
pub use self::message::tags::parse_tags;
pub use self::message::IrcMessage;
