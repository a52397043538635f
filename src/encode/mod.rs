//! Outgoing line construction and encoding.
//!
//! The `build_*` functions produce single protocol lines as strings. The
//! [`IrcEncode`] trait writes a line plus its `\r\n` terminator straight to
//! any [`Write`] implementor, such as a socket or a `Vec<u8>`.
//!
//! ```
//! use twitch_chat_proto::encode::IrcEncode;
//! use twitch_chat_proto::OutgoingMessage;
//!
//! let msg = OutgoingMessage::new("#channel", "Hello!");
//! let mut buf = Vec::new();
//! msg.encode(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"PRIVMSG #channel :Hello!\r\n");
//! ```

use std::io::{self, Write};

mod builders;

pub use self::builders::{
    build_cap_req, build_join, build_part, build_pass_nick, build_pong, build_privmsg,
    TWITCH_CAPABILITIES,
};

use crate::chat::OutgoingMessage;
use crate::message::IrcMessage;
use crate::util::MAX_MESSAGE_BODY;

/// A trait for encoding protocol lines directly to a byte stream.
pub trait IrcEncode {
    /// Encode this value, followed by `\r\n`, to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MAX_MESSAGE_BODY);
        let _ = self.encode(&mut buf);
        buf
    }
}

fn write_line<W: Write>(w: &mut W, line: &str) -> io::Result<usize> {
    w.write_all(line.as_bytes())?;
    w.write_all(b"\r\n")?;
    Ok(line.len() + 2)
}

impl IrcEncode for IrcMessage {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        write_line(writer, &self.to_string())
    }
}

impl IrcEncode for OutgoingMessage {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        write_line(writer, &self.to_line())
    }
}
