//! Formatting of outgoing protocol lines.
//!
//! The builders only assemble wire syntax. They do not validate channel
//! names or tokens and do not append a line terminator.

/// Capabilities a Twitch chat client normally requests.
pub const TWITCH_CAPABILITIES: [&str; 3] =
    ["twitch.tv/tags", "twitch.tv/commands", "twitch.tv/membership"];

/// `PRIVMSG {channel} :{text}`
pub fn build_privmsg(channel: &str, text: &str) -> String {
    format!("PRIVMSG {} :{}", channel, text)
}

/// `PONG :{payload}`, the reply to a server `PING`.
pub fn build_pong(payload: &str) -> String {
    format!("PONG :{}", payload)
}

/// `JOIN {channel}`
pub fn build_join(channel: &str) -> String {
    format!("JOIN {}", channel)
}

/// `PART {channel}`
pub fn build_part(channel: &str) -> String {
    format!("PART {}", channel)
}

/// Authentication handshake. `PASS` must be sent before `NICK`.
pub fn build_pass_nick(token: &str, nick: &str) -> Vec<String> {
    vec![format!("PASS oauth:{}", token), format!("NICK {}", nick)]
}

/// `CAP REQ :{caps...}`
///
/// ```
/// use twitch_chat_proto::encode::{build_cap_req, TWITCH_CAPABILITIES};
///
/// assert_eq!(
///     build_cap_req(&TWITCH_CAPABILITIES),
///     "CAP REQ :twitch.tv/tags twitch.tv/commands twitch.tv/membership"
/// );
/// ```
pub fn build_cap_req(caps: &[&str]) -> String {
    format!("CAP REQ :{}", caps.join(" "))
}
