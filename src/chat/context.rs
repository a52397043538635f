use super::ChatMessage;

/// A chat command invocation such as `!song add never gonna`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandContext {
    /// The message that triggered the command.
    pub message: ChatMessage,
    /// Command name, without the prefix.
    pub command: String,
    pub args: Vec<String>,
}

impl CommandContext {
    /// Split a chat message into a command name and its arguments.
    ///
    /// Returns `None` when the text does not start with `prefix` or when no
    /// name follows the prefix.
    ///
    /// ```
    /// use twitch_chat_proto::{CommandContext, IrcMessage};
    ///
    /// let msg = IrcMessage::parse(":bob!bob@bob PRIVMSG #chan :!so  alice now")
    ///     .unwrap()
    ///     .into_chat_message()
    ///     .unwrap();
    /// let ctx = CommandContext::parse(msg, "!").unwrap();
    /// assert_eq!(ctx.command, "so");
    /// assert_eq!(ctx.args, vec!["alice", "now"]);
    /// ```
    pub fn parse(message: ChatMessage, prefix: &str) -> Option<CommandContext> {
        let rest = message.text.strip_prefix(prefix)?;
        // The name must follow the prefix directly.
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut tokens = rest.split_whitespace();
        let command = tokens.next()?.to_owned();
        let args = tokens.map(str::to_owned).collect();

        Some(CommandContext {
            message,
            command,
            args,
        })
    }
}
