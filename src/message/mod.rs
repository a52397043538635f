//! Raw protocol messages: tokenizing, tag handling and re-serialization.

mod nom_parser;
mod parse;
mod serialize;
pub mod tags;
mod types;

pub use self::types::IrcMessage;
