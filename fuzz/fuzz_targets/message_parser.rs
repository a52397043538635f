//! Fuzz target for the line parser and chat projection.
//!
//! Feeds arbitrary UTF-8 to the parser and checks it never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Twitch lines are limited to 512 bytes plus tags; longer input is noise.
        if input.len() > 8192 {
            return;
        }

        if let Ok(msg) = input.parse::<twitch_chat_proto::IrcMessage>() {
            assert!(!msg.command.is_empty());
            let _ = msg.to_chat_message();
            let _ = msg.to_string();
        }
    }
});
