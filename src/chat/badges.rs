//! Twitch `badges` tag handling.

use std::collections::BTreeSet;

/// A single `name/version` entry of the `badges` tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Badge {
    pub name: String,
    pub version: String,
}

/// Parse a `badges` tag value such as `moderator/1,subscriber/12`.
///
/// Entries without a `/` are dropped.
pub fn parse_badges(value: &str) -> Vec<Badge> {
    value
        .split(',')
        .filter_map(|entry| entry.split_once('/'))
        .map(|(name, version)| Badge {
            name: name.to_owned(),
            version: version.to_owned(),
        })
        .collect()
}

/// Role names of a `badges` tag value.
///
/// ```
/// use twitch_chat_proto::chat::badge_roles;
///
/// let roles = badge_roles("moderator/1,subscriber/0");
/// assert!(roles.contains("moderator"));
/// assert!(roles.contains("subscriber"));
/// assert_eq!(roles.len(), 2);
/// ```
pub fn badge_roles(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .filter_map(|entry| entry.split_once('/'))
        .map(|(name, _)| name.to_owned())
        .collect()
}
