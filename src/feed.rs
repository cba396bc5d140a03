//! Message feeds shown by the demo window.

use std::fs;
use std::path::Path;

use crate::error::FeedError;
use crate::message::Message;

/// Read a JSON array of messages
pub fn load_feed(path: &Path) -> Result<Vec<Message>, FeedError> {
    let content = fs::read_to_string(path)?;
    let mut messages: Vec<Message> = serde_json::from_str(&content)?;
    messages.sort_by_key(|m| m.timestamp);
    Ok(messages)
}

/// Built-in conversation used when no feed file is given
pub fn demo_feed() -> Vec<Message> {
    let start = 1_704_467_040_000;
    let minute = 60_000;
    let lines = [
        ("alice", Some("https://avatars.githubusercontent.com/u/1?s=96"), "Morning! Did the build go green overnight?"),
        ("bob", None, "Yep, all jobs passed. Release notes are at https://example.com/notes"),
        ("alice", Some("https://avatars.githubusercontent.com/u/1?s=96"), "Nice. I'll tag it after lunch."),
        ("carol", Some("https://example.invalid/missing.png"), "Can someone review my avatar upload fix first?"),
        ("dave", Some("https://example.com/"), "Looking now"),
        ("bob", None, "Ship it"),
    ];

    lines
        .iter()
        .cycle()
        .take(60)
        .enumerate()
        .map(|(i, (name, photo, body))| {
            let msg = Message::new(*name, *body, start + i as i64 * minute);
            match photo {
                Some(url) => msg.with_photo(*url),
                None => msg,
            }
        })
        .collect()
}
