use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::feed::preview::PreviewRef;

/// Opaque post identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}", self.0)
    }
}

/// Opaque comment identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comment-{}", self.0)
    }
}

/// A published item: image, caption and engagement.
///
/// Only `likes` and `comments` change after creation, and only through
/// the feed reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub image: PreviewRef,
    /// Stored exactly as typed, surrounding whitespace included.
    pub caption: String,
    pub author: String,
    pub likes: u64,
    /// Oldest first.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// True when `text` has something besides whitespace. A byte-order mark
/// counts as whitespace.
pub fn has_content(text: &str) -> bool {
    !text
        .trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}')
        .is_empty()
}
