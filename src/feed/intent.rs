use chrono::{DateTime, Utc};

use crate::feed::model::{Comment, PostId};
use crate::feed::state::DraftImage;
use crate::ui::mvi::Intent;

/// Feed mutations.
///
/// Values that are not a pure function of the state (ids, timestamps,
/// preview handles) are produced by `FeedStore` and carried in the intent.
#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// Replace the draft image.
    SelectImage { image: DraftImage },
    /// Replace the draft caption verbatim.
    SetCaption { text: String },
    /// Turn the draft into a post at the top of the feed, if it is complete.
    Publish {
        id: PostId,
        author: String,
        created_at: DateTime<Utc>,
    },
    Like { post_id: PostId },
    /// Append to a post's comments, if the text is not blank.
    AddComment { post_id: PostId, comment: Comment },
}

impl Intent for FeedIntent {}
