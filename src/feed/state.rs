use crate::feed::model::{has_content, Post, PostId};
use crate::feed::preview::{ImageFile, PreviewRef};
use crate::ui::mvi::UiState;

/// Selected image awaiting publication.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftImage {
    pub file: ImageFile,
    pub preview: PreviewRef,
}

/// The not-yet-published post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub image: Option<DraftImage>,
    /// Kept verbatim; trimming only applies to the publish check.
    pub caption: String,
}

impl Draft {
    pub fn can_publish(&self) -> bool {
        self.image.is_some() && has_content(&self.caption)
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.image.as_ref().map(|image| &image.preview)
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.caption.is_empty()
    }
}

/// Everything the feed screen renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    /// Newest first.
    pub posts: Vec<Post>,
    pub draft: Draft,
}

impl UiState for FeedState {}

impl FeedState {
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.post(id).is_some()
    }
}
