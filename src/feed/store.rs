//! The single owner of the feed and the draft.
//!
//! Every mutation goes through [`FeedReducer`]. The store supplies what
//! the reducer must not compute itself (ids, clock, preview handles),
//! manages preview handle lifetimes, and tells subscribers about each
//! state change.

use chrono::Utc;

use crate::feed::intent::FeedIntent;
use crate::feed::model::{has_content, Comment, CommentId, Post, PostId};
use crate::feed::preview::{ImageFile, ImageResolver, PreviewRegistry};
use crate::feed::reducer::FeedReducer;
use crate::feed::state::{Draft, DraftImage, FeedState};
use crate::ui::mvi::Reducer;

/// Handle returned by [`FeedStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FeedState) + Send>;

pub struct FeedStore {
    state: FeedState,
    author: String,
    resolver: Box<dyn ImageResolver>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    /// Bumped once per state change.
    revision: u64,
}

impl FeedStore {
    pub fn new(author: impl Into<String>) -> Self {
        Self::with_resolver(author, Box::new(PreviewRegistry::new()))
    }

    pub fn with_resolver(author: impl Into<String>, resolver: Box<dyn ImageResolver>) -> Self {
        Self {
            state: FeedState::default(),
            author: author.into(),
            resolver,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn resolver(&self) -> &dyn ImageResolver {
        self.resolver.as_ref()
    }

    /// Register a listener called with the new state after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FeedState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Make `file` the draft image.
    ///
    /// The previous draft preview is released before the new one is
    /// acquired.
    pub fn select_image(&mut self, file: ImageFile) -> bool {
        if let Some(previous) = self.state.draft.preview() {
            self.resolver.release(previous);
        }
        let preview = self.resolver.acquire(&file);
        tracing::debug!(path = %file.path().display(), %preview, "Image selected");
        self.dispatch(FeedIntent::SelectImage {
            image: DraftImage { file, preview },
        });
        true
    }

    pub fn set_draft_caption(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.state.draft.caption {
            return false;
        }
        self.dispatch(FeedIntent::SetCaption { text });
        true
    }

    /// Publish the draft. Returns false, changing nothing, unless an image
    /// is selected and the caption has non-whitespace content.
    ///
    /// The draft's preview handle moves into the new post and stays live.
    pub fn publish(&mut self) -> bool {
        if !self.state.draft.can_publish() {
            return false;
        }
        let id = PostId::new();
        self.dispatch(FeedIntent::Publish {
            id,
            author: self.author.clone(),
            created_at: Utc::now(),
        });
        tracing::info!(%id, total = self.state.posts.len(), "Post published");
        true
    }

    pub fn like(&mut self, post_id: PostId) -> bool {
        if !self.state.contains(post_id) {
            return false;
        }
        self.dispatch(FeedIntent::Like { post_id });
        tracing::debug!(%post_id, "Post liked");
        true
    }

    /// Append a comment. Blank text or an unknown post changes nothing.
    pub fn add_comment(&mut self, post_id: PostId, text: impl Into<String>) -> bool {
        let text = text.into();
        if !has_content(&text) || !self.state.contains(post_id) {
            return false;
        }
        let comment = Comment {
            id: CommentId::new(),
            author: self.author.clone(),
            text,
            created_at: Utc::now(),
        };
        tracing::debug!(%post_id, comment_id = %comment.id, "Comment added");
        self.dispatch(FeedIntent::AddComment { post_id, comment });
        true
    }

    fn dispatch(&mut self, intent: FeedIntent) {
        self.state = FeedReducer::reduce(std::mem::take(&mut self.state), intent);
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl Drop for FeedStore {
    fn drop(&mut self) {
        if let Some(preview) = self.state.draft.preview() {
            self.resolver.release(preview);
        }
        for post in &self.state.posts {
            self.resolver.release(&post.image);
        }
    }
}
