use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::feed::{FeedStore, ImageFile, PostId};
use crate::ui::mvi::Reducer;
use crate::ui::post_view::PostView;
use crate::ui::text_input::{TextInputIntent, TextInputReducer, TextInputState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    ImagePath,
    Caption,
    Feed,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::ImagePath => Focus::Caption,
            Focus::Caption => Focus::Feed,
            Focus::Feed => Focus::ImagePath,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::ImagePath => Focus::Feed,
            Focus::Caption => Focus::ImagePath,
            Focus::Feed => Focus::Caption,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    expires_at: Instant,
}

/// Root of the UI: owns the feed store, the image-path field and one
/// `PostView` per post.
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: FeedStore,
    image_path: TextInputState,
    /// Same order as `store.posts()`.
    post_views: Vec<PostView>,
    selected: usize,
    /// Store revision the views were last reconciled against.
    synced_revision: u64,
    status: Option<StatusMessage>,
    status_ttl: Duration,
    timestamp_format: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, FeedStore::new(config.profile.username.clone()))
    }

    pub fn with_store(config: &Config, store: FeedStore) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: Focus::ImagePath,
            synced_revision: store.revision().wrapping_sub(1),
            store,
            image_path: TextInputState::single_line(""),
            post_views: Vec::new(),
            selected: 0,
            status: None,
            status_ttl: Duration::from_millis(config.ui.status_ttl_ms),
            timestamp_format: config.ui.timestamp_format.clone(),
        };
        app.sync_views();
        app
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn image_path_input(&self) -> &TextInputState {
        &self.image_path
    }

    pub fn post_views(&self) -> &[PostView] {
        &self.post_views
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_post_id(&self) -> Option<PostId> {
        self.post_views.get(self.selected).map(PostView::post_id)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    pub fn edit_image_path(&mut self, intent: TextInputIntent) {
        self.image_path = TextInputReducer::reduce(std::mem::take(&mut self.image_path), intent);
    }

    /// Attach the file named in the image-path field to the draft.
    pub fn confirm_image_path(&mut self) {
        match ImageFile::open(self.image_path.as_str()) {
            Ok(file) => {
                let name = file.display_name();
                self.store.select_image(file);
                self.edit_image_path(TextInputIntent::Clear);
                self.set_status(format!("{} を添付しました", name), StatusKind::Info);
                self.sync_views();
            }
            Err(err) => {
                tracing::warn!(input = %self.image_path.as_str(), %err, "Image selection rejected");
                self.set_status(err.to_string(), StatusKind::Error);
            }
        }
    }

    /// Edit the draft caption. The caption lives in the store, so the edit
    /// is applied to a copy and written back.
    pub fn edit_caption(&mut self, intent: TextInputIntent) {
        let current = TextInputState::multi_line(self.store.draft().caption.clone());
        let next = TextInputReducer::reduce(current, intent);
        self.store.set_draft_caption(next.text);
        self.sync_views();
    }

    pub fn publish(&mut self) -> bool {
        let published = self.store.publish();
        if published {
            self.sync_views();
            self.selected = 0;
            self.set_status("投稿しました", StatusKind::Info);
        }
        published
    }

    pub fn like_selected(&mut self) -> bool {
        let Some(view) = self.post_views.get(self.selected) else {
            return false;
        };
        let liked = view.like(&mut self.store);
        self.sync_views();
        liked
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.post_views.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.post_views.len().saturating_sub(1);
    }

    /// Forward a key to the selected post. Returns false if unused.
    pub fn on_feed_key(&mut self, key: KeyEvent) -> bool {
        let Some(view) = self.post_views.get_mut(self.selected) else {
            return false;
        };
        let handled = view.on_key(key, &mut self.store);
        self.sync_views();
        handled
    }

    pub fn on_paste(&mut self, text: &str) {
        let intent = TextInputIntent::Paste(text.to_string());
        match self.focus {
            Focus::ImagePath => self.edit_image_path(intent),
            Focus::Caption => self.edit_caption(intent),
            Focus::Feed => {
                if let Some(view) = self.post_views.get_mut(self.selected) {
                    view.edit_comment(intent);
                }
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.expires_at <= now)
        {
            self.status = None;
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: Instant::now() + self.status_ttl,
        });
    }

    /// Rebuild the view list after the store changed: one view per post,
    /// in feed order, keeping each surviving view's comment text and the
    /// selection on the same post.
    fn sync_views(&mut self) {
        if self.synced_revision == self.store.revision() {
            return;
        }
        let selected_id = self.selected_post_id();
        let mut existing: HashMap<PostId, PostView> = self
            .post_views
            .drain(..)
            .map(|view| (view.post_id(), view))
            .collect();
        self.post_views = self
            .store
            .posts()
            .iter()
            .map(|post| existing.remove(&post.id).unwrap_or_else(|| PostView::new(post.id)))
            .collect();
        self.selected = selected_id
            .and_then(|id| self.post_views.iter().position(|view| view.post_id() == id))
            .unwrap_or(0);
        self.synced_revision = self.store.revision();
    }
}
