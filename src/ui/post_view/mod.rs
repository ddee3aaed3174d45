//! Interaction unit for a single post.
//!
//! A `PostView` owns nothing but the text typed into its comment field.
//! Likes and comments are handed to the [`FeedStore`]; the post itself is
//! read back from the store on every render.

mod card;

pub use card::{format_size, render_post_card, CardContext};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::feed::{FeedStore, PostId};
use crate::ui::mvi::Reducer;
use crate::ui::text_input::{TextInputIntent, TextInputReducer, TextInputState};

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    post_id: PostId,
    comment: TextInputState,
}

impl PostView {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            comment: TextInputState::single_line(""),
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn comment_input(&self) -> &TextInputState {
        &self.comment
    }

    pub fn edit_comment(&mut self, intent: TextInputIntent) {
        self.comment = TextInputReducer::reduce(std::mem::take(&mut self.comment), intent);
    }

    pub fn like(&self, store: &mut FeedStore) -> bool {
        store.like(self.post_id)
    }

    /// Hand the comment text to the store and clear the field.
    ///
    /// The field is cleared even when the store rejects blank text.
    pub fn submit_comment(&mut self, store: &mut FeedStore) -> bool {
        let text = std::mem::take(&mut self.comment.text);
        store.add_comment(self.post_id, text)
    }

    /// Keys for a focused post. Returns false for keys it does not use.
    pub fn on_key(&mut self, key: KeyEvent, store: &mut FeedStore) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                self.submit_comment(store);
            }
            KeyCode::Backspace => self.edit_comment(TextInputIntent::Backspace),
            KeyCode::Char(ch) => self.edit_comment(TextInputIntent::Insert(ch)),
            _ => return false,
        }
        true
    }
}
