use crate::feed::has_content;
use crate::ui::mvi::UiState;

/// Editable text with the cursor pinned to the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    pub text: String,
    pub multiline: bool,
}

impl UiState for TextInputState {}

impl TextInputState {
    pub fn single_line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            multiline: false,
        }
    }

    pub fn multi_line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            multiline: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether submitting would carry any content.
    pub fn has_content(&self) -> bool {
        has_content(&self.text)
    }
}
