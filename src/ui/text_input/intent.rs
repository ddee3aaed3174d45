use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputIntent {
    Insert(char),
    /// Bracketed paste. Line breaks become spaces in single-line fields.
    Paste(String),
    Backspace,
    Clear,
}

impl Intent for TextInputIntent {}
