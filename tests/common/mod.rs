//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use snapfeed::feed::{FeedStore, ImageFile};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small fake image into `dir` and return its path.
pub fn temp_image_path(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp image");
    file.write_all(b"\x89PNG\r\n\x1a\nnot really a png")
        .expect("Failed to write temp image");
    path
}

pub fn temp_image(dir: &TempDir, name: &str) -> ImageFile {
    let path = temp_image_path(dir, name);
    ImageFile::open(path.to_str().expect("utf-8 temp path")).expect("Failed to open temp image")
}

/// Select an image, set the caption and publish. Panics if nothing was published.
pub fn publish(store: &mut FeedStore, dir: &TempDir, caption: &str) {
    store.select_image(temp_image(dir, "post.png"));
    store.set_draft_caption(caption);
    assert!(store.publish(), "publish of {caption:?} was rejected");
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(ch))
    }
}
