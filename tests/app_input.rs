mod common;

use common::{ctrl, key, temp_image_path};
use crossterm::event::KeyCode;
use snapfeed::config::Config;
use snapfeed::ui::app::{App, Focus, StatusKind};
use snapfeed::ui::input::handle_key;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

/// Attach an image and publish `caption` through the keyboard.
fn publish_via_keys(app: &mut App, dir: &TempDir, caption: &str) {
    let path = temp_image_path(dir, "photo.png");
    app.set_focus(Focus::ImagePath);
    type_text(app, path.to_str().unwrap());
    handle_key(app, key(KeyCode::Enter));
    handle_key(app, key(KeyCode::Tab));
    type_text(app, caption);
    handle_key(app, ctrl('p'));
}

#[test]
fn starts_on_image_path_with_empty_feed() {
    let app = App::new(&Config::default());
    assert_eq!(app.focus(), Focus::ImagePath);
    assert!(app.store().posts().is_empty());
    assert!(app.post_views().is_empty());
    assert!(!app.should_quit());
}

#[test]
fn tab_cycles_focus_both_ways() {
    let mut app = App::new(&Config::default());
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Caption);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Feed);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::ImagePath);
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus(), Focus::Feed);
}

#[test]
fn keyboard_publish_flow() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    publish_via_keys(&mut app, &dir, "My trip");

    let posts = app.store().posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].caption, "My trip");
    assert_eq!(posts[0].author, "あなた");
    assert_eq!(app.post_views().len(), 1);
    assert_eq!(app.selected_post_id(), Some(posts[0].id));
    assert!(app.image_path_input().is_empty());
    assert!(app.store().draft().is_empty());
}

#[test]
fn enter_in_caption_adds_a_line() {
    let mut app = App::new(&Config::default());
    app.set_focus(Focus::Caption);
    type_text(&mut app, "line one");
    handle_key(&mut app, key(KeyCode::Enter));
    type_text(&mut app, "two");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.store().draft().caption, "line one\ntw");
}

#[test]
fn ctrl_p_without_image_does_nothing() {
    let mut app = App::new(&Config::default());
    app.set_focus(Focus::Caption);
    type_text(&mut app, "caption only");
    handle_key(&mut app, ctrl('p'));
    assert!(app.store().posts().is_empty());
    assert_eq!(app.store().draft().caption, "caption only");
}

#[test]
fn missing_image_path_reports_error_and_keeps_input() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    let missing = dir.path().join("missing.png");
    type_text(&mut app, missing.to_str().unwrap());
    handle_key(&mut app, key(KeyCode::Enter));

    let status = app.status().expect("status message");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("ファイルが見つかりません"));
    assert_eq!(app.image_path_input().as_str(), missing.to_str().unwrap());
    assert!(app.store().draft().image.is_none());
}

#[test]
fn status_expires_on_tick() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.ui.status_ttl_ms = 1_000;
    let mut app = App::new(&config);
    type_text(&mut app, dir.path().join("nope").to_str().unwrap());
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.status().is_some());

    app.on_tick(Instant::now());
    assert!(app.status().is_some());
    app.on_tick(Instant::now() + Duration::from_secs(5));
    assert!(app.status().is_none());
}

#[test]
fn paste_goes_to_focused_field() {
    let dir = TempDir::new().unwrap();
    let path = temp_image_path(&dir, "dropped.png");
    let mut app = App::new(&Config::default());

    app.on_paste(&format!("'{}'", path.display()));
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.store().draft().image.is_some());

    app.set_focus(Focus::Caption);
    app.on_paste("multi\nline");
    assert_eq!(app.store().draft().caption, "multi\nline");
}

#[test]
fn feed_comment_like_and_selection() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    publish_via_keys(&mut app, &dir, "older");
    publish_via_keys(&mut app, &dir, "newer");

    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Feed);
    assert_eq!(app.selected_index(), 0);

    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.selected_index(), 1);
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.selected_index(), 1);

    handle_key(&mut app, ctrl('l'));
    type_text(&mut app, "Nice!");
    handle_key(&mut app, key(KeyCode::Enter));

    let posts = app.store().posts();
    assert_eq!(posts[1].caption, "older");
    assert_eq!(posts[1].likes, 1);
    assert_eq!(posts[1].comments.len(), 1);
    assert_eq!(posts[1].comments[0].text, "Nice!");
    assert_eq!(posts[0].likes, 0);
    assert!(app.post_views()[1].comment_input().is_empty());

    handle_key(&mut app, key(KeyCode::Home));
    assert_eq!(app.selected_index(), 0);
    handle_key(&mut app, key(KeyCode::End));
    assert_eq!(app.selected_index(), 1);
}

#[test]
fn ctrl_l_only_likes_from_the_feed() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    publish_via_keys(&mut app, &dir, "post");

    assert_eq!(app.focus(), Focus::Caption);
    type_text(&mut app, "luck");
    handle_key(&mut app, ctrl('l'));
    assert_eq!(app.store().posts()[0].likes, 0);
    assert_eq!(app.store().draft().caption, "luck");

    app.set_focus(Focus::ImagePath);
    handle_key(&mut app, ctrl('l'));
    assert_eq!(app.store().posts()[0].likes, 0);

    app.set_focus(Focus::Feed);
    handle_key(&mut app, ctrl('l'));
    assert_eq!(app.store().posts()[0].likes, 1);
}

#[test]
fn blank_comment_submit_clears_only_the_input() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    publish_via_keys(&mut app, &dir, "post");
    app.set_focus(Focus::Feed);

    type_text(&mut app, "   ");
    assert_eq!(app.post_views()[0].comment_input().as_str(), "   ");
    handle_key(&mut app, key(KeyCode::Enter));

    assert!(app.post_views()[0].comment_input().is_empty());
    assert!(app.store().posts()[0].comments.is_empty());
}

#[test]
fn comment_drafts_survive_new_posts() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default());
    publish_via_keys(&mut app, &dir, "first");
    app.set_focus(Focus::Feed);
    type_text(&mut app, "half typed");

    publish_via_keys(&mut app, &dir, "second");

    assert_eq!(app.post_views().len(), 2);
    assert_eq!(app.post_views()[0].post_id(), app.store().posts()[0].id);
    assert!(app.post_views()[0].comment_input().is_empty());
    assert_eq!(app.post_views()[1].comment_input().as_str(), "half typed");
}

#[test]
fn ctrl_q_and_ctrl_c_quit() {
    let mut app = App::new(&Config::default());
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());

    let mut app = App::new(&Config::default());
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn plain_q_is_text_not_quit() {
    let mut app = App::new(&Config::default());
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.image_path_input().as_str(), "q");
}
