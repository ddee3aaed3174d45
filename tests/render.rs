mod common;

use common::{ctrl, key, temp_image_path};
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::text::Span;
use ratatui::Terminal;
use snapfeed::config::Config;
use snapfeed::ui::app::{App, Focus};
use snapfeed::ui::input::handle_key;
use snapfeed::ui::render::draw;
use tempfile::TempDir;

/// Screen contents row by row. Cells hidden behind a double-width glyph are
/// skipped so Japanese text reads back contiguously.
fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut x = 0;
        while x < buffer.area.width {
            let symbol = buffer[(x, y)].symbol();
            text.push_str(symbol);
            x += Span::raw(symbol).width().max(1) as u16;
        }
        text.push('\n');
    }
    text
}

#[test]
fn empty_feed_shows_placeholder() {
    let app = App::new(&Config::default());
    let text = screen_text(&app);
    assert!(text.contains("📸 画像共有SNS"));
    assert!(text.contains("新しい投稿"));
    assert!(text.contains("まだ投稿がありません。最初の投稿をしてみましょう！"));
    assert!(text.contains("画像が選択されていません"));
    assert!(text.contains("キャプションを入力..."));
    assert!(text.contains("投稿する"));
    assert!(text.contains("0件の投稿"));
}

#[test]
fn published_post_is_rendered() {
    let dir = TempDir::new().unwrap();
    let path = temp_image_path(&dir, "sunset.png");
    let mut config = Config::default();
    config.profile.username = "mika".to_string();
    let mut app = App::new(&config);

    for ch in path.to_str().unwrap().chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    handle_key(&mut app, key(KeyCode::Enter));
    app.set_focus(Focus::Caption);
    for ch in "golden hour".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    handle_key(&mut app, ctrl('p'));
    app.set_focus(Focus::Feed);
    handle_key(&mut app, ctrl('l'));

    let text = screen_text(&app);
    assert!(!text.contains("まだ投稿がありません"));
    assert!(text.contains("1件の投稿"));
    assert!(text.contains("mika golden hour"));
    assert!(text.contains("sunset.png"));
    assert!(text.contains("♥ 1"));
    assert!(text.contains("コメントを入力..."));
    assert!(text.contains("[投稿]"));
}

#[test]
fn like_marker_follows_feed_focus() {
    let dir = TempDir::new().unwrap();
    let path = temp_image_path(&dir, "sunset.png");
    let mut app = App::new(&Config::default());

    app.on_paste(path.to_str().unwrap());
    handle_key(&mut app, key(KeyCode::Enter));
    app.set_focus(Focus::Caption);
    app.on_paste("caption");
    handle_key(&mut app, ctrl('p'));

    assert!(!screen_text(&app).contains('▌'));
    app.set_focus(Focus::Feed);
    assert!(screen_text(&app).contains('▌'));
}
