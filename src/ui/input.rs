use crate::ui::app::{App, Focus};
use crate::ui::text_input::TextInputIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Ctrl+P publishes from any field, like the form's submit button.
    if is_ctrl_char(key, 'p') {
        app.publish();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::ImagePath => match key.code {
            KeyCode::Enter => app.confirm_image_path(),
            KeyCode::Backspace => app.edit_image_path(TextInputIntent::Backspace),
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                app.edit_image_path(TextInputIntent::Insert(ch))
            }
            _ => {}
        },
        Focus::Caption => match key.code {
            KeyCode::Enter => app.edit_caption(TextInputIntent::Insert('\n')),
            KeyCode::Backspace => app.edit_caption(TextInputIntent::Backspace),
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                app.edit_caption(TextInputIntent::Insert(ch))
            }
            _ => {}
        },
        Focus::Feed if is_ctrl_char(key, 'l') => {
            app.like_selected();
        }
        Focus::Feed => match key.code {
            KeyCode::Up => app.select_prev(),
            KeyCode::Down => app.select_next(),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            _ => {
                app.on_feed_key(key);
            }
        },
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
