//! The new-post panel: image path, attached preview, caption, publish.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::feed::{Draft, ImageResolver};
use crate::ui::app::{App, Focus, StatusKind};
use crate::ui::post_view::format_size;
use crate::ui::theme::{
    ACCENT, DISABLED, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK, TEXT,
};

const MAX_CAPTION_LINES: usize = 5;
const LABEL_WIDTH: usize = 14;

/// Rows the composer needs, borders included.
pub fn composer_height(draft: &Draft) -> u16 {
    let caption_lines = caption_line_count(&draft.caption).clamp(1, MAX_CAPTION_LINES);
    (2 + 2 + caption_lines + 1) as u16
}

fn caption_line_count(caption: &str) -> usize {
    caption.split('\n').count()
}

pub fn composer_widget(app: &App) -> Paragraph<'static> {
    let store = app.store();
    let draft = store.draft();
    let focus = app.focus();
    let muted = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(TEXT);
    let cursor = Span::styled("▏", Style::default().fg(ACCENT));

    let mut lines: Vec<Line<'static>> = Vec::new();

    let path = app.image_path_input();
    let mut image_line = vec![label("画像", focus == Focus::ImagePath)];
    if path.is_empty() {
        image_line.push(Span::styled("画像ファイルのパスを入力 (Enterで添付)", muted));
    } else {
        image_line.push(Span::styled(path.as_str().to_string(), text));
    }
    if focus == Focus::ImagePath {
        image_line.push(cursor.clone());
    }
    lines.push(Line::from(image_line));

    lines.push(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH)),
        preview_span(draft, store.resolver()),
    ]));

    let caption_focused = focus == Focus::Caption;
    let caption: Vec<&str> = draft.caption.split('\n').collect();
    let skip = caption.len().saturating_sub(MAX_CAPTION_LINES);
    for (idx, row) in caption.iter().enumerate().skip(skip) {
        let lead = if idx == skip {
            label("キャプション", caption_focused)
        } else {
            Span::raw(" ".repeat(LABEL_WIDTH))
        };
        let mut spans = vec![lead];
        if draft.caption.is_empty() {
            spans.push(Span::styled("キャプションを入力...", muted));
        } else {
            spans.push(Span::styled(row.to_string(), text));
        }
        if caption_focused && idx + 1 == caption.len() {
            spans.push(cursor.clone());
        }
        lines.push(Line::from(spans));
    }

    let publish_style = if draft.can_publish() {
        Style::default()
            .fg(TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
    };
    let mut action_line = vec![
        Span::raw(" ".repeat(LABEL_WIDTH)),
        Span::styled(" 投稿する ", publish_style),
        Span::styled("  Ctrl+P", muted),
    ];
    if let Some(status) = app.status() {
        let color = match status.kind {
            StatusKind::Info => STATUS_OK,
            StatusKind::Error => STATUS_ERROR,
        };
        action_line.push(Span::raw("   "));
        action_line.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }
    lines.push(Line::from(action_line));

    let border = if focus == Focus::Feed {
        GLOBAL_BORDER
    } else {
        FOCUS_BORDER
    };
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" 新しい投稿 ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn label(name: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    // Pad by display width, the labels are double-width text.
    let padding = LABEL_WIDTH.saturating_sub(Span::raw(name).width());
    Span::styled(format!("{}{}", name, " ".repeat(padding)), style)
}

fn preview_span(draft: &Draft, resolver: &dyn ImageResolver) -> Span<'static> {
    match draft.preview().and_then(|preview| resolver.resolve(preview)) {
        Some(file) => Span::styled(
            format!("▣ {} ({})", file.display_name(), format_size(file.size_bytes())),
            Style::default().fg(ACCENT),
        ),
        None => Span::styled("画像が選択されていません", Style::default().fg(MUTED_TEXT)),
    }
}
