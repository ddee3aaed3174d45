use chrono::Local;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::feed::{ImageResolver, Post};
use crate::ui::post_view::PostView;
use crate::ui::theme::{ACCENT, DISABLED, LIKE, MUTED_TEXT, SELECTED_GUTTER, SEPARATOR, TEXT};

/// Everything a card needs besides the post and its view.
pub struct CardContext<'a> {
    pub resolver: &'a dyn ImageResolver,
    pub timestamp_format: &'a str,
    pub selected: bool,
    pub width: u16,
}

pub fn render_post_card(post: &Post, view: &PostView, ctx: &CardContext<'_>) -> Vec<Line<'static>> {
    let bold = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut body: Vec<Line<'static>> = Vec::new();

    body.push(Line::from(Span::styled(post.author.clone(), bold)));
    body.push(Line::from(Span::styled(
        post.created_at
            .with_timezone(&Local)
            .format(ctx.timestamp_format)
            .to_string(),
        muted,
    )));

    let image = match ctx.resolver.resolve(&post.image) {
        Some(file) => format!(
            "▣ {} ({})",
            file.display_name(),
            format_size(file.size_bytes())
        ),
        None => format!("▣ {} (表示できません)", post.image),
    };
    body.push(Line::from(Span::styled(image, Style::default().fg(ACCENT))));

    body.push(Line::from(vec![
        Span::styled("♥ ", Style::default().fg(LIKE)),
        Span::styled(post.likes.to_string(), text),
    ]));

    let mut caption_lines = post.caption.split('\n');
    let first = caption_lines.next().unwrap_or_default();
    body.push(Line::from(vec![
        Span::styled(post.author.clone(), bold),
        Span::raw(" "),
        Span::styled(first.to_string(), text),
    ]));
    for rest in caption_lines {
        body.push(Line::from(Span::styled(rest.to_string(), text)));
    }

    for comment in &post.comments {
        body.push(Line::from(vec![
            Span::styled(comment.author.clone(), bold),
            Span::raw(" "),
            Span::styled(comment.text.clone(), text),
        ]));
    }

    body.push(comment_input_line(view, ctx.selected));

    let gutter = if ctx.selected {
        Span::styled("▌ ", Style::default().fg(SELECTED_GUTTER))
    } else {
        Span::raw("  ")
    };
    let mut lines: Vec<Line<'static>> = body
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(gutter.clone());
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(Span::styled(
        "─".repeat(ctx.width as usize),
        Style::default().fg(SEPARATOR),
    )));
    lines
}

fn comment_input_line(view: &PostView, focused: bool) -> Line<'static> {
    let input = view.comment_input();
    let (field, field_style) = if input.is_empty() {
        ("コメントを入力...".to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        (input.as_str().to_string(), Style::default().fg(TEXT))
    };
    let send_style = if input.has_content() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled("› ", Style::default().fg(SEPARATOR)),
        Span::styled(field, field_style),
        Span::styled(cursor.to_string(), Style::default().fg(ACCENT)),
        Span::raw("  "),
        Span::styled("[投稿]", send_style),
    ])
}

/// Human-readable byte count.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
