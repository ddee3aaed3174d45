use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    username: &'a str,
    post_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(username: &'a str, post_count: usize) -> Self {
        Self {
            username,
            post_count,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let posts = format!("{}件の投稿", self.post_count);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "📸 画像共有SNS",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(posts, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.username.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
