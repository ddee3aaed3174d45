use crate::ui::app::{App, Focus};
use crate::ui::composer::{composer_height, composer_widget};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, scroll_offset};
use crate::ui::post_view::{render_post_card, CardContext};
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const EMPTY_FEED: &str = "まだ投稿がありません。最初の投稿をしてみましょう！";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, composer_height(app.store().draft()));

    let header = Header::new(app.store().author(), app.store().posts().len());
    frame.render_widget(header.widget(), regions.header);
    frame.render_widget(composer_widget(app), regions.composer);
    frame.render_widget(Clear, regions.feed);
    draw_feed(frame, app, regions.feed);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn draw_feed(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Feed;
    let block = Block::default()
        .title(Span::styled(" フィード ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { FOCUS_BORDER } else { GLOBAL_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let store = app.store();
    if store.posts().is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            EMPTY_FEED,
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_span = (0, 0);
    for (idx, (post, view)) in store.posts().iter().zip(app.post_views()).enumerate() {
        let selected = idx == app.selected_index();
        let ctx = CardContext {
            resolver: store.resolver(),
            timestamp_format: app.timestamp_format(),
            selected: selected && focused,
            width: inner.width,
        };
        let start = lines.len();
        lines.extend(render_post_card(post, view, &ctx));
        if selected {
            selected_span = (start, lines.len());
        }
    }

    let offset = scroll_offset(selected_span.0, selected_span.1, inner.height as usize);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}
