use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub composer: Rect,
    pub feed: Rect,
    pub footer: Rect,
}

/// Split the screen top to bottom: header, composer, feed, footer.
/// The feed takes whatever is left.
pub fn layout_regions(area: Rect, composer_height: u16) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(composer_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        composer: chunks[1],
        feed: chunks[2],
        footer: chunks[3],
    }
}

/// First line to show so that the selected card (lines `start..end`) is
/// in view, preferring its top when it is taller than the viewport.
pub fn scroll_offset(start: usize, end: usize, viewport: usize) -> usize {
    if end <= viewport {
        0
    } else {
        start.min(end - viewport)
    }
}
