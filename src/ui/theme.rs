use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xcc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x00, 0x7a, 0xcc);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
pub const LIKE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_GUTTER: Color = Color::Rgb(0x00, 0x7a, 0xcc);
