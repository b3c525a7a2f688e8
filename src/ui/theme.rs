use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2d, 0xd4, 0xbf);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const BODY_TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const MUTED_TEXT: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const POPUP_BORDER: Color = Color::Rgb(0xd4, 0xd4, 0xd8);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x27, 0x27, 0x2a);
