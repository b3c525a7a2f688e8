use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::Session;
use crate::ui::theme::{ACCENT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &Session) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(
                "  Pharmacy Dashboard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("Welcome back, {}!", session.display_name()),
                Style::default().fg(BODY_TEXT),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
