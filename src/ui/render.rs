use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::dashboard::DashboardState;
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, FormMode, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};

/// Render the whole frame from state. Two coarse body states: the
/// loading indicator while a fetch is in flight, the inventory view
/// otherwise.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body_area, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.session()), header_area);
    frame.render_widget(Clear, body_area);

    if app.dashboard().loading {
        draw_loading(frame, body_area);
    } else {
        draw_ready(frame, app, body_area);
    }

    frame.render_widget(Footer::new().widget(footer_area), footer_area);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect) {
    if area.height == 0 {
        return;
    }
    let target = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let message = Paragraph::new("Loading your medicines...")
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(message, target);
}

fn draw_ready(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.dashboard();

    let banner_height = if state.error.is_some() {
        3.min(area.height)
    } else {
        0
    };
    let banner_area = Rect {
        height: banner_height,
        ..area
    };
    let list_area = Rect {
        y: area.y + banner_height,
        height: area.height.saturating_sub(banner_height),
        ..area
    };

    if let Some(message) = &state.error {
        draw_error_banner(frame, banner_area, message);
    }

    draw_medicine_table(frame, state, list_area);

    if let FormState::Visible {
        mode,
        fields,
        focused,
        field_error,
    } = app.form()
    {
        draw_form(frame, area, *mode, fields, *focused, field_error.as_deref());
    } else if let Some(id) = state.pending_delete {
        draw_confirm_delete(frame, area, state, id);
    }
}

fn draw_error_banner(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
        Span::styled("  (x to dismiss)", Style::default().fg(MUTED_TEXT)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(widget, area);
}

fn draw_medicine_table(frame: &mut Frame<'_>, state: &DashboardState, area: Rect) {
    let title = format!("Your Medicines ({})", state.medicines.len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.medicines.is_empty() {
        let empty = Paragraph::new("No medicines yet. Press 'a' to add one.")
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Name", "Price", "Stock", "Description"])
        .style(Style::default().fg(MUTED_TEXT));

    let rows: Vec<Row<'_>> = state
        .medicines
        .iter()
        .enumerate()
        .map(|(idx, medicine)| {
            let style = if idx == state.selected {
                Style::default().fg(BODY_TEXT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(BODY_TEXT)
            };
            Row::new(vec![
                Cell::from(medicine.name.clone()),
                Cell::from(format!("{:.2}", medicine.price)),
                Cell::from(medicine.stock.to_string()),
                Cell::from(medicine.description.clone().unwrap_or_default()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);
    frame.render_widget(table, area);
}

fn draw_form(
    frame: &mut Frame<'_>,
    area: Rect,
    mode: FormMode,
    fields: &[FormField],
    focused: usize,
    field_error: Option<&str>,
) {
    let title = match mode {
        FormMode::Add => "Add Medicine",
        FormMode::Edit { .. } => "Edit Medicine",
    };

    let mut lines = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:<12}", field.label),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(field.value.clone(), Style::default().fg(BODY_TEXT)),
        ]);
        if idx == focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    if let Some(message) = field_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " Tab: Next field  Enter: Save  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    render_popup(frame, area, title, lines, 46);
}

fn draw_confirm_delete(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, id: i64) {
    let name = state
        .medicines
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
        .unwrap_or("this medicine");

    let lines = vec![
        Line::from(Span::styled(
            format!(" Delete '{}'?", name),
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " y: Delete  n: Cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    render_popup(frame, area, "Confirm Delete", lines, 32);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    min_width: u16,
) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(min_width);
    let popup_height = lines.len().saturating_add(2) as u16;
    let popup_area = centered_rect_by_size(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
