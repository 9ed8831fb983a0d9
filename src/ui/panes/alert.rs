//! Blocking alert popup

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `message` in a box centred over `area`
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, 48, 6);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        );

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Line::from(""),
        Line::styled(
            "press any key to continue",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
