//! Array and target text fields

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render both input fields side by side
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    array_input: &str,
    target_input: &str,
    array_focused: bool,
    target_focused: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_field(
        frame,
        columns[0],
        " Array (comma-separated numbers) ",
        array_input,
        "e.g., 1,3,5,7,9",
        array_focused,
    );
    render_field(
        frame,
        columns[1],
        " Target Value ",
        target_input,
        "e.g., 5",
        target_focused,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = if text.is_empty() && !is_focused {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )]
    } else {
        vec![Span::styled(
            text.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )]
    };
    if is_focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.border_focused),
        ));
    }

    // Keep the end of long input visible
    let visible_width = area.width.saturating_sub(3) as usize;
    let scroll = text.chars().count().saturating_sub(visible_width) as u16;

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .scroll((0, scroll));
    frame.render_widget(paragraph, area);
}

/// "Searching for:" line under the fields
pub fn render_search_label(frame: &mut Frame, area: Rect, target_input: &str) {
    let target = target_input.trim();
    let line = Line::from(vec![
        Span::styled("Searching for: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            if target.is_empty() { "none" } else { target }.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
