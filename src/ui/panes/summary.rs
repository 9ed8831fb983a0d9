//! Found / not found summary, shown once the cursor reaches the last step

use crate::tracer::{SearchResult, Trace};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_summary_pane(frame: &mut Frame, area: Rect, trace: Option<&Trace>, at_last_step: bool) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let trace = match trace {
        Some(trace) if at_last_step => trace,
        _ => {
            let paragraph =
                Paragraph::new("Results will appear here after completing the search")
                    .block(block)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let value_style = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let lines = match trace.result() {
        SearchResult::Found { index, steps } => vec![
            Line::styled(
                "✅ Target Found!",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("Index: ", label_style),
                Span::styled(index.to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Total Steps: ", label_style),
                Span::styled(steps.to_string(), value_style),
            ]),
        ],
        SearchResult::NotFound { steps } => vec![
            Line::styled(
                "❌ Target Not Found",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("Total Steps: ", label_style),
                Span::styled(steps.to_string(), value_style),
            ]),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
