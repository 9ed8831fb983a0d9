//! Narration of the step under the cursor

use crate::tracer::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the current step pane
pub fn render_step_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, cursor: usize) {
    let block = Block::default()
        .title(" Current Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(step) = step else {
        let paragraph = Paragraph::new("Set an array and a target, then press v to visualize")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let number_style = Style::default().fg(DEFAULT_THEME.secondary);
    let lines = vec![
        Line::styled(
            format!("Step {}:", cursor + 1),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::raw("Low: "),
            Span::styled(step.low.to_string(), number_style),
            Span::raw(", High: "),
            Span::styled(step.high.to_string(), number_style),
            Span::raw(", Mid: "),
            Span::styled(step.mid_or_sentinel().to_string(), number_style),
        ]),
        Line::styled(step.message.clone(), Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
