//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `total_steps` is 0 until a trace exists.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
    speed: u64,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.panel_bg);

    // Left side: step position and status message
    let step_text = if total_steps == 0 {
        " Step -/- ".to_string()
    } else {
        format!(" Step {}/{} ", current_step + 1, total_steps)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: speed and playback state
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![Span::styled(format!(" speed {} ", speed), desc_style)];

    let is_at_start = current_step == 0;
    let is_at_end = total_steps > 0 && current_step + 1 >= total_steps;

    let indicator = if is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.accent))
    } else if total_steps == 0 {
        None
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}

/// Key hints in the order they are given up when the row is too narrow.
/// `q quit` is always kept at the end.
const HELP_ENTRIES: [(&str, &str); 7] = [
    ("←/→", "step"),
    ("⎵", "play"),
    ("+/-", "speed"),
    ("g", "random"),
    ("v", "search"),
    ("r", "reset"),
    ("⇥", "fields"),
];

/// Render the keybinding row
pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let bar_style = Style::default().bg(DEFAULT_THEME.panel_bg);
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let hint = |key: &str, desc: &str| {
        [
            Span::styled(format!(" {} ", key), key_style),
            Span::styled(format!(" {} ", desc), desc_style),
        ]
    };

    let quit = hint("q", "quit");
    let mut room = (area.width as usize).saturating_sub(quit.iter().map(Span::width).sum());

    let mut spans = Vec::new();
    for (key, desc) in HELP_ENTRIES {
        let entry = hint(key, desc);
        let cost = entry.iter().map(Span::width).sum::<usize>() + 1;
        if cost > room {
            break;
        }
        room -= cost;
        spans.extend(entry);
        spans.push(Span::styled("│", sep_style));
    }
    spans.extend(quit);

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(bar_style)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn help_row(width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal.draw(|f| render_help_bar(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_help_bar_keeps_quit_when_narrow() {
        for width in [40, 60, 80] {
            let row = help_row(width);
            assert!(row.contains(" q  quit "), "width {}: {:?}", width, row);
        }
    }

    #[test]
    fn test_help_bar_drops_trailing_hints() {
        let narrow = help_row(80);
        assert!(narrow.contains(" step "));
        assert!(narrow.contains(" r  reset "));
        assert!(!narrow.contains("fiel"));

        let wide = help_row(120);
        assert!(wide.contains(" ⇥  fields "));
    }
}
