//! Array cells with the current search window highlighted

use crate::tracer::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one cell including its border
pub const CELL_WIDTH: u16 = 8;
/// Height of one cell: border, value, index, border
pub const CELL_HEIGHT: u16 = 4;

/// How one array cell is drawn for the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No trace yet
    Idle,
    /// Inside `[low, high]`
    Window,
    /// Outside `[low, high]`
    Excluded,
    /// The `mid` probe of this step
    Probe,
    /// The located target on the found step
    Match,
}

pub fn classify_cell(step: Option<&Step>, index: usize) -> CellState {
    let Some(step) = step else {
        return CellState::Idle;
    };

    if step.found_index() == Some(index) {
        CellState::Match
    } else if step.mid == Some(index) {
        CellState::Probe
    } else if !step.in_window(index) {
        CellState::Excluded
    } else {
        CellState::Window
    }
}

fn cell_styles(state: CellState) -> (Style, Style) {
    let (border, value) = match state {
        CellState::Idle => (DEFAULT_THEME.border_normal, DEFAULT_THEME.fg),
        CellState::Window => (DEFAULT_THEME.primary, DEFAULT_THEME.fg),
        CellState::Excluded => (DEFAULT_THEME.excluded, DEFAULT_THEME.excluded),
        CellState::Probe => (DEFAULT_THEME.probe, DEFAULT_THEME.probe),
        CellState::Match => (DEFAULT_THEME.success, DEFAULT_THEME.success),
    };

    let mut border_style = Style::default().fg(border);
    let mut value_style = Style::default().fg(value).add_modifier(Modifier::BOLD);
    if matches!(state, CellState::Probe | CellState::Match) {
        border_style = border_style.add_modifier(Modifier::BOLD);
        value_style = Style::default()
            .bg(value)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    (border_style, value_style)
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, array: &[i64], step: Option<&Step>) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if array.is_empty() {
        let lines = vec![
            Line::from("No array set").style(Style::default().fg(DEFAULT_THEME.fg)),
            Line::from("Type values into the array field and press Enter, or press g for a random array")
                .style(Style::default().fg(DEFAULT_THEME.comment)),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    let per_row = (inner.width / CELL_WIDTH).max(1) as usize;
    let rows_used = array.len().div_ceil(per_row);
    if rows_used * CELL_HEIGHT as usize > inner.height as usize {
        render_compact(frame, area, array, step);
        return;
    }
    frame.render_widget(block, area);

    let cols_used = array.len().min(per_row) as u16;
    let x_offset = inner.width.saturating_sub(cols_used * CELL_WIDTH) / 2;
    let y_offset = inner
        .height
        .saturating_sub(rows_used as u16 * CELL_HEIGHT)
        / 2;

    for (index, value) in array.iter().enumerate() {
        let row = (index / per_row) as u16;
        let col = (index % per_row) as u16;
        let y = inner.y + y_offset + row * CELL_HEIGHT;
        let cell_area = Rect {
            x: inner.x + x_offset + col * CELL_WIDTH,
            y,
            width: CELL_WIDTH.min(inner.width),
            height: CELL_HEIGHT,
        };

        let state = classify_cell(step, index);
        let (border_style, value_style) = cell_styles(state);
        let index_style = Style::default().fg(if state == CellState::Excluded {
            DEFAULT_THEME.excluded
        } else {
            DEFAULT_THEME.comment
        });

        let cell = Paragraph::new(vec![
            Line::styled(value.to_string(), value_style),
            Line::styled(format!("[{}]", index), index_style),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(cell, cell_area);
    }
}

/// One-line cells (`value[index]`) for when boxed cells would not fit.
///
/// If even these overflow, the title says how many elements are shown.
fn render_compact(frame: &mut Frame, area: Rect, array: &[i64], step: Option<&Step>) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let labels: Vec<String> = array
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{}[{}]", value, index))
        .collect();
    let chip_width = labels.iter().map(String::len).max().unwrap_or(0) + 2;
    let per_row = (inner.width as usize / chip_width).max(1);

    let lines: Vec<Line> = labels
        .chunks(per_row)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, label)| {
                    let state = classify_cell(step, row * per_row + col);
                    Span::styled(
                        format!("{:^width$}", label, width = chip_width),
                        compact_style(state),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let visible = lines.len().min(inner.height as usize);
    let title = if visible < lines.len() {
        let shown = (visible * per_row).min(array.len());
        format!(" Array ({} of {} shown) ", shown, array.len())
    } else {
        " Array ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn compact_style(state: CellState) -> Style {
    let (_, value_style) = cell_styles(state);
    match state {
        CellState::Window => value_style.fg(DEFAULT_THEME.primary),
        _ => value_style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::trace;

    #[test]
    fn test_no_step_is_idle() {
        assert_eq!(classify_cell(None, 0), CellState::Idle);
    }

    #[test]
    fn test_first_probe_classification() {
        let trace = trace(&[1, 3, 5, 7, 9], 7).unwrap();
        let first = trace.get(0);

        assert_eq!(classify_cell(first, 2), CellState::Probe);
        assert_eq!(classify_cell(first, 0), CellState::Window);
        assert_eq!(classify_cell(first, 4), CellState::Window);
    }

    #[test]
    fn test_found_step_marks_match_and_excludes() {
        let trace = trace(&[1, 3, 5, 7, 9], 7).unwrap();
        let found = trace.get(1);

        assert_eq!(classify_cell(found, 3), CellState::Match);
        assert_eq!(classify_cell(found, 2), CellState::Excluded);
        assert_eq!(classify_cell(found, 4), CellState::Window);
    }

    #[test]
    fn test_not_found_step_has_no_probe() {
        let trace = trace(&[2, 4, 6], 5).unwrap();
        let last = trace.last();

        for index in 0..3 {
            assert_eq!(classify_cell(last, index), CellState::Excluded);
        }
    }
}
