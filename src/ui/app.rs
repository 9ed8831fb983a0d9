//! Main TUI application state and logic

use crate::session::Controller;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before re-checking the playback timer
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which region receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ArrayInput,
    TargetInput,
    View,
}

impl Focus {
    /// Move focus forward (array -> target -> view)
    pub fn next(self) -> Self {
        match self {
            Focus::ArrayInput => Focus::TargetInput,
            Focus::TargetInput => Focus::View,
            Focus::View => Focus::ArrayInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::ArrayInput => Focus::View,
            Focus::TargetInput => Focus::ArrayInput,
            Focus::View => Focus::TargetInput,
        }
    }
}

/// The main application state
pub struct App {
    /// Owner of the session state
    pub controller: Controller,

    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            focus: Focus::View,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let was_playing = self.controller.session().is_playing();
            if self.controller.tick(Instant::now()) {
                self.status_message = "Playing...".to_string();
            }
            if was_playing && !self.controller.session().is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Wake up in time for the pending tick, if there is one
            let timeout = self
                .controller
                .timer()
                .due()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let session = self.controller.session();
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // input fields
                Constraint::Length(1), // searching for
                Constraint::Min(6),    // array cells
                Constraint::Length(5), // current step
                Constraint::Length(5), // result
                Constraint::Length(1), // keybindings
                Constraint::Length(1), // status bar
            ])
            .split(area);

        super::panes::render_input_pane(
            frame,
            rows[0],
            session.array_input(),
            session.target_input(),
            self.focus == Focus::ArrayInput,
            self.focus == Focus::TargetInput,
        );

        super::panes::render_search_label(frame, rows[1], session.target_input());

        super::panes::render_array_pane(frame, rows[2], session.array(), session.current_step());

        super::panes::render_step_pane(frame, rows[3], session.current_step(), session.cursor());

        super::panes::render_summary_pane(frame, rows[4], session.trace(), session.at_last_step());

        super::panes::render_help_bar(frame, rows[5]);

        super::panes::render_status_bar(
            frame,
            rows[6],
            &self.status_message,
            session.cursor(),
            session.total_steps(),
            session.is_playing(),
            session.speed(),
        );

        if let Some(message) = session.alert() {
            super::panes::render_alert(frame, area, message);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The alert blocks everything until acknowledged
        if self.controller.session().alert().is_some() {
            self.controller.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Esc => {
                self.focus = Focus::View;
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::ArrayInput => self.handle_array_input(key.code),
            Focus::TargetInput => self.handle_target_input(key.code),
            Focus::View => self.handle_view_key(key.code, now),
        }
    }

    fn handle_array_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.controller.array_input_mut().push(c),
            KeyCode::Backspace => {
                self.controller.array_input_mut().pop();
            }
            KeyCode::Enter => {
                self.controller.apply_array_input();
                self.status_message = format!(
                    "Array set ({} values)",
                    self.controller.session().array().len()
                );
            }
            _ => {}
        }
    }

    fn handle_target_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                self.controller.target_input_mut().push(c);
            }
            KeyCode::Backspace => {
                self.controller.target_input_mut().pop();
            }
            KeyCode::Enter => self.visualize(),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => self.focus = Focus::ArrayInput,
            KeyCode::Char('t') => self.focus = Focus::TargetInput,
            KeyCode::Char('g') => {
                self.controller.generate_array();
                self.status_message = "Generated random array".to_string();
            }
            KeyCode::Char('v') | KeyCode::Enter => self.visualize(),
            KeyCode::Char('r') => {
                self.controller.reset();
                self.status_message = "Reset".to_string();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.controller.next_step(now) {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.status_message = if self.controller.next_step(now) {
                    "Stepped forward".to_string()
                } else {
                    "Cannot step forward: at the last step".to_string()
                };
            }
            KeyCode::Left => {
                self.status_message = if self.controller.prev_step(now) {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: at the first step".to_string()
                };
            }
            KeyCode::End => {
                self.controller.last_step(now);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Home | KeyCode::Backspace => {
                self.controller.first_step(now);
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.speed_up(now);
                self.status_message = format!("Speed {}", self.controller.session().speed());
            }
            KeyCode::Char('-') => {
                self.controller.slow_down(now);
                self.status_message = format!("Speed {}", self.controller.session().speed());
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    if !self.controller.toggle_playback(now) {
                        self.status_message = "Nothing to play: visualize first".to_string();
                    } else if self.controller.session().is_playing() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            _ => {}
        }
    }

    fn visualize(&mut self) {
        match self.controller.visualize() {
            Ok(true) => {
                self.focus = Focus::View;
                self.status_message = format!(
                    "Visualizing search ({} steps)",
                    self.controller.session().total_steps()
                );
            }
            Ok(false) => {
                self.status_message = "Set an array first".to_string();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}
