//! Session state and the controller that mutates it
//!
//! [`Session`] is the whole transient state of one visualizer session: the
//! array, the raw text of both input fields, the current trace and cursor,
//! playback flags and any alert awaiting acknowledgement. Only the
//! [`Controller`] mutates it; the UI reads it to render.

mod controller;

pub use controller::Controller;

use crate::tracer::{Step, Trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) array: Vec<i64>,
    pub(crate) array_input: String,
    pub(crate) target_input: String,
    pub(crate) trace: Option<Trace>,
    pub(crate) cursor: usize,
    pub(crate) playing: bool,
    pub(crate) speed: u64,
    pub(crate) alert: Option<String>,
}

impl Session {
    pub(crate) fn new(speed: u64) -> Self {
        Session {
            array: Vec::new(),
            array_input: String::new(),
            target_input: String::new(),
            trace: None,
            cursor: 0,
            playing: false,
            speed,
            alert: None,
        }
    }

    /// The sorted array being searched
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn array_input(&self) -> &str {
        &self.array_input
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Index of the displayed step
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    /// Blocking notification waiting to be dismissed
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Step under the cursor, `None` until a trace exists
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.as_ref().and_then(|t| t.get(self.cursor))
    }

    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn can_step_back(&self) -> bool {
        self.trace.is_some() && self.cursor > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.trace
            .as_ref()
            .is_some_and(|t| self.cursor < t.last_index())
    }

    /// Cursor sits on the final step, which is when the summary is shown
    pub fn at_last_step(&self) -> bool {
        self.trace
            .as_ref()
            .is_some_and(|t| self.cursor == t.last_index())
    }
}
