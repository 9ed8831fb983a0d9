//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`inputs`]: Array and target text fields, plus the "Searching for" line
//! - [`array`]: One cell per element, highlighted by the current step
//! - [`step`]: Narration of the step under the cursor
//! - [`summary`]: Found / not found result once the last step is shown
//! - [`status`]: Status bar with step position and playback state, plus the
//!   keybinding row
//! - [`alert`]: Blocking popup for invalid input
//!
//! Each module exports a stateless `render_*` function taking the frame, the
//! area to draw in, and plain data borrowed from the session.

pub mod alert;
pub mod array;
pub mod inputs;
pub mod status;
pub mod step;
pub mod summary;

// Re-export render functions for convenience
pub use alert::render_alert;
pub use array::{classify_cell, render_array_pane, CellState};
pub use inputs::{render_input_pane, render_search_label};
pub use status::{render_help_bar, render_status_bar};
pub use step::render_step_pane;
pub use summary::render_summary_pane;
