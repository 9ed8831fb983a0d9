//! # Introduction
//!
//! bsearch-viz runs binary search over a small sorted array, records the
//! state of every iteration, and lets the user step through, auto-play or
//! scrub the recorded steps in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → Sorted array → Tracer → Steps → Session cursor → TUI
//! ```
//!
//! 1. [`input`] — parses the comma-separated array and the target, and
//!    generates random sorted arrays.
//! 2. [`tracer`] — runs the search and records a [`tracer::Step`] per probe,
//!    plus a terminal step when the target is absent.
//! 3. [`session`] — the one mutable session state and the
//!    [`session::Controller`] every action goes through.
//! 4. [`playback`] — speed/interval mapping and the single-slot cancellable
//!    timer that drives auto-play.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! [`config`], [`logging`] and [`report`] cover the TOML settings file,
//! file-based tracing, and the headless `--print` output.

pub mod config;
pub mod input;
pub mod logging;
pub mod playback;
pub mod report;
pub mod session;
pub mod tracer;
pub mod ui;
