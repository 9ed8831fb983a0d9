//! The single owner of session state
//!
//! Every user action and every timer tick goes through a [`Controller`]
//! method. Methods that may (re)schedule playback take the current time so
//! tests can drive the timer without sleeping.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::input::{self, ArrayGenerator, InputError};
use crate::playback::{self, PlaybackTimer, TickId, MAX_SPEED, MIN_SPEED};
use crate::session::Session;
use crate::tracer;

pub struct Controller {
    session: Session,
    timer: PlaybackTimer,
    generator: ArrayGenerator,
    speed_step: u64,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Controller {
            session: Session::new(playback::clamp_speed(config.playback.speed)),
            timer: PlaybackTimer::new(),
            generator: ArrayGenerator::new(&config.generator),
            speed_step: config.playback.speed_step.max(1),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn timer(&self) -> &PlaybackTimer {
        &self.timer
    }

    // ========== Input fields ==========

    pub fn array_input_mut(&mut self) -> &mut String {
        &mut self.session.array_input
    }

    pub fn target_input_mut(&mut self) -> &mut String {
        &mut self.session.target_input
    }

    /// Parse the array field and make it the current array ("Set Array")
    pub fn apply_array_input(&mut self) {
        let array = input::parse_array(&self.session.array_input);
        info!(len = array.len(), "array set from input");
        self.replace_array(array);
    }

    /// Fill the input fields from command-line values.
    ///
    /// An array is applied at once. When both values are given the search
    /// runs too, so an invalid target is waiting as the alert. Returns
    /// whether a trace was produced.
    pub fn prefill(&mut self, array: Option<&str>, target: Option<&str>) -> bool {
        if let Some(array) = array {
            self.session.array_input = array.to_string();
            self.apply_array_input();
        }
        if let Some(target) = target {
            self.session.target_input = target.to_string();
        }

        array.is_some() && target.is_some() && matches!(self.visualize(), Ok(true))
    }

    /// Replace the array with a random sorted one
    pub fn generate_array(&mut self) {
        let array = self.generator.generate();
        info!(?array, "random array generated");
        self.replace_array(array);
    }

    fn replace_array(&mut self, array: Vec<i64>) {
        self.stop_playback();
        self.session.array = array;
        self.session.trace = None;
        self.session.cursor = 0;
    }

    // ========== Search ==========

    /// Run the tracer over the current array and target ("Visualize").
    ///
    /// Returns `Ok(false)` without touching anything when the array is empty.
    /// An invalid target raises the alert and otherwise leaves the session
    /// unchanged.
    pub fn visualize(&mut self) -> Result<bool, InputError> {
        if self.session.array.is_empty() {
            debug!("visualize ignored: no array");
            return Ok(false);
        }

        let target = match input::parse_target(&self.session.target_input) {
            Ok(target) => target,
            Err(e) => {
                warn!(input = %self.session.target_input, "rejected search value");
                self.session.alert = Some(e.to_string());
                return Err(e);
            }
        };

        let Some(trace) = tracer::trace(&self.session.array, target) else {
            return Ok(false);
        };
        info!(needle = target, steps = trace.len(), "trace generated");

        self.stop_playback();
        self.session.trace = Some(trace);
        self.session.cursor = 0;
        Ok(true)
    }

    pub fn dismiss_alert(&mut self) {
        self.session.alert = None;
    }

    // ========== Navigation ==========

    /// Move to the next step. No-op on the last step.
    pub fn next_step(&mut self, now: Instant) -> bool {
        if !self.session.can_step_forward() {
            return false;
        }
        self.session.cursor += 1;
        self.restart_pending_tick(now);
        true
    }

    /// Move to the previous step. No-op on the first step.
    pub fn prev_step(&mut self, now: Instant) -> bool {
        if !self.session.can_step_back() {
            return false;
        }
        self.session.cursor -= 1;
        self.restart_pending_tick(now);
        true
    }

    /// Jump to the first step
    pub fn first_step(&mut self, now: Instant) -> bool {
        if !self.session.can_step_back() {
            return false;
        }
        self.session.cursor = 0;
        self.restart_pending_tick(now);
        true
    }

    /// Jump to the last step
    pub fn last_step(&mut self, now: Instant) -> bool {
        if !self.session.can_step_forward() {
            return false;
        }
        self.session.cursor = self.session.total_steps() - 1;
        self.restart_pending_tick(now);
        true
    }

    // ========== Playback ==========

    /// Auto Play / Pause. Starting rewinds to the first step. No-op without a
    /// trace.
    pub fn toggle_playback(&mut self, now: Instant) -> bool {
        if self.session.trace.is_none() {
            return false;
        }

        if self.session.playing {
            info!(cursor = self.session.cursor, "playback paused");
            self.stop_playback();
        } else {
            info!("playback started");
            self.session.cursor = 0;
            self.session.playing = true;
            self.restart_pending_tick(now);
        }
        true
    }

    pub fn set_speed(&mut self, speed: u64, now: Instant) {
        let speed = playback::clamp_speed(speed);
        if speed == self.session.speed {
            return;
        }
        debug!(speed, "speed changed");
        self.session.speed = speed;
        self.restart_pending_tick(now);
    }

    pub fn speed_up(&mut self, now: Instant) {
        let speed = self
            .session
            .speed
            .saturating_add(self.speed_step)
            .min(MAX_SPEED);
        self.set_speed(speed, now);
    }

    pub fn slow_down(&mut self, now: Instant) {
        let speed = self
            .session
            .speed
            .saturating_sub(self.speed_step)
            .max(MIN_SPEED);
        self.set_speed(speed, now);
    }

    /// Deliver the pending tick if it is due. Returns whether the cursor moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer.poll(now) {
            Some(_) => self.advance_playback(now),
            None => false,
        }
    }

    /// Deliver a specific tick regardless of its deadline. Ticks that were
    /// cancelled or replaced are ignored.
    pub fn fire(&mut self, id: TickId, now: Instant) -> bool {
        if !self.timer.claim(id) {
            debug!(?id, "stale tick ignored");
            return false;
        }
        self.advance_playback(now)
    }

    fn advance_playback(&mut self, now: Instant) -> bool {
        if !self.session.playing {
            return false;
        }
        if !self.session.can_step_forward() {
            info!("playback complete");
            self.stop_playback();
            return false;
        }
        self.session.cursor += 1;
        self.restart_pending_tick(now);
        true
    }

    /// Drop the pending tick and, while playing, schedule a fresh one.
    /// Playback ends as soon as the last step is on screen.
    fn restart_pending_tick(&mut self, now: Instant) {
        self.timer.cancel();
        if !self.session.playing {
            return;
        }
        if self.session.at_last_step() {
            info!("playback complete");
            self.session.playing = false;
            return;
        }
        self.timer
            .schedule(now, playback::interval_for_speed(self.session.speed));
    }

    fn stop_playback(&mut self) {
        self.session.playing = false;
        self.timer.cancel();
    }

    // ========== Reset ==========

    /// Clear array, inputs, trace and cursor, and stop playback. Speed is kept.
    pub fn reset(&mut self) {
        info!("session reset");
        self.stop_playback();
        let speed = self.session.speed;
        self.session = Session::new(speed);
    }
}
