//! Step records captured by the tracer

use std::fmt;

/// What the search decided after probing `mid`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `arr[mid] == target`
    Found,
    /// `arr[mid] < target`, search continues at `new_low`
    Right { new_low: isize },
    /// `arr[mid] > target`, search continues up to `new_high`
    Left { new_high: isize },
    /// Window is empty (`low > high`); the target is not in the array
    Exhausted,
}

/// One iteration of the search loop.
///
/// `low` and `high` are the inclusive window bounds at the time of the probe.
/// `high` drops to `-1` when the window empties below the first index, so
/// both bounds are signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub low: isize,
    pub high: isize,
    /// Probed index, `None` on the terminal not-found step
    pub mid: Option<usize>,
    pub outcome: Outcome,
    pub message: String,
}

impl Step {
    pub(crate) fn exhausted(low: isize, high: isize) -> Self {
        Step {
            low,
            high,
            mid: None,
            outcome: Outcome::Exhausted,
            message: "Target not found, low > high".to_string(),
        }
    }

    /// True only on the step where the target was located
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Index of the match, present only when [`Step::found`] is true
    pub fn found_index(&self) -> Option<usize> {
        if self.found() {
            self.mid
        } else {
            None
        }
    }

    /// Probed index with `-1` standing in for "no probe"
    pub fn mid_or_sentinel(&self) -> isize {
        self.mid.map_or(-1, |m| m as isize)
    }

    /// Whether `index` lies inside the inclusive `[low, high]` window
    pub fn in_window(&self, index: usize) -> bool {
        let index = index as isize;
        index >= self.low && index <= self.high
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Low: {}, High: {}, Mid: {} | {}",
            self.low,
            self.high,
            self.mid_or_sentinel(),
            self.message
        )
    }
}
