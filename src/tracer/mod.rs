//! Binary search step tracer
//!
//! [`trace`] runs an ordinary iterative binary search and records the window
//! bounds, the probed index and a narration of each decision as a [`Step`].
//! The resulting [`Trace`] is immutable and is what the UI steps through.

mod step;

pub use step::{Outcome, Step};

use std::cmp::Ordering;

use tracing::debug;

/// Final verdict of a completed trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Found { index: usize, steps: usize },
    NotFound { steps: usize },
}

/// All steps recorded for one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    target: i64,
    steps: Vec<Step>,
}

impl Trace {
    /// The value that was searched for
    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps, including the terminal not-found step if present
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a trace returned by [`trace`]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn result(&self) -> SearchResult {
        let steps = self.steps.len();
        match self.last().and_then(Step::found_index) {
            Some(index) => SearchResult::Found { index, steps },
            None => SearchResult::NotFound { steps },
        }
    }
}

/// Record every step binary search takes to look for `target` in `array`.
///
/// `array` must already be sorted ascending. Returns `None` for an empty
/// array, where there is nothing to probe.
pub fn trace(array: &[i64], target: i64) -> Option<Trace> {
    if array.is_empty() {
        return None;
    }
    debug_assert!(
        array.windows(2).all(|w| w[0] <= w[1]),
        "trace() requires a sorted array"
    );

    let mut steps = Vec::new();
    let mut low: isize = 0;
    let mut high: isize = array.len() as isize - 1;

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let value = array[mid];
        let head = format!("mid = {}, arr[{}] = {}, target = {}", mid, mid, value, target);

        match value.cmp(&target) {
            Ordering::Equal => {
                steps.push(Step {
                    low,
                    high,
                    mid: Some(mid),
                    outcome: Outcome::Found,
                    message: format!("{}, Found at index {}", head, mid),
                });
                debug!(needle = target, mid, steps = steps.len(), "target found");
                return Some(Trace { target, steps });
            }
            Ordering::Less => {
                let new_low = mid as isize + 1;
                steps.push(Step {
                    low,
                    high,
                    mid: Some(mid),
                    outcome: Outcome::Right { new_low },
                    message: format!("{}, {} < {}, so low = {}", head, value, target, new_low),
                });
                low = new_low;
            }
            Ordering::Greater => {
                let new_high = mid as isize - 1;
                steps.push(Step {
                    low,
                    high,
                    mid: Some(mid),
                    outcome: Outcome::Left { new_high },
                    message: format!("{}, {} > {}, so high = {}", head, value, target, new_high),
                });
                high = new_high;
            }
        }
    }

    steps.push(Step::exhausted(low, high));
    debug!(needle = target, low, high, steps = steps.len(), "target not found");
    Some(Trace { target, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_on_second_probe() {
        let trace = trace(&[1, 3, 5, 7, 9], 7).unwrap();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps()[0].mid, Some(2));
        assert_eq!(trace.steps()[0].outcome, Outcome::Right { new_low: 3 });
        assert_eq!(
            trace.steps()[0].message,
            "mid = 2, arr[2] = 5, target = 7, 5 < 7, so low = 3"
        );
        assert_eq!(trace.steps()[1].mid, Some(3));
        assert!(trace.steps()[1].found());
        assert_eq!(
            trace.steps()[1].message,
            "mid = 3, arr[3] = 7, target = 7, Found at index 3"
        );
        assert_eq!(trace.result(), SearchResult::Found { index: 3, steps: 2 });
    }

    #[test]
    fn test_not_found_appends_terminal_step() {
        let trace = trace(&[2, 4, 6], 5).unwrap();

        assert_eq!(trace.len(), 3);
        assert_eq!(
            trace.steps()[1].message,
            "mid = 2, arr[2] = 6, target = 5, 6 > 5, so high = 1"
        );
        let last = trace.last().unwrap();
        assert_eq!((last.low, last.high), (2, 1));
        assert_eq!(last.mid, None);
        assert_eq!(last.mid_or_sentinel(), -1);
        assert!(!last.found());
        assert_eq!(last.found_index(), None);
        assert_eq!(last.message, "Target not found, low > high");
        assert_eq!(trace.result(), SearchResult::NotFound { steps: 3 });
    }

    #[test]
    fn test_outcome_matches_comparison() {
        let array = [3, 8, 8, 15, 21, 40];
        for target in [0, 3, 8, 10, 21, 40, 41] {
            let trace = trace(&array, target).unwrap();
            let (last, searched) = trace.steps().split_last().unwrap();

            for step in searched {
                let mid = step.mid.unwrap();
                match step.outcome {
                    Outcome::Right { new_low } => {
                        assert!(array[mid] < target);
                        assert_eq!(new_low, mid as isize + 1);
                    }
                    Outcome::Left { new_high } => {
                        assert!(array[mid] > target);
                        assert_eq!(new_high, mid as isize - 1);
                    }
                    other => panic!("unexpected {:?} before the last step", other),
                }
            }
            assert!(matches!(last.outcome, Outcome::Found | Outcome::Exhausted));
        }
    }

    #[test]
    fn test_empty_array_has_no_trace() {
        assert!(trace(&[], 3).is_none());
    }

    #[test]
    fn test_single_element() {
        let hit = trace(&[4], 4).unwrap();
        assert_eq!(hit.len(), 1);
        assert!(hit.steps()[0].found());

        let miss = trace(&[4], 9).unwrap();
        assert_eq!(miss.len(), 2);
        assert_eq!(miss.steps()[0].mid, Some(0));
    }

    #[test]
    fn test_target_below_everything() {
        let trace = trace(&[10, 20, 30, 40], 1).unwrap();
        let last = trace.last().unwrap();

        assert_eq!(last.outcome, Outcome::Exhausted);
        assert_eq!((last.low, last.high), (0, -1));
    }

    #[test]
    fn test_target_above_everything() {
        let trace = trace(&[10, 20, 30, 40], 99).unwrap();
        let last = trace.last().unwrap();

        assert_eq!(last.outcome, Outcome::Exhausted);
        assert_eq!((last.low, last.high), (4, 3));
    }

    #[test]
    fn test_window_membership() {
        let trace = trace(&[1, 2, 3, 4, 5, 6, 7], 6).unwrap();
        let second = &trace.steps()[1];

        assert_eq!((second.low, second.high), (4, 6));
        assert!(!second.in_window(3));
        assert!(second.in_window(4));
        assert!(second.in_window(6));
        assert!(!second.in_window(7));
    }
}
