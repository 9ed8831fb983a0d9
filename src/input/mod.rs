//! Input normalization
//!
//! Turns the free-text array and target fields into the sorted `i64` array
//! and integer target the tracer expects. Array parsing is lenient: tokens
//! without a leading integer are dropped rather than reported. Target
//! parsing is strict, since it is the one input the user gets told about.

mod generator;

pub use generator::ArrayGenerator;

use thiserror::Error;

/// Errors surfaced to the user while reading input fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid search value.")]
    InvalidTarget { input: String },
}

/// Parse a comma-separated list into a sorted array.
///
/// Each token is trimmed and its leading integer taken (`"5abc"` is 5,
/// `"3.7"` is 3). Tokens with no leading integer, or whose value does not fit
/// in an `i64`, are skipped.
pub fn parse_array(text: &str) -> Vec<i64> {
    let mut values: Vec<i64> = text.split(',').filter_map(leading_int).collect();
    values.sort_unstable();
    values
}

/// Parse the target field. Empty or non-integer text is rejected.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::InvalidTarget {
        input: text.to_string(),
    })
}

/// Optional sign followed by at least one ASCII digit, anything after ignored
fn leading_int(token: &str) -> Option<i64> {
    let token = token.trim();
    let bytes = token.as_bytes();

    let sign_len = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return None;
    }

    token[..sign_len + digit_len].parse().ok()
}
