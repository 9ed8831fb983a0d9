//! Plain-text trace output for `--print`

use std::io::{self, Write};

use crate::input::InputError;
use crate::session::Controller;
use crate::tracer::{SearchResult, Trace};

/// How a `--print` run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintStatus {
    /// The report was written
    Printed(SearchResult),
    /// The array parsed to nothing; a notice was written instead
    NoArray,
    /// The target was rejected; nothing was written
    InvalidTarget(InputError),
}

impl PrintStatus {
    /// Process exit code for this status
    pub fn exit_code(&self) -> i32 {
        match self {
            PrintStatus::Printed(_) | PrintStatus::NoArray => 0,
            PrintStatus::InvalidTarget(_) => 1,
        }
    }
}

/// Run the search held by `controller` and write it out.
///
/// With `random_array` a generated array replaces whatever was there first.
pub fn print_search<W: Write>(
    controller: &mut Controller,
    random_array: bool,
    out: &mut W,
) -> io::Result<PrintStatus> {
    if random_array {
        controller.generate_array();
    }

    if let Err(e) = controller.visualize() {
        return Ok(PrintStatus::InvalidTarget(e));
    }

    let session = controller.session();
    match session.trace() {
        Some(trace) => {
            write_report(out, session.array(), trace)?;
            Ok(PrintStatus::Printed(trace.result()))
        }
        None => {
            writeln!(out, "No array to search.")?;
            Ok(PrintStatus::NoArray)
        }
    }
}

/// Write the array, every step, and the verdict
pub fn write_report<W: Write>(out: &mut W, array: &[i64], trace: &Trace) -> io::Result<()> {
    let cells: Vec<String> = array.iter().map(i64::to_string).collect();
    writeln!(out, "Array: [{}]", cells.join(", "))?;
    writeln!(out, "Searching for: {}", trace.target())?;
    writeln!(out)?;

    for (i, step) in trace.steps().iter().enumerate() {
        writeln!(out, "Step {}: {}", i + 1, step)?;
    }
    writeln!(out)?;

    match trace.result() {
        SearchResult::Found { index, steps } => {
            writeln!(out, "Target Found! Index: {}, Total Steps: {}", index, steps)
        }
        SearchResult::NotFound { steps } => {
            writeln!(out, "Target Not Found. Total Steps: {}", steps)
        }
    }
}
