//! Optional file logging
//!
//! The TUI owns the terminal, so log lines can only go to a file. Nothing is
//! recorded unless [`LOG_ENV`] is set.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set to a base path to turn logging on, e.g. `BSEARCH_VIZ_LOG=/tmp/bsv.log`
pub const LOG_ENV: &str = "BSEARCH_VIZ_LOG";

/// Level filter used when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "info";

/// Per-run log file: `<base>.<pid>-<unix seconds>`
pub fn log_file_path(base: &str, pid: u32, started: SystemTime) -> PathBuf {
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    PathBuf::from(format!("{}.{}-{}", base, pid, secs))
}

/// Install the global subscriber if [`LOG_ENV`] names a base path.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };

    let path = log_file_path(&base, std::process::id(), SystemTime::now());
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_log_file_path_is_per_run() {
        let started = UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        assert_eq!(
            log_file_path("/tmp/bsv.log", 42, started),
            PathBuf::from("/tmp/bsv.log.42-1700000000")
        );
        assert_ne!(
            log_file_path("/tmp/bsv.log", 42, started),
            log_file_path("/tmp/bsv.log", 43, started)
        );
    }
}
