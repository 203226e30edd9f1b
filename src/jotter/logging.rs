//! Logging bootstrap.
//!
//! The shell owns the terminal, so by default nothing is logged at all.
//! Logging is switched on by the binary's flags:
//! - `--verbose` alone: `debug` to stderr
//! - `--log-dir <dir>`: rotating files in `<dir>`, `info` (or `debug` with
//!   `--verbose`)
//!
//! The returned [`LoggerHandle`] must be kept alive for the whole process;
//! dropping it flushes and stops the logger.

use crate::error::{JotterError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "jotter";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Where log records go, decided once from the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Off,
    Stderr,
    Dir(&'a Path),
}

impl<'a> LogSink<'a> {
    pub fn from_flags(verbose: bool, log_dir: Option<&'a Path>) -> Self {
        match (log_dir, verbose) {
            (Some(dir), _) => LogSink::Dir(dir),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Off,
        }
    }
}

pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Starts the logger. Returns `None` when logging is off.
///
/// # Errors
/// - The log directory cannot be created
/// - The logger backend fails to start
pub fn init_logging(level: &str, sink: LogSink<'_>) -> Result<Option<LoggerHandle>> {
    let logger = match sink {
        LogSink::Off => return Ok(None),
        LogSink::Stderr => Logger::try_with_str(level)
            .map_err(|e| JotterError::Logging(format!("invalid log level `{level}`: {e}")))?
            .log_to_stderr(),
        LogSink::Dir(dir) => {
            std::fs::create_dir_all(dir).map_err(JotterError::Io)?;
            Logger::try_with_str(level)
                .map_err(|e| JotterError::Logging(format!("invalid log level `{level}`: {e}")))?
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };

    let handle = logger
        .start()
        .map_err(|e| JotterError::Logging(format!("failed to start logger: {e}")))?;

    info!(
        "jotter {} starting (platform={})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );
    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_from_flags() {
        let dir = Path::new("/tmp/logs");
        assert_eq!(LogSink::from_flags(false, None), LogSink::Off);
        assert_eq!(LogSink::from_flags(true, None), LogSink::Stderr);
        assert_eq!(LogSink::from_flags(false, Some(dir)), LogSink::Dir(dir));
        assert_eq!(LogSink::from_flags(true, Some(dir)), LogSink::Dir(dir));
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(level_for(true), "debug");
        assert_eq!(level_for(false), "info");
    }

    #[test]
    fn off_sink_starts_nothing() {
        assert!(init_logging("info", LogSink::Off).unwrap().is_none());
    }
}
