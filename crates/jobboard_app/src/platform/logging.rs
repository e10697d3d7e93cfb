//! Logger setup for the `jobboard` binary, driven by the `--log` flag.
//!
//! The dashboard owns stdout, so the default sink is a log file next to where
//! the binary was started.

use std::fs::File;
use std::io;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./jobboard.log";
const LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// `./jobboard.log`, truncated on start.
    File,
    /// stderr/stdout, colored when attached to a tty.
    Terminal,
    /// File and terminal together.
    Both,
    /// No logging at all.
    Off,
}

impl LogDestination {
    fn wants_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn wants_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the dashboard still starts.
pub fn initialize(destination: LogDestination) {
    let sinks = sinks_for(destination, || File::create(LOG_FILE));
    if sinks.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(sinks);
}

fn sinks_for(
    destination: LogDestination,
    open_file: impl FnOnce() -> io::Result<File>,
) -> Vec<Box<dyn SharedLogger>> {
    let mut sinks: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        sinks.push(TermLogger::new(
            LEVEL,
            record_format(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match open_file() {
            Ok(file) => sinks.push(WriteLogger::new(LEVEL, record_format(), file)),
            Err(err) => eprintln!("jobboard: logging to {LOG_FILE} disabled: {err}"),
        }
    }
    sinks
}

/// RFC 3339 timestamps; module paths only on errors.
fn record_format() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unopenable() -> io::Result<File> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    #[test]
    fn off_installs_nothing() {
        assert!(sinks_for(LogDestination::Off, unopenable).is_empty());
    }

    #[test]
    fn unopenable_file_falls_back_to_remaining_sinks() {
        assert!(sinks_for(LogDestination::File, unopenable).is_empty());
        assert_eq!(sinks_for(LogDestination::Both, unopenable).len(), 1);
        assert_eq!(sinks_for(LogDestination::Terminal, unopenable).len(), 1);
    }
}
