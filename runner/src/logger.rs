//! Minimal `log` backend printing to stderr.

use log::{Level, Metadata, Record, SetLoggerError};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the logger, `verbose` lowers the threshold from info to debug.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose { Level::Debug } else { Level::Info };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level.to_level_filter()))
}

