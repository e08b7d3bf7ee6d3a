//! Minimal stderr backend for the `log` facade.
//!
//! Level selection: `-v`/`-vv` on the command line, otherwise the
//! `PROFILER_LOG` environment variable (`error`, `warn`, `info`, `debug`,
//! `trace`, `off`), otherwise `warn`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

pub const ENV_VAR: &str = "PROFILER_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Level requested by `-v` flags, falling back to the environment
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => std::env::var(ENV_VAR)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) {
    // Only fails if a logger is already installed, which keeps the old one
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
