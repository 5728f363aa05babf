use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use held_karp_core::{Error, Result};
use log::Level;

use crate::CliOptions;

/// Compact `LEVEL message` lines on stderr, so stdout carries only the report.
pub fn init_logger(options: &CliOptions) -> Result<()> {
    let log_timestamp = options.log_timestamp;

    Builder::new()
        .filter_level(options.log_level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .try_init()
        .map_err(|e| Error::invalid_config(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
