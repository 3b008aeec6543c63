use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

/// Start console logging. `RUST_LOG` overrides the default `info` level.
///
/// The returned handle must stay alive for as long as logging is wanted.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(line_format)
        .start()?;

    log::debug!("Adjust the log level by setting RUST_LOG. By default RUST_LOG=info");

    Ok(handle)
}

/// One line per record: level, wall clock time and source location
pub fn line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{:<5} [{}] [{}:{}] {}",
        record.level(),
        now.now().format("%H:%M:%S%.3f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args(),
    )
}
