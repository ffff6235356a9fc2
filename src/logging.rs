/*
 * Logging Module
 *
 * Console logging through flexi_logger. The level comes from RUST_LOG and
 * defaults to info.
 */

use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

use crate::error::Result;

/// Start the logger. Keep the returned handle alive for as long as logs are wanted.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(compact_format)
        .start()?;

    log::info!("Adjust the log level by setting RUST_LOG. By default RUST_LOG=info");

    Ok(handle)
}

/// `LEVEL [HH:MM:SS.mmm] [file:line] message` on a single line.
pub fn compact_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        record.level(),
        now.now().format("%H:%M:%S%.3f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}
