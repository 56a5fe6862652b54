//! Logger setup for the server binary.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger.
///
/// Lines look like `2024-05-01 12:00:00 - INFO - message`. `RUST_LOG`, when
/// set, takes precedence over `level`. Calling this twice is harmless; the
/// second call is ignored.
pub fn init_logging(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
