use log::LevelFilter;

/// Initialize logging for crossfill.
///
/// # Behavior
/// - Logs at `Info` level, or `Debug` when `debug_enabled` is true.
/// - `RUST_LOG` overrides these defaults when set (e.g. `RUST_LOG=crossfill=trace`
///   to see every dead end of the search).
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialization (e.g. from tests) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
