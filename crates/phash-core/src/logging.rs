use env_logger::{Builder, Env};

/// Initialize the logger with timestamp, log level, and module path.
///
/// The filter is read from the `PHASH_LOG` environment variable and
/// defaults to `info`. Safe to call more than once; repeated calls are
/// no-ops.
pub fn init_logger() {
    let env = Env::new().filter_or("PHASH_LOG", "info");
    let _ = Builder::from_env(env).format_timestamp_secs().try_init();
}
