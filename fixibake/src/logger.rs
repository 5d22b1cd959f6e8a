// fixibake/src/logger.rs
//! Logging setup for the `fixibake` binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises `env_logger`, writing to stderr.
///
/// With `Some(level)` the level is forced for every crate. With `None`,
/// `RUST_LOG` decides and defaults to `warn`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

/// Picks the forced log level from the global flags.
///
/// `quiet` wins over `debug`; `disable_debug` caps the level at `info`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug && !disable_debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    }
}
