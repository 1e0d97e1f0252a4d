//! Installs the `log` backend for the current target.
//!
//! Inside the browser records go to the devtools console through
//! `console_log`. Native builds (tests, tooling) use `env_logger`, which also
//! honors `RUST_LOG`.

use log::{Level, SetLoggerError};

/// Install the logger at `level`. Fails if another logger is already set.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    console_log::init_with_level(level)
}

/// Install the logger at `level`. Fails if another logger is already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
}
