//! Line-oriented logging to stderr using env_logger
//!
//! Defaults to `info`; set `RUST_LOG=debug` to see every discard decision.

use env_logger::{Builder, Env};

/// Initialize the global logger
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}
