//! Logging utilities
//!
//! The crate logs through the `log` facade. Applications that do not install
//! their own logger can call [`init`] to get `env_logger` output controlled by
//! `RUST_LOG`.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Panics if a global logger has already been installed.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring an already installed logger
///
/// Returns `true` if this call installed the logger.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}
