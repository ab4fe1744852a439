//! Logging setup for the binaries

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` backend at `Info` level.
///
/// `RUST_LOG` overrides the defaults, e.g. `RUST_LOG=chainmap=trace` shows bucket selection
/// for every key. Calling this more than once is harmless.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chainmap", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests or an embedding program may have installed a logger already.
        let _ = builder.try_init();
    });
}
