//! This file is the root of the `zcomp` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`backend`,
//!     `engine`, `workspace`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small facade surface the block-device layer consumes:
//!     an instance handle, its configuration, and the unified error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod backend;
pub mod config;
pub mod workspace;

mod engine;
mod error;

//==================================================================================
// 2. Public Facade
//==================================================================================
pub use backend::{ZcompBackend, NAME};
pub use config::ZcompConfig;
pub use error::ZcompError;

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Turns on human-readable logging for the backend's lifecycle and hot-path
/// trace lines. Intended for diagnostics from the embedding application;
/// the library itself never logs-and-swallows an error.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(log::LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        builder.parse_default_env();
        let _ = builder.try_init();
    });
}
