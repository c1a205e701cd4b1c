//! Diagnostic logging to stderr.
//!
//! Quiet by default so that only prompts and the report reach the terminal.
//! Each `-v` raises the level one step; `RUST_LOG` overrides it:
//!
//! ```bash
//! RUST_LOG=booty=debug booty
//! ```

use std::io;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Maps a `-v` count to a log level, starting from `warn`.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the stderr subscriber. Only the first call takes effect.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::default().add_directive(LevelFilter::from_level(level_for(verbosity)).into())
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    });
}
