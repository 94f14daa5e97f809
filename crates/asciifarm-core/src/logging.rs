//! Diagnostic logging for the asciifarm client.
//!
//! The client's stdout carries the resolved configuration report (and later
//! the game screen), so diagnostics always go to stderr. Verbosity comes from
//! `ASCIIFARM_LOG`; the default is `warn`, which keeps a normal run silent
//! unless a settings file or source had to be skipped.

use std::sync::OnceLock;
use tracing::Level;

static INIT: OnceLock<()> = OnceLock::new();

/// Level named by an `ASCIIFARM_LOG` value; unknown or missing means `warn`.
fn parse_level(value: Option<&str>) -> Level {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the stderr subscriber. Only the first call has any effect.
pub fn init() {
    INIT.get_or_init(|| {
        let level = parse_level(std::env::var("ASCIIFARM_LOG").ok().as_deref());
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
