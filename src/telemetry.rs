//! Tracing setup for the demo binaries.
//!
//! - `LOG_LEVEL` sets the filter (e.g. `"debug"` or
//!   `"info,aptitude_drill_gen::puzzle_engine=debug"`).
//! - `LOG_FORMAT=json` switches to structured JSON lines; anything else is
//!   the default human-readable format.
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever links it.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,aptitude_drill_gen=debug";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    // A second call (tests, embedding apps) keeps the first subscriber.
    let _ = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _          => builder.try_init(),
    };
}
