//! Subscriber setup for the driver binary.
//!
//! `LOG_LEVEL` holds EnvFilter directives (default `info,strct=debug`).
//! `LOG_FORMAT=json` switches to JSON lines; anything else prints plain text.
//! Output goes to stderr so stdout only carries report lines.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info,strct=debug"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    // json() changes the builder type, so each arm finishes its own init.
    if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
