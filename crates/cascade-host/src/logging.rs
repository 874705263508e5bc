//! Logging initialization for embedders
//!
//! The engine logs through `tracing`; embedders that do not install their
//! own subscriber can call [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber
///
/// `filter` is an `EnvFilter` directive such as `"info"` or
/// `"cascade_completion=debug"`; the `RUST_LOG` environment variable takes
/// precedence when set. Calling this twice is a no-op: the second install
/// attempt fails quietly rather than panicking inside a host process.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("info");
        init_logging("debug");
    }
}
