//! Tracing subscriber setup for the command-line binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the executable.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "smart_route=info",
        1 => "smart_route=debug",
        _ => "smart_route=trace",
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`default_directive`].
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "smart_route=info");
        assert_eq!(default_directive(1), "smart_route=debug");
        assert_eq!(default_directive(4), "smart_route=trace");
    }
}
