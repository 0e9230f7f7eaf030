//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with report
//! output on stdout. Domain events are recorded separately in the audit log.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, from the number of `-v` flags
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`.
/// Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "debug");
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
