//! Diagnostic logging
//!
//! Logs go to stderr so they never interleave with the prompt stream on stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "octordle_solver=debug"
    } else {
        "octordle_solver=warn"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `verbose` when set. Calling this twice is harmless; the
/// second subscriber is dropped.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directive(false), "octordle_solver=warn");
        assert_eq!(default_directive(true), "octordle_solver=debug");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
