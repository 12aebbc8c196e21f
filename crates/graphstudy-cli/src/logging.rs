//! Diagnostic output on standard error.
//!
//! Filtering follows `RUST_LOG` when it is set. Otherwise only warnings are shown, and
//! every `-v` on the command line lowers the threshold by one level.

use std::{io, sync::Once};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

static INIT: Once = Once::new();

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub(crate) fn init(verbosity: u8, json: bool) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
        let registry = tracing_subscriber::registry().with(env_filter);
        if json {
            registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        } else {
            registry
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }
}
