//! Log setup for the Mohr front ends.
//!
//! The core only emits `tracing` events. A binary turns them into output by
//! calling [`init_tracing`] with its own default level: the GUI reports at
//! `info`, the CLI stays at `warn` so its report is not interleaved with logs.
//! `MOHR_LOG` overrides the default, then `RUST_LOG`. Output always goes to
//! stderr, which keeps `mohr_cli --json` parseable.

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "MOHR_LOG";

/// Default filter for the GUI
pub const GUI_DEFAULT_FILTER: &str = "info";

/// Default filter for the CLI
pub const CLI_DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive: `MOHR_LOG`, then `RUST_LOG`, then the default.
/// Blank variables count as unset.
pub fn filter_directive(mohr_log: Option<String>, rust_log: Option<String>, default: &str) -> String {
    [mohr_log, rust_log]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Install the stderr subscriber for a front end.
///
/// Returns `false` without the `telemetry` feature, or when a subscriber is
/// already installed or the directive does not parse.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let directive = filter_directive(
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
            default_filter,
        );
        let Ok(filter) = EnvFilter::try_new(&directive) else {
            return false;
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(filter_directive(None, None, CLI_DEFAULT_FILTER), "warn");
    }

    #[test]
    fn test_mohr_log_wins() {
        let directive = filter_directive(Some("mohr_core=trace".into()), Some("debug".into()), GUI_DEFAULT_FILTER);
        assert_eq!(directive, "mohr_core=trace");
    }

    #[test]
    fn test_blank_falls_through() {
        assert_eq!(filter_directive(Some("  ".into()), Some("debug".into()), "info"), "debug");
        assert_eq!(filter_directive(Some(String::new()), None, "info"), "info");
    }
}
