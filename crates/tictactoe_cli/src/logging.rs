//! Tracing setup for the binary.
//!
//! The subscriber is installed before the config is read so config loading
//! is itself logged. Once the config is known its `log_filter` replaces the
//! startup filter, unless `RUST_LOG` already picked one.

use tracing::{debug, instrument, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor the config gives a usable one.
pub const DEFAULT_FILTER: &str = "warn";

/// Chooses filter directives: a usable `RUST_LOG`, then `configured`, then
/// [`DEFAULT_FILTER`].
pub fn effective_filter(rust_log: Option<&str>, configured: &str) -> String {
    rust_log
        .filter(|directives| is_usable(directives))
        .or(Some(configured).filter(|directives| is_usable(directives)))
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

fn is_usable(directives: &str) -> bool {
    !directives.trim().is_empty() && EnvFilter::try_new(directives).is_ok()
}

/// Swaps the live filter once the config has been read.
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    rust_log: Option<String>,
}

impl LogFilter {
    /// Installs the global subscriber, writing to stderr so stdout carries
    /// only the game.
    pub fn install() -> Self {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let startup = effective_filter(rust_log.as_deref(), DEFAULT_FILTER);
        let (filter, handle) = reload::Layer::new(EnvFilter::new(startup));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();

        Self { handle, rust_log }
    }

    /// Applies the configured filter unless `RUST_LOG` takes precedence.
    #[instrument(skip(self))]
    pub fn apply_config(&self, configured: &str) -> Result<(), reload::Error> {
        if !is_usable(configured) {
            warn!(configured, "Ignoring unusable log filter from config");
        }
        let directives = effective_filter(self.rust_log.as_deref(), configured);
        debug!(%directives, "Applying log filter");
        self.handle.reload(EnvFilter::new(directives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_over_config() {
        assert_eq!(effective_filter(Some("trace"), "debug"), "trace");
    }

    #[test]
    fn test_config_used_without_rust_log() {
        assert_eq!(effective_filter(None, "tictactoe_cli=debug"), "tictactoe_cli=debug");
        assert_eq!(effective_filter(Some("  "), "info"), "info");
    }

    #[test]
    fn test_unusable_filters_fall_back() {
        assert_eq!(effective_filter(Some("tictactoe=loud"), "info"), "info");
        assert_eq!(effective_filter(None, "tictactoe=loud"), DEFAULT_FILTER);
        assert_eq!(effective_filter(None, ""), DEFAULT_FILTER);
    }
}
