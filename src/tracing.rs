//! Tracing initialization.
//!
//! The library only emits events; binaries and test harnesses embedding it
//! call [`init`] (or [`init_with`]) to see them.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable that switches [`init`] to JSON lines.
pub const LOG_FORMAT_ENV: &str = "CATALOG_SEARCH_LOG_FORMAT";

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human-readable events.
    #[default]
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to [`LogFormat::Compact`].
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|name| Self::from_name(&name))
            .unwrap_or_default()
    }
}

fn running_under_test() -> bool {
    std::env::var_os("NEXTEST").is_some() || std::env::var_os("CARGO_TARGET_TMPDIR").is_some()
}

/// Filter used when `RUST_LOG` is unset: this crate's scoring summaries at
/// `debug` under a test runner, `info` otherwise, and only warnings from
/// everything else.
fn default_filter(under_test: bool) -> &'static str {
    if under_test {
        "warn,catalog_search=debug"
    } else {
        "warn,catalog_search=info"
    }
}

/// Install a subscriber in the format named by `CATALOG_SEARCH_LOG_FORMAT`.
/// Safe to call multiple times.
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Install a subscriber in the given format. Only the first call in a
/// process has any effect.
pub fn init_with(format: LogFormat) {
    INIT.call_once(|| {
        let under_test = running_under_test();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(under_test)));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let result = match (format, under_test) {
            (LogFormat::Json, true) => builder.json().with_test_writer().try_init(),
            (LogFormat::Json, false) => builder.json().with_writer(std::io::stderr).try_init(),
            (LogFormat::Compact, true) => builder
                .compact()
                .with_ansi(false)
                .with_test_writer()
                .try_init(),
            (LogFormat::Compact, false) => builder
                .compact()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if let Err(e) = result {
            eprintln!("Failed to install catalog-search subscriber: {}", e);
        }
    });
}
