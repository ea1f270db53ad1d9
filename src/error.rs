//! Error handling types and utilities.
//!
//! Ranking itself never fails: degenerate input produces empty results.
//! Only loading configuration and catalog snapshots can go wrong.

/// A specialized Result type for catalog-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the loading boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when an engine configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a configuration.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A weight is negative, NaN or infinite.
    #[error("weight '{name}' must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    /// The did-you-mean threshold lies outside `[0, 1]`.
    #[error("did_you_mean_threshold must be within [0, 1] (got {0})")]
    InvalidThreshold(f64),
}
