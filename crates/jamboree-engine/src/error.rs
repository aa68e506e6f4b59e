//! Engine construction errors.

/// A [`SearchConfig`](crate::SearchConfig) that no engine can run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Ranges would never shrink below the fan-out width.
    #[error("divide cutoff must be at least 1")]
    ZeroDivideCutoff,

    /// The principal portion must be a fraction of the move list.
    #[error("sequential fraction {value} is outside [0, 1]")]
    InvalidFraction {
        /// The rejected fraction.
        value: f64,
    },
}

/// Errors raised while constructing a searcher.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The configuration failed validation.
    #[error("invalid search configuration: {source}")]
    Config {
        /// The validation failure.
        #[from]
        source: ConfigError,
    },

    /// The worker pool could not be started.
    #[error("failed to build search pool: {source}")]
    PoolBuild {
        /// The underlying rayon error.
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
}
