//! Search configuration shared by every engine.

use jamboree_core::Depth;

use crate::error::ConfigError;

/// Sequential engine used below the parallel cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequentialFallback {
    /// Alpha-beta negamax with move ranking.
    #[default]
    AlphaBeta,
    /// Plain minimax, ignoring the window.
    Minimax,
}

/// Tunables for the search engines.
///
/// The sequential engines only read `depth`; the parallel engines use
/// every field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Depth used by [`Searcher::search_default`](crate::Searcher::search_default).
    pub depth: Depth,
    /// At or below this remaining depth a task searches sequentially.
    pub sequential_cutoff: Depth,
    /// Ranges at most this wide fan out one task per move instead of
    /// splitting in half.
    pub divide_cutoff: usize,
    /// Share of the ranked moves the hybrid engine searches sequentially
    /// before forking the rest.
    pub sequential_fraction: f64,
    /// Worker threads; `0` lets rayon pick one per logical CPU.
    pub threads: usize,
    /// Engine used below `sequential_cutoff`.
    pub fallback: SequentialFallback,
}

impl SearchConfig {
    /// Set the default search depth.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the depth at or below which tasks stop forking.
    pub fn with_sequential_cutoff(mut self, cutoff: Depth) -> Self {
        self.sequential_cutoff = cutoff;
        self
    }

    /// Set the widest range that fans out instead of dividing.
    pub fn with_divide_cutoff(mut self, cutoff: usize) -> Self {
        self.divide_cutoff = cutoff;
        self
    }

    /// Set the sequential share of each node for the hybrid engine.
    pub fn with_sequential_fraction(mut self, fraction: f64) -> Self {
        self.sequential_fraction = fraction;
        self
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the sequential engine used below the cutoff.
    pub fn with_fallback(mut self, fallback: SequentialFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Check that the parallel engines can run with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divide_cutoff == 0 {
            return Err(ConfigError::ZeroDivideCutoff);
        }
        if !(0.0..=1.0).contains(&self.sequential_fraction) {
            return Err(ConfigError::InvalidFraction {
                value: self.sequential_fraction,
            });
        }
        Ok(())
    }

    /// Number of leading moves the hybrid engine searches sequentially.
    pub(crate) fn principal_split(&self, moves: usize) -> usize {
        ((self.sequential_fraction * moves as f64) as usize).min(moves)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            sequential_cutoff: 2,
            divide_cutoff: 3,
            sequential_fraction: 0.5,
            threads: 0,
            fallback: SequentialFallback::AlphaBeta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn builder_sets_fields() {
        let config = SearchConfig::default()
            .with_depth(7)
            .with_sequential_cutoff(1)
            .with_divide_cutoff(4)
            .with_sequential_fraction(0.25)
            .with_threads(3)
            .with_fallback(SequentialFallback::Minimax);

        assert_eq!(config.depth, 7);
        assert_eq!(config.sequential_cutoff, 1);
        assert_eq!(config.divide_cutoff, 4);
        assert_eq!(config.sequential_fraction, 0.25);
        assert_eq!(config.threads, 3);
        assert_eq!(config.fallback, SequentialFallback::Minimax);
    }

    #[test]
    fn rejects_zero_divide_cutoff() {
        let config = SearchConfig::default().with_divide_cutoff(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDivideCutoff));
    }

    #[test]
    fn rejects_fraction_out_of_range() {
        for value in [-0.1, 1.01, f64::NAN] {
            let config = SearchConfig::default().with_sequential_fraction(value);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFraction { .. })),
                "fraction {value} should be rejected"
            );
        }
    }

    #[test]
    fn principal_split_floors() {
        let config = SearchConfig::default();
        assert_eq!(config.principal_split(0), 0);
        assert_eq!(config.principal_split(1), 0);
        assert_eq!(config.principal_split(5), 2);
        assert_eq!(config.principal_split(8), 4);
        let all = config.with_sequential_fraction(1.0);
        assert_eq!(all.principal_split(7), 7);
    }
}
