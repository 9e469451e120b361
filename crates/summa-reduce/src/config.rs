//! Configuration for reduction cogs.

use summa_poly::GeobucketConfig;

/// Tuning knobs shared by the reduction cogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CogConfig {
    /// Number of reduction steps between content removals in the flat
    /// fraction-free cog. Zero disables content removal.
    pub content_interval: usize,
    /// Bucket sizing for the geobucket cogs.
    pub geobucket: GeobucketConfig,
}

impl Default for CogConfig {
    fn default() -> Self {
        Self {
            content_interval: 50,
            geobucket: GeobucketConfig::default(),
        }
    }
}

impl CogConfig {
    /// Sets the content-removal interval.
    #[must_use]
    pub fn with_content_interval(mut self, interval: usize) -> Self {
        self.content_interval = interval;
        self
    }

    /// Sets the geobucket configuration.
    #[must_use]
    pub fn with_geobucket(mut self, geobucket: GeobucketConfig) -> Self {
        self.geobucket = geobucket;
        self
    }

    /// Returns true if content should be removed after `reductions` steps.
    #[must_use]
    pub fn content_due(&self, reductions: usize) -> bool {
        self.content_interval > 0 && reductions > 0 && reductions % self.content_interval == 0
    }
}
