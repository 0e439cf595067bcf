// Re-export modules
pub mod config;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod search;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{SearchConfig, SearchSettings};
pub use error::SearchError;
pub use results::{SearchOutcome, Termination};
pub use search::{SearchDriver, Strategy};
pub use store::{ContentStore, DirectoryStore, MemoryStore};

use filter::IdentityFilterConfig;
use std::path::Path;

/// Main builder for configuring and running a page search
#[derive(Debug, Clone, Default)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity of the page to start from
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.config.start = start.into();
        self
    }

    /// Set the strategy by name (breadth, depth, best, beam); checked when the search runs
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.config.strategy = strategy.into();
        self
    }

    /// Set the pops per cycle for the beam strategy
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.config.beam_width = beam_width;
        self
    }

    /// Set the goal pattern
    pub fn with_goal_pattern(mut self, goal_pattern: impl Into<String>) -> Self {
        self.config.goal_pattern = goal_pattern.into();
        self
    }

    /// Set the identity filter rules
    pub fn with_filter(mut self, filter: IdentityFilterConfig) -> Self {
        self.config.filter = filter;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let config = SearchConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, SearchError> {
        let config = SearchConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Validate the configuration and run one search against `store`
    pub fn run<S: ContentStore>(&self, store: S) -> Result<SearchOutcome, SearchError> {
        let settings = SearchSettings::from_config(&self.config)?;
        Ok(SearchDriver::new(store, &settings).run())
    }
}

/// Run one search with default beam width and no identity filter
pub fn run_search<S: ContentStore>(
    store: S,
    start: &str,
    strategy: &str,
    goal_pattern: &str,
) -> Result<SearchOutcome, SearchError> {
    Search::new()
        .with_start(start)
        .with_strategy(strategy)
        .with_goal_pattern(goal_pattern)
        .run(store)
}
