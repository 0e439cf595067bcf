use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SearchError;
use crate::filter::{IdentityFilter, IdentityFilterConfig};
use crate::search::frontier::Strategy;
use crate::search::heuristic::GoalPattern;
use crate::search::node::PageId;

/// Search configuration as written in a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Identity of the page to start from
    #[serde(default = "default_start")]
    pub start: String,

    /// One of breadth, depth, best, beam (case-insensitive)
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// Pops per driver cycle under the beam strategy
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,

    /// Space-delimited tokens a goal page must contain, in order
    #[serde(default = "default_goal_pattern")]
    pub goal_pattern: String,

    /// Rules for which discovered identities may be searched
    #[serde(default)]
    pub filter: IdentityFilterConfig,
}

/// Default value for start
fn default_start() -> String {
    "page1.html".to_string()
}

/// Default value for strategy
fn default_strategy() -> String {
    Strategy::Breadth.name().to_string()
}

/// Default value for beam_width
fn default_beam_width() -> usize {
    2
}

/// Default value for goal_pattern
fn default_goal_pattern() -> String {
    "QUERY1 QUERY2 QUERY3 QUERY4".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            strategy: default_strategy(),
            beam_width: default_beam_width(),
            goal_pattern: default_goal_pattern(),
            filter: IdentityFilterConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SearchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, read-only settings for a single run
#[derive(Debug)]
pub struct SearchSettings {
    pub start: PageId,
    pub strategy: Strategy,
    pub beam_width: usize,
    pub goal: GoalPattern,
    pub filter: IdentityFilter,
}

impl SearchSettings {
    /// Check every field of `config`; nothing about a run exists until this succeeds
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let strategy: Strategy = config.strategy.parse()?;

        if config.beam_width == 0 {
            return Err(SearchError::InvalidBeamWidth);
        }

        let start = config.start.trim();
        if start.is_empty() {
            return Err(SearchError::EmptyStartIdentity);
        }

        Ok(Self {
            start: PageId::new(start),
            strategy,
            beam_width: config.beam_width,
            goal: GoalPattern::new(&config.goal_pattern)?,
            filter: IdentityFilter::new(&config.filter)?,
        })
    }

    /// Nodes the driver pops before re-checking for termination
    pub fn pops_per_cycle(&self) -> usize {
        match self.strategy {
            Strategy::Beam => self.beam_width,
            _ => 1,
        }
    }
}
