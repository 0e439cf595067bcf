//! Configuration-time failures.
//!
//! A `SearchError` is only ever returned before a run starts. Problems met
//! while the driver is running (unreadable pages, malformed anchors) are
//! logged and counted on the outcome instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Strategy name is not one of breadth, depth, best, beam
    #[error("unknown search strategy '{name}', expected one of: breadth depth best beam")]
    InvalidStrategy { name: String },

    #[error("beam width must be a positive integer")]
    InvalidBeamWidth,

    #[error("goal pattern contains no tokens")]
    EmptyGoalPattern,

    #[error("start identity is empty")]
    EmptyStartIdentity,

    #[error("invalid identity filter pattern '{pattern}': {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
