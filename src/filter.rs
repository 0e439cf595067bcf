use crate::error::SearchError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for filtering discovered page identities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFilterConfig {
    /// Regex patterns for identities to include (if empty, all identities are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for identities to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Identity filter that decides which discovered links may become successors
#[derive(Debug, Default)]
pub struct IdentityFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl IdentityFilter {
    /// Compile a filter from configuration
    pub fn new(config: &IdentityFilterConfig) -> Result<Self, SearchError> {
        Ok(Self {
            include_regexes: compile(&config.include_patterns)?,
            exclude_regexes: compile(&config.exclude_patterns)?,
        })
    }

    /// Determine if an identity may be added to the frontier
    pub fn admits(&self, identity: &str) -> bool {
        // Exclusions take precedence
        if self.exclude_regexes.iter().any(|r| r.is_match(identity)) {
            return false;
        }

        self.include_regexes.is_empty() || self.include_regexes.iter().any(|r| r.is_match(identity))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>, SearchError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| SearchError::InvalidFilterPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_admits_everything() {
        let filter = IdentityFilter::default();
        assert!(filter.admits("page1.html"));
        assert!(filter.admits("index.txt"));
    }

    #[test]
    fn test_regex_patterns() {
        let config = IdentityFilterConfig {
            include_patterns: vec![r"^page\d+\.html$".to_string()],
            exclude_patterns: vec![r"^page9".to_string()],
        };
        let filter = IdentityFilter::new(&config).unwrap();

        // Matching include pattern should be allowed
        assert!(filter.admits("page2.html"));

        // Non-matching include pattern should be excluded
        assert!(!filter.admits("about.html"));

        // Matching exclude pattern should be excluded even if it matches include
        assert!(!filter.admits("page9.html"));
        assert!(!filter.admits("page90.html"));
    }

    #[test]
    fn test_exclude_only() {
        let config = IdentityFilterConfig {
            include_patterns: vec![],
            exclude_patterns: vec![r"(?i)\.txt$".to_string()],
        };
        let filter = IdentityFilter::new(&config).unwrap();
        assert!(filter.admits("page3.html"));
        assert!(!filter.admits("notes.TXT"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let config = IdentityFilterConfig {
            include_patterns: vec!["page(".to_string()],
            exclude_patterns: vec![],
        };
        match IdentityFilter::new(&config) {
            Err(SearchError::InvalidFilterPattern { pattern, .. }) => assert_eq!(pattern, "page("),
            other => panic!("expected InvalidFilterPattern, got {:?}", other),
        }
    }
}
