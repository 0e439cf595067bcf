//! Goal pattern matching and heuristic scoring.
//!
//! Scoring is cumulative: every call to [`score`] adds to the node's stored
//! score instead of recomputing it. The frontier rescores entries each time
//! it walks them during an insertion, so entries that sit near the head for
//! a long time grow faster than entries near the tail. Ordering under the
//! informed strategies depends on this, so it must not be normalised.

use crate::error::SearchError;
use crate::search::node::SearchNode;

/// Space-delimited literal tokens a goal page must contain, in order.
///
/// Only the space character separates tokens. Runs of spaces collapse to
/// one, but tabs and newlines stay inside the token they appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalPattern {
    tokens: Vec<String>,
    joined: String,
}

impl GoalPattern {
    pub fn new(pattern: &str) -> Result<Self, SearchError> {
        let tokens: Vec<String> = pattern
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            return Err(SearchError::EmptyGoalPattern);
        }
        let joined = tokens.join(" ");
        Ok(Self { tokens, joined })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The tokens joined by single spaces
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Goal test: the full joined pattern appears literally in `contents`
    pub fn is_satisfied_by(&self, contents: &str) -> bool {
        contents.contains(&self.joined)
    }
}

/// Add this call's relevance of `node` to `goal` onto `node.score` and return the new total.
///
/// For each goal token found in the contents: +1, plus +1 for every longer
/// run of consecutive tokens starting at it that is also found. For each
/// goal token found in the anchor text: +1. Contents terms are skipped while
/// the node has not been fetched.
pub fn score(node: &mut SearchNode, goal: &GoalPattern) -> u64 {
    let increment = contents_terms(node.contents(), goal) + anchor_terms(&node.anchor_text, goal);
    node.score = node.score.saturating_add(increment);
    node.score
}

fn contents_terms(contents: Option<&str>, goal: &GoalPattern) -> u64 {
    let Some(contents) = contents else {
        return 0;
    };

    let tokens = goal.tokens();
    let mut total = 0;
    for (i, token) in tokens.iter().enumerate() {
        if !contents.contains(token.as_str()) {
            continue;
        }
        total += 1;

        let mut sequence = token.clone();
        for next in &tokens[i + 1..] {
            sequence.push(' ');
            sequence.push_str(next);
            if contents.contains(sequence.as_str()) {
                total += 1;
            }
        }
    }
    total
}

fn anchor_terms(anchor_text: &str, goal: &GoalPattern) -> u64 {
    goal.tokens()
        .iter()
        .filter(|token| anchor_text.contains(token.as_str()))
        .count() as u64
}
