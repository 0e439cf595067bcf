use serde::Serialize;

use crate::search::frontier::Strategy;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    GoalFound,
    Exhausted,
}

/// Report of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub found: bool,

    /// Identities from the goal back to the start (empty when not found)
    pub path: Vec<String>,

    /// Nodes popped and expanded; the goal node itself is not counted
    pub nodes_visited: usize,

    pub termination: Termination,
    pub strategy: Strategy,

    /// Every popped identity in pop order, including the goal
    pub trace: Vec<String>,

    /// Outer driver cycles
    pub cycles: usize,

    /// Malformed-anchor diagnostics raised while scanning pages
    pub diagnostics: usize,

    /// Pages whose contents could not be fetched
    pub unavailable: usize,
}

impl SearchOutcome {
    /// Number of identities on the solution path
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Solution path joined with dashes, e.g. `page3.html-page2.html-page1.html`
    pub fn path_line(&self) -> String {
        self.path.join("-")
    }

    /// One-line run summary for the console
    pub fn summary(&self, location: &str) -> String {
        format!(
            " Visited {} nodes, starting @ {}, using: {} search.",
            self.nodes_visited, location, self.strategy
        )
    }
}
