//! Pending-node collection and the per-strategy insertion rules.
//!
//! All strategies pop from the head. They differ only in where `insert`
//! places a new node:
//!
//! - depth: at the head (stack order)
//! - breadth, best: before the first entry whose score is strictly greater
//!   than the newcomer's, else at the tail
//! - beam: at the tail (FIFO); throttling happens in the driver
//!
//! Breadth and best share one rule, so an uninformed breadth run is ordered
//! by the heuristic exactly like best-first.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SearchError;
use crate::search::heuristic::{self, GoalPattern};
use crate::search::node::{NodeArena, NodeId};
use crate::utils::identity_key;

/// Search strategy, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Breadth,
    Depth,
    Best,
    Beam,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Breadth,
        Strategy::Depth,
        Strategy::Best,
        Strategy::Beam,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Breadth => "breadth",
            Strategy::Depth => "depth",
            Strategy::Best => "best",
            Strategy::Beam => "beam",
        }
    }

    /// Place `id` into `entries` according to this strategy
    fn insert(
        self,
        entries: &mut VecDeque<NodeId>,
        id: NodeId,
        nodes: &mut NodeArena,
        goal: &GoalPattern,
    ) {
        match self {
            Strategy::Depth => entries.push_front(id),
            Strategy::Beam => entries.push_back(id),
            Strategy::Breadth | Strategy::Best => insert_by_score(entries, id, nodes, goal),
        }
    }
}

/// Insert before the first entry scoring strictly higher than the newcomer.
///
/// Scores accumulate, so every entry walked past is rescored (and grows)
/// as a side effect, just as the newcomer is.
fn insert_by_score(
    entries: &mut VecDeque<NodeId>,
    id: NodeId,
    nodes: &mut NodeArena,
    goal: &GoalPattern,
) {
    let candidate = heuristic::score(nodes.get_mut(id), goal);
    for position in 0..entries.len() {
        let existing = heuristic::score(nodes.get_mut(entries[position]), goal);
        if existing > candidate {
            entries.insert(position, id);
            return;
        }
    }
    entries.push_back(id);
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SearchError::InvalidStrategy {
                name: s.to_string(),
            })
    }
}

/// Ordered collection of discovered, not yet expanded nodes
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    entries: VecDeque<NodeId>,
    high_water: usize,
}

impl Frontier {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            entries: VecDeque::new(),
            high_water: 0,
        }
    }

    /// Place a node according to the active strategy.
    ///
    /// Duplicate checks are the caller's job; see [`Frontier::contains`].
    pub fn insert(&mut self, id: NodeId, nodes: &mut NodeArena, goal: &GoalPattern) {
        self.strategy.insert(&mut self.entries, id, nodes, goal);
        self.high_water = self.high_water.max(self.entries.len());
    }

    /// Remove and return the head
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front()
    }

    /// Linear, case-insensitive scan for a pending node with this identity
    pub fn contains(&self, identity: &str, nodes: &NodeArena) -> bool {
        let key = identity_key(identity);
        self.entries
            .iter()
            .any(|id| nodes.get(*id).identity.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest size the frontier reached
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Pending node ids from head to tail
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::node::PageId;

    fn goal() -> GoalPattern {
        GoalPattern::new("QUERY1 QUERY2 QUERY3 QUERY4").unwrap()
    }

    struct Fixture {
        nodes: NodeArena,
        root: NodeId,
        frontier: Frontier,
        goal: GoalPattern,
    }

    impl Fixture {
        fn new(strategy: Strategy) -> Self {
            let mut nodes = NodeArena::new();
            let root = nodes.add_root(PageId::new("page1.html"));
            Self {
                nodes,
                root,
                frontier: Frontier::new(strategy),
                goal: goal(),
            }
        }

        fn insert(&mut self, identity: &str, anchor_text: &str) -> NodeId {
            let id = self
                .nodes
                .add_child(self.root, PageId::new(identity), anchor_text.to_string());
            self.frontier.insert(id, &mut self.nodes, &self.goal);
            id
        }

        fn pop_identity(&mut self) -> Option<String> {
            self.frontier
                .pop()
                .map(|id| self.nodes.get(id).identity.as_str().to_string())
        }
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("breadth".parse::<Strategy>().unwrap(), Strategy::Breadth);
        assert_eq!("DEPTH".parse::<Strategy>().unwrap(), Strategy::Depth);
        assert_eq!("Best".parse::<Strategy>().unwrap(), Strategy::Best);
        assert_eq!(" beam ".parse::<Strategy>().unwrap(), Strategy::Beam);
        assert!(matches!(
            "sideways".parse::<Strategy>(),
            Err(SearchError::InvalidStrategy { name }) if name == "sideways"
        ));
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Beam.to_string(), "BEAM");
        assert_eq!(Strategy::Breadth.name(), "breadth");
    }

    #[test]
    fn test_depth_is_stack_order() {
        let mut f = Fixture::new(Strategy::Depth);
        f.insert("pageA.html", "");
        f.insert("pageB.html", "");
        assert_eq!(f.pop_identity().as_deref(), Some("pageB.html"));
        assert_eq!(f.pop_identity().as_deref(), Some("pageA.html"));
        assert_eq!(f.pop_identity(), None);
    }

    #[test]
    fn test_beam_is_fifo_regardless_of_score() {
        let mut f = Fixture::new(Strategy::Beam);
        f.insert("page2.html", "QUERY1 QUERY2 QUERY3");
        f.insert("page3.html", "");
        f.insert("page4.html", "QUERY1");
        assert_eq!(f.pop_identity().as_deref(), Some("page2.html"));
        assert_eq!(f.pop_identity().as_deref(), Some("page3.html"));
        assert_eq!(f.pop_identity().as_deref(), Some("page4.html"));
    }

    #[test]
    fn test_beam_does_not_score() {
        let mut f = Fixture::new(Strategy::Beam);
        let id = f.insert("page2.html", "QUERY1");
        assert_eq!(f.nodes.get(id).score, 0);
    }

    #[test]
    fn test_best_pops_lowest_score_first() {
        let mut f = Fixture::new(Strategy::Best);
        f.insert("page2.html", "QUERY1 QUERY2");
        f.insert("page3.html", "");
        f.insert("page4.html", "QUERY1");
        assert_eq!(f.pop_identity().as_deref(), Some("page3.html"));
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        for strategy in [Strategy::Breadth, Strategy::Best] {
            let mut f = Fixture::new(strategy);
            f.insert("page2.html", "");
            f.insert("page3.html", "");
            f.insert("page4.html", "");
            assert_eq!(f.pop_identity().as_deref(), Some("page2.html"));
            assert_eq!(f.pop_identity().as_deref(), Some("page3.html"));
            assert_eq!(f.pop_identity().as_deref(), Some("page4.html"));
        }
    }

    #[test]
    fn test_breadth_orders_like_best() {
        let order = |strategy| {
            let mut f = Fixture::new(strategy);
            f.insert("page2.html", "QUERY1 QUERY2");
            f.insert("page3.html", "");
            f.insert("page4.html", "QUERY3");
            let mut popped = Vec::new();
            while let Some(identity) = f.pop_identity() {
                popped.push(identity);
            }
            popped
        };
        assert_eq!(order(Strategy::Breadth), order(Strategy::Best));
    }

    #[test]
    fn test_walked_entries_are_rescored() {
        let mut f = Fixture::new(Strategy::Best);
        let first = f.insert("page2.html", "QUERY1");
        assert_eq!(f.nodes.get(first).score, 1);

        // Newcomer scores 2; the walk rescores page2 to 2, not greater, so page3 goes last
        let second = f.insert("page3.html", "QUERY1 QUERY2");
        assert_eq!(f.nodes.get(first).score, 2);
        assert_eq!(f.nodes.get(second).score, 2);
        let order: Vec<NodeId> = f.frontier.iter().collect();
        assert_eq!(order, vec![first, second]);

        // Newcomer scores 0; page2 rescored to 3 > 0, so page4 goes first and nothing else is walked
        let third = f.insert("page4.html", "");
        assert_eq!(f.nodes.get(first).score, 3);
        assert_eq!(f.nodes.get(second).score, 2);
        let order: Vec<NodeId> = f.frontier.iter().collect();
        assert_eq!(order, vec![third, first, second]);
    }

    #[test]
    fn test_sorted_ascending_after_each_insertion() {
        let mut f = Fixture::new(Strategy::Best);
        for (identity, anchor) in [
            ("page2.html", ""),
            ("page3.html", "QUERY1 QUERY2 QUERY3"),
            ("page4.html", ""),
            ("page5.html", "QUERY4"),
        ] {
            f.insert(identity, anchor);
            let scores: Vec<u64> = f.frontier.iter().map(|id| f.nodes.get(id).score).collect();
            assert!(
                scores.windows(2).all(|w| w[0] <= w[1]),
                "frontier scores not ascending: {:?}",
                scores
            );
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let mut f = Fixture::new(Strategy::Beam);
        f.insert("Page2.html", "");
        assert!(f.frontier.contains("page2.HTML", &f.nodes));
        assert!(!f.frontier.contains("page3.html", &f.nodes));
    }

    #[test]
    fn test_high_water() {
        let mut f = Fixture::new(Strategy::Depth);
        f.insert("page2.html", "");
        f.insert("page3.html", "");
        let _ = f.frontier.pop();
        f.insert("page4.html", "");
        assert_eq!(f.frontier.len(), 2);
        assert_eq!(f.frontier.high_water(), 2);
        assert!(!f.frontier.is_empty());
    }
}
