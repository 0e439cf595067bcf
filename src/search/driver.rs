use crate::config::SearchSettings;
use crate::parsers::{self, LinkCandidate};
use crate::results::{SearchOutcome, Termination};
use crate::search::frontier::Frontier;
use crate::search::node::{NodeArena, NodeId, PageId};
use crate::search::visited::VisitedSet;
use crate::store::ContentStore;

/// Where a run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    GoalFound(NodeId),
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// Why a discovered link did not become a successor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    InFrontier,
    Visited,
    Filtered,
}

/// Owns all state of one run: node arena, frontier, visited set and counters.
///
/// Created per run from validated settings; nothing is shared between runs.
pub struct SearchDriver<'a, S: ContentStore> {
    store: S,
    settings: &'a SearchSettings,
    nodes: NodeArena,
    frontier: Frontier,
    visited: VisitedSet,
    state: SearchState,
    nodes_visited: usize,
    cycles: usize,
    trace: Vec<String>,
    diagnostics: usize,
    unavailable: usize,
}

impl<'a, S: ContentStore> SearchDriver<'a, S> {
    /// Prepare a run whose frontier holds only the start node
    pub fn new(store: S, settings: &'a SearchSettings) -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.add_root(settings.start.clone());
        let mut frontier = Frontier::new(settings.strategy);
        frontier.insert(root, &mut nodes, &settings.goal);

        Self {
            store,
            settings,
            nodes,
            frontier,
            visited: VisitedSet::new(),
            state: SearchState::Running,
            nodes_visited: 0,
            cycles: 0,
            trace: Vec::new(),
            diagnostics: 0,
            unavailable: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Identities popped so far, in order
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Pop one node, goal-test it and expand it.
    ///
    /// Once the run is terminal this returns the terminal state and does nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(current) = self.frontier.pop() else {
            ::log::info!("Frontier is empty, search exhausted");
            self.state = SearchState::Exhausted;
            return self.state;
        };

        self.state = self.visit_node(current);
        self.state
    }

    /// Run until the goal is found or the frontier is empty.
    ///
    /// Each cycle pops one node, or up to the beam width under the beam
    /// strategy, before termination is checked again.
    pub fn run(mut self) -> SearchOutcome {
        ::log::info!(
            "Starting {} search at {} for \"{}\"",
            self.settings.strategy,
            self.settings.start,
            self.settings.goal.as_str()
        );

        let pops_per_cycle = self.settings.pops_per_cycle();
        while !self.state.is_terminal() {
            self.cycles += 1;
            for _ in 0..pops_per_cycle {
                if self.step().is_terminal() {
                    break;
                }
            }
            ::log::info!(
                "Nodes visited = {} |frontier| = {}",
                self.nodes_visited,
                self.frontier.len()
            );
        }

        self.into_outcome()
    }

    fn visit_node(&mut self, current: NodeId) -> SearchState {
        let identity = self.nodes.get(current).identity.clone();
        ::log::debug!("Visiting {}", identity);
        self.trace.push(identity.as_str().to_string());

        let contents = self.store.fetch(identity.as_str());
        if contents.is_none() {
            ::log::warn!("Contents of {} unavailable, treating as a dead end", identity);
            self.unavailable += 1;
        }

        if let Some(text) = &contents {
            if self.settings.goal.is_satisfied_by(text) {
                ::log::info!("Goal found at {}", identity);
                return SearchState::GoalFound(current);
            }
        }

        self.nodes.get_mut(current).contents = contents;
        self.visited.insert(identity.clone());
        self.nodes_visited += 1;

        let scan = match self.nodes.get(current).contents() {
            Some(text) => parsers::extract_links(text),
            None => return SearchState::Running,
        };
        for diagnostic in &scan.diagnostics {
            ::log::warn!("Malformed anchor in {}: {}", identity, diagnostic);
        }
        self.diagnostics += scan.diagnostics.len();

        for link in scan.links {
            self.add_successor(current, link);
        }

        SearchState::Running
    }

    /// Insert a discovered link as a child of `parent` unless it is already known
    fn add_successor(&mut self, parent: NodeId, link: LinkCandidate) {
        if let Some(reason) = self.rejection(&link.target) {
            match reason {
                Rejection::InFrontier => ::log::debug!(" - {} is in the frontier", link.target),
                Rejection::Visited => ::log::debug!(" - {} is in the visited set", link.target),
                Rejection::Filtered => ::log::debug!(" - {} rejected by filter", link.target),
            }
            return;
        }

        ::log::debug!(" - queuing {} with anchor text: {}", link.target, link.anchor_text);
        let child = self
            .nodes
            .add_child(parent, PageId::new(link.target), link.anchor_text);
        self.frontier.insert(child, &mut self.nodes, &self.settings.goal);
    }

    fn rejection(&self, target: &str) -> Option<Rejection> {
        if self.frontier.contains(target, &self.nodes) {
            Some(Rejection::InFrontier)
        } else if self.visited.contains(target) {
            Some(Rejection::Visited)
        } else if !self.settings.filter.admits(target) {
            Some(Rejection::Filtered)
        } else {
            None
        }
    }

    fn into_outcome(self) -> SearchOutcome {
        let (found, path, termination) = match self.state {
            SearchState::GoalFound(goal) => (true, self.nodes.path_to_root(goal), Termination::GoalFound),
            _ => (false, Vec::new(), Termination::Exhausted),
        };

        if found {
            ::log::info!("Solution path: {} (size {})", path.join("-"), path.len());
        }
        ::log::info!(
            "Visited {} nodes in {} cycles using {} search; frontier peaked at {}",
            self.nodes_visited,
            self.cycles,
            self.settings.strategy,
            self.frontier.high_water()
        );

        SearchOutcome {
            found,
            path,
            nodes_visited: self.nodes_visited,
            termination,
            strategy: self.settings.strategy,
            trace: self.trace,
            cycles: self.cycles,
            diagnostics: self.diagnostics,
            unavailable: self.unavailable,
        }
    }
}
