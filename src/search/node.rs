//! Search nodes and the arena that owns them.
//!
//! Every page occurrence discovered during a run lives in a [`NodeArena`]
//! for the run's lifetime. Parents are stored as [`NodeId`] indices so that
//! ancestry walks never borrow across nodes.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::utils::identity_key;

/// Name of a page, compared and hashed case-insensitively.
///
/// The original spelling is kept for display and for fetching.
#[derive(Debug, Clone)]
pub struct PageId {
    raw: String,
    key: String,
}

impl PageId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = identity_key(&raw);
        Self { raw, key }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-folded form used for equality
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for PageId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PageId {}

impl Hash for PageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Index of a node inside its [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One page occurrence in the search tree
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub identity: PageId,
    /// Text of the link this node was discovered through (empty for the start node)
    pub anchor_text: String,
    /// Discovering node (`None` for the start node)
    pub parent: Option<NodeId>,
    /// Page text, absent until the node has been fetched
    pub contents: Option<String>,
    /// Heuristic score; accumulates across scorings, see [`crate::search::heuristic`]
    pub score: u64,
    /// Edges from the start node
    pub depth: usize,
}

impl SearchNode {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

/// Owner of every node created during a run
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the start node of a run
    pub fn add_root(&mut self, identity: PageId) -> NodeId {
        self.push(SearchNode {
            identity,
            anchor_text: String::new(),
            parent: None,
            contents: None,
            score: 0,
            depth: 0,
        })
    }

    /// Create a node discovered through a link on `parent`
    pub fn add_child(&mut self, parent: NodeId, identity: PageId, anchor_text: String) -> NodeId {
        let depth = self.get(parent).depth + 1;
        self.push(SearchNode {
            identity,
            anchor_text,
            parent: Some(parent),
            contents: None,
            score: 0,
            depth,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Ids are only minted by this arena, so lookups cannot miss
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` to the start node, yielding each node on the way.
    ///
    /// Each step follows the parent of the node just yielded, and a child is
    /// always created after its parent, so the walk strictly moves toward
    /// lower indices and ends at the root.
    pub fn ancestry(&self, id: NodeId) -> Ancestry<'_> {
        Ancestry {
            arena: self,
            next: Some(id),
        }
    }

    /// Identities from `goal` back to the start node
    pub fn path_to_root(&self, goal: NodeId) -> Vec<String> {
        self.ancestry(goal)
            .map(|node| node.identity.as_str().to_string())
            .collect()
    }
}

/// Iterator returned by [`NodeArena::ancestry`]
pub struct Ancestry<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}
