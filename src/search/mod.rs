//! Graph search over a page collection.
//!
//! A [`SearchDriver`] owns one run: it pops from the [`Frontier`], fetches
//! page contents, goal-tests them and expands links into child nodes held
//! in a [`NodeArena`].

pub mod driver;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod visited;


pub use driver::{SearchDriver, SearchState};
pub use frontier::{Frontier, Strategy};
pub use heuristic::GoalPattern;
pub use node::{NodeArena, NodeId, PageId, SearchNode};
pub use visited::VisitedSet;
