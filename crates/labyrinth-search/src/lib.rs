//! Search engines for maze pathfinding.
//!
//! This crate turns a [`labyrinth_core::Grid`] into a search [`Problem`]
//! and solves it with one of two interchangeable engines:
//!
//! - **[`BreadthFirst`]** — FIFO exploration, shortest path by edge count
//! - **[`AStar`]** — best-first exploration with an admissible heuristic,
//!   least-cost path under uniform step cost
//!
//! Both engines implement [`SearchEngine`] and produce a [`SearchResult`]
//! holding the forward-ordered path (start through goal inclusive) or the
//! `NotFound` outcome when the goal is unreachable.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Searchable`] | breadth-first search |
//! | [`CostSearchable`] : [`Searchable`] | A* |

mod astar;
mod bfs;
mod distance;
mod moves;
mod path;
mod problem;
mod result;
mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use distance::{euclidean, manhattan};
pub use moves::{Move, STEP_COST};
pub use problem::{Endpoint, Problem, QueryError};
pub use result::SearchResult;
pub use traits::{CostSearchable, SearchEngine, Searchable};
