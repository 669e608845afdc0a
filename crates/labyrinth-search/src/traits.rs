use labyrinth_core::Point;

use crate::result::SearchResult;

/// Minimal search interface — a start state, a goal test, and neighbor
/// enumeration. Sufficient for breadth-first search.
pub trait Searchable {
    /// The initial state.
    fn start(&self) -> Point;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: Point) -> bool;

    /// Append the successors of `state` into `buf`. The caller clears
    /// `buf` before calling. Enumeration order must be stable within a
    /// run so traversal is reproducible.
    fn neighbors(&self, state: Point, buf: &mut Vec<Point>);
}

/// Searchable with positive edge costs and an admissible heuristic.
/// Required for A*.
pub trait CostSearchable: Searchable {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;

    /// Heuristic estimate of remaining cost from `state` to the goal.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, state: Point) -> f64;
}

/// A search engine that solves a problem in one synchronous call.
///
/// Engines keep no state between calls: every invocation starts from a
/// fresh frontier, so one engine value may serve unrelated queries in
/// sequence but never mixes their state.
pub trait SearchEngine<P: Searchable> {
    /// Run the search to completion and report the outcome.
    fn search(&mut self, problem: &P) -> SearchResult;
}
