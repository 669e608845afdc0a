use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use labyrinth_core::Point;

use crate::path;
use crate::result::SearchResult;
use crate::traits::{CostSearchable, SearchEngine};

/// A* search engine.
///
/// Explores states in order of `f = g + h`, where `g` is the accumulated
/// cost from the start and `h` the problem's heuristic estimate. With an
/// admissible and consistent heuristic the goal is optimal the first
/// time it is popped from the frontier, and a finalized state is never
/// re-expanded.
///
/// Ties between equal-`f` entries are broken by insertion order (earlier
/// wins), which keeps traversal reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl AStar {
    /// Create an A* engine.
    pub fn new() -> Self {
        Self
    }
}

/// Frontier entry, ordered for a min-heap on `f`, then insertion order.
struct OpenEntry {
    state: Point,
    g: f64,
    f: f64,
    seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f first;
        // among equal f, the earliest-inserted entry wins.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: CostSearchable> SearchEngine<P> for AStar {
    fn search(&mut self, problem: &P) -> SearchResult {
        let start = problem.start();
        if problem.is_goal(start) {
            return SearchResult::Found(vec![start]);
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut best_g: HashMap<Point, f64> = HashMap::new();
        let mut closed: HashSet<Point> = HashSet::new();
        let mut parents: HashMap<Point, Point> = HashMap::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        let mut seq: u64 = 0;
        let mut expanded = 0usize;

        best_g.insert(start, 0.0);
        open.push(OpenEntry {
            state: start,
            g: 0.0,
            f: problem.estimate(start),
            seq,
        });

        while let Some(entry) = open.pop() {
            let state = entry.state;
            // A state already finalized was reached by a cheaper entry
            // earlier; any remaining frontier entries for it are stale.
            if !closed.insert(state) {
                continue;
            }
            expanded += 1;

            if problem.is_goal(state) {
                let found = path::trace(&parents, state);
                log::debug!(
                    "astar: goal after {expanded} expansions, path len {}",
                    found.len()
                );
                return SearchResult::Found(found);
            }

            nbuf.clear();
            problem.neighbors(state, &mut nbuf);
            for &np in nbuf.iter() {
                if closed.contains(&np) {
                    continue;
                }
                let tentative = entry.g + problem.cost(state, np);
                if let Some(&g) = best_g.get(&np) {
                    if tentative >= g {
                        continue;
                    }
                }
                best_g.insert(np, tentative);
                parents.insert(np, state);
                seq += 1;
                open.push(OpenEntry {
                    state: np,
                    g: tentative,
                    f: tentative + problem.estimate(np),
                    seq,
                });
            }
        }

        log::debug!("astar: frontier exhausted after {expanded} expansions");
        SearchResult::NotFound
    }
}
