use std::collections::{HashMap, HashSet, VecDeque};

use labyrinth_core::Point;

use crate::path;
use crate::result::SearchResult;
use crate::traits::{SearchEngine, Searchable};

/// Breadth-first search engine.
///
/// Explores the state graph in FIFO order, so the first path that
/// reaches the goal has the minimum edge count. The visited check
/// happens at expansion time, not enqueue time: a state may sit in the
/// frontier more than once, but only its first (shortest) discovery is
/// expanded and only the first recorded predecessor survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    /// Create a breadth-first engine.
    pub fn new() -> Self {
        Self
    }
}

impl<P: Searchable> SearchEngine<P> for BreadthFirst {
    fn search(&mut self, problem: &P) -> SearchResult {
        let start = problem.start();
        if problem.is_goal(start) {
            return SearchResult::Found(vec![start]);
        }

        let mut frontier: VecDeque<Point> = VecDeque::new();
        let mut visited: HashSet<Point> = HashSet::new();
        let mut parents: HashMap<Point, Point> = HashMap::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        let mut expanded = 0usize;

        frontier.push_back(start);

        while let Some(state) = frontier.pop_front() {
            if !visited.insert(state) {
                continue;
            }
            expanded += 1;

            if problem.is_goal(state) {
                let found = path::trace(&parents, state);
                log::debug!("bfs: goal after {expanded} expansions, path len {}", found.len());
                return SearchResult::Found(found);
            }

            nbuf.clear();
            problem.neighbors(state, &mut nbuf);
            for &np in nbuf.iter() {
                if visited.contains(&np) {
                    continue;
                }
                // First discovery is the shortest; keep its predecessor.
                parents.entry(np).or_insert(state);
                frontier.push_back(np);
            }
        }

        log::debug!("bfs: frontier exhausted after {expanded} expansions");
        SearchResult::NotFound
    }
}
