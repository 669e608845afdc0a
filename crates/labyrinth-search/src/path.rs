//! Path reconstruction from predecessor links.

use std::collections::HashMap;

use labyrinth_core::Point;

/// Walk the predecessor chain back from `goal` and return the path in
/// forward order, both endpoints included.
///
/// The start state has no entry in `parents` (engines never record a
/// predecessor for it), which terminates the walk — so a goal equal to
/// the start yields the single-element path `[goal]`.
pub fn trace(parents: &HashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(p) = cur {
        path.push(p);
        cur = parents.get(&p).copied();
    }
    path.reverse();
    path
}
