//! A single search query: a grid bound to its start and goal.

use std::fmt;

use labyrinth_core::{Grid, Point};

use crate::distance::euclidean;
use crate::moves::Move;
use crate::traits::{CostSearchable, Searchable};

/// One search query over a grid. Immutable once built; construct a fresh
/// one per query.
///
/// The endpoints come either from the grid's own markers
/// ([`from_grid`](Self::from_grid)) or from the caller
/// ([`with_endpoints`](Self::with_endpoints), validated).
#[derive(Debug, Clone)]
pub struct Problem {
    grid: Grid,
    start: Point,
    goal: Point,
}

impl Problem {
    /// Bind a problem to the grid's embedded start and goal markers.
    ///
    /// Always valid: a parsed grid carries exactly one of each.
    pub fn from_grid(grid: Grid) -> Self {
        let start = grid.start();
        let goal = grid.goal();
        Self { grid, start, goal }
    }

    /// Bind a problem to caller-supplied endpoints, overriding the grid's
    /// markers.
    ///
    /// Rejects endpoints outside the grid, on a wall, or equal to each
    /// other — all before any search runs.
    pub fn with_endpoints(grid: Grid, start: Point, goal: Point) -> Result<Self, QueryError> {
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !grid.contains(pos) {
                return Err(QueryError::OutOfBounds { which, pos });
            }
            if !grid.is_walkable(pos) {
                return Err(QueryError::Wall { which, pos });
            }
        }
        if start == goal {
            return Err(QueryError::StartEqualsGoal(start));
        }
        Ok(Self { grid, start, goal })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The bound start state.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The bound goal state.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Append every legal `(move, successor)` pair from `state` into
    /// `buf`: in-bounds, non-wall targets only, enumerated in the fixed
    /// order up, down, left, right.
    pub fn moves(&self, state: Point, buf: &mut Vec<(Move, Point)>) {
        for m in Move::ALL {
            let to = m.apply(state);
            if self.grid.is_walkable(to) {
                buf.push((m, to));
            }
        }
    }
}

impl Searchable for Problem {
    fn start(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: Point) -> bool {
        state == self.goal
    }

    fn neighbors(&self, state: Point, buf: &mut Vec<Point>) {
        for m in Move::ALL {
            let to = m.apply(state);
            if self.grid.is_walkable(to) {
                buf.push(to);
            }
        }
    }
}

impl CostSearchable for Problem {
    fn cost(&self, from: Point, to: Point) -> f64 {
        // Uniform over the closed move table; the lookup keeps the table
        // the single source of cost.
        Move::between(from, to).map_or(crate::moves::STEP_COST, Move::cost)
    }

    fn estimate(&self, state: Point) -> f64 {
        euclidean(state, self.goal)
    }
}

/// Which endpoint of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Errors in caller-supplied endpoints, detected before search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The endpoint lies outside the grid.
    OutOfBounds { which: Endpoint, pos: Point },
    /// The endpoint coincides with a wall cell.
    Wall { which: Endpoint, pos: Point },
    /// Start and goal are the same cell.
    StartEqualsGoal(Point),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { which, pos } => {
                write!(f, "{which} {pos} is outside the grid")
            }
            Self::Wall { which, pos } => write!(f, "{which} {pos} is a wall cell"),
            Self::StartEqualsGoal(p) => write!(f, "start and goal are both {p}"),
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#o  #
# # #
#  x#
#####";

    fn grid() -> Grid {
        Grid::parse(SMALL).unwrap()
    }

    #[test]
    fn from_grid_binds_markers() {
        let p = Problem::from_grid(grid());
        assert_eq!(p.start(), Point::new(1, 1));
        assert_eq!(p.goal(), Point::new(3, 3));
        assert!(p.is_goal(Point::new(3, 3)));
        assert!(!p.is_goal(Point::new(1, 1)));
    }

    #[test]
    fn moves_filter_walls_and_bounds() {
        let p = Problem::from_grid(grid());
        let mut buf = Vec::new();
        // Start corner: up and left are walls.
        p.moves(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                (Move::Down, Point::new(1, 2)),
                (Move::Right, Point::new(2, 1)),
            ]
        );
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let open = Grid::parse("o  \n   \n  x").unwrap();
        let p = Problem::from_grid(open);
        let mut buf = Vec::new();
        Searchable::neighbors(&p, Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn with_endpoints_accepts_valid_query() {
        let p = Problem::with_endpoints(grid(), Point::new(3, 1), Point::new(1, 3)).unwrap();
        assert_eq!(p.start(), Point::new(3, 1));
        assert_eq!(p.goal(), Point::new(1, 3));
    }

    #[test]
    fn with_endpoints_rejects_out_of_bounds() {
        let err = Problem::with_endpoints(grid(), Point::new(9, 9), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            QueryError::OutOfBounds {
                which: Endpoint::Start,
                pos: Point::new(9, 9)
            }
        );
    }

    #[test]
    fn with_endpoints_rejects_wall() {
        let err = Problem::with_endpoints(grid(), Point::new(1, 1), Point::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            QueryError::Wall {
                which: Endpoint::Goal,
                pos: Point::new(2, 2)
            }
        );
    }

    #[test]
    fn with_endpoints_rejects_equal_endpoints() {
        let err = Problem::with_endpoints(grid(), Point::new(1, 1), Point::new(1, 1)).unwrap_err();
        assert_eq!(err, QueryError::StartEqualsGoal(Point::new(1, 1)));
    }

    #[test]
    fn estimate_is_euclidean_to_goal() {
        let p = Problem::from_grid(grid());
        assert_eq!(CostSearchable::estimate(&p, Point::new(3, 3)), 0.0);
        let e = CostSearchable::estimate(&p, Point::new(1, 1));
        assert!((e - (8.0_f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn uniform_step_cost() {
        let p = Problem::from_grid(grid());
        assert_eq!(
            CostSearchable::cost(&p, Point::new(1, 1), Point::new(2, 1)),
            1.0
        );
    }
}
