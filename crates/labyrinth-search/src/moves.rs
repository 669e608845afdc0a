//! The closed table of legal moves.

use labyrinth_core::Point;

/// Cost of a single step. Every legal move costs the same.
pub const STEP_COST: f64 = 1.0;

/// One of the four axis-aligned moves.
///
/// The move set is closed: there is no diagonal movement, and no cost
/// constant exists for moves outside this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the fixed enumeration order used everywhere:
    /// up, down, left, right.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The coordinate offset this move applies.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
        }
    }

    /// The state reached by applying this move at `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// Cost of this move.
    #[inline]
    pub const fn cost(self) -> f64 {
        STEP_COST
    }

    /// The move leading from `from` to the adjacent `to`, if any.
    pub fn between(from: Point, to: Point) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.apply(from) == to)
    }
}
