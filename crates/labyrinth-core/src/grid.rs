//! The immutable maze grid, parsed once from map text.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Point;

/// An immutable rectangular grid of [`CellKind`] values.
///
/// A `Grid` is produced by [`Grid::parse`] from a block of map text and
/// never changes afterwards. Row 0 is the top line of the text; cell
/// lookup is O(1) over a flat row-major buffer. Parsing also records the
/// unique start and goal markers, so a grid always carries valid
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Parse a block of map text into a grid.
    ///
    /// Leading and trailing blank lines are ignored, so raw string
    /// literals can start with a newline. Every remaining line must have
    /// the same width, and the text must contain exactly one start marker
    /// and exactly one goal marker (see [`CellKind::from_marker`] for the
    /// alphabet).
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim_matches('\n');
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        let mut height: i32 = 0;

        for (y, line) in s.split('\n').enumerate() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let kind = CellKind::from_marker(ch);
                match kind {
                    CellKind::Start => {
                        let p = Point::new(x, y as i32);
                        if start.replace(p).is_some() {
                            return Err(GridError::DuplicateStart(p));
                        }
                    }
                    CellKind::Goal => {
                        let p = Point::new(x, y as i32);
                        if goal.replace(p).is_some() {
                            return Err(GridError::DuplicateGoal(p));
                        }
                    }
                    _ => {}
                }
                cells.push(kind);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(GridError::Ragged {
                    line: y,
                    width: x as usize,
                    expected: width as usize,
                });
            }
            height += 1;
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        Ok(Self {
            cells,
            width,
            height,
            start,
            goal,
        })
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The position of the start marker.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The position of the goal marker.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Whether `p` is an in-bounds, non-wall cell.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_walkable)
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width as usize)
    }
}

/// Errors detected while parsing map text.
///
/// All of these are configuration problems: they are reported by
/// [`Grid::parse`], before any search could run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map text contained no lines.
    Empty,
    /// A line's width differs from the first line's.
    Ragged {
        line: usize,
        width: usize,
        expected: usize,
    },
    /// No start marker was found.
    MissingStart,
    /// No goal marker was found.
    MissingGoal,
    /// A second start marker was found at the given position.
    DuplicateStart(Point),
    /// A second goal marker was found at the given position.
    DuplicateGoal(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map text is empty"),
            Self::Ragged {
                line,
                width,
                expected,
            } => write!(
                f,
                "map line {line} has width {width}, expected {expected}"
            ),
            Self::MissingStart => write!(f, "map has no start marker"),
            Self::MissingGoal => write!(f, "map has no goal marker"),
            Self::DuplicateStart(p) => write!(f, "map has a second start marker at {p}"),
            Self::DuplicateGoal(p) => write!(f, "map has a second goal marker at {p}"),
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{CellKind, Point};

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn cell_kind_round_trip() {
        let json = serde_json::to_string(&CellKind::Wall).unwrap();
        let back: CellKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellKind::Wall);
    }
}
