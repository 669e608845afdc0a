use labyrinth_core::Point;

use crate::moves::STEP_COST;

/// Outcome of a search.
///
/// `Found` carries the forward-ordered path from start to goal, both
/// endpoints included. `NotFound` is a normal terminal outcome (the goal
/// is unreachable), not an error: callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    Found(Vec<Point>),
    NotFound,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Consume the result, yielding the path if one was found.
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Total cost of the found path (edge count × step cost).
    ///
    /// A single-element path (start == goal) costs zero.
    pub fn cost(&self) -> Option<f64> {
        self.path().map(|p| (p.len() - 1) as f64 * STEP_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_accessors() {
        let r = SearchResult::Found(vec![Point::new(0, 0), Point::new(1, 0)]);
        assert!(r.is_found());
        assert_eq!(r.path().map(|p| p.len()), Some(2));
        assert_eq!(r.cost(), Some(1.0));
        assert_eq!(r.into_path().map(|p| p.len()), Some(2));
    }

    #[test]
    fn not_found_accessors() {
        let r = SearchResult::NotFound;
        assert!(!r.is_found());
        assert_eq!(r.path(), None);
        assert_eq!(r.cost(), None);
        assert_eq!(r.into_path(), None);
    }

    #[test]
    fn trivial_path_costs_zero() {
        let r = SearchResult::Found(vec![Point::ZERO]);
        assert_eq!(r.cost(), Some(0.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult::Found(vec![Point::new(0, 0), Point::new(0, 1)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);

        let json = serde_json::to_string(&SearchResult::NotFound).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SearchResult::NotFound);
    }
}
