use labyrinth_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Admissible as an A* heuristic for axis-aligned movement with step
/// cost ≥ 1, since it never exceeds the Manhattan distance.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(2, 2)), 0.0);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(5, 1), Point::new(2, 3)), 5);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for x in -3..=3 {
            for y in -3..=3 {
                let a = Point::new(0, 0);
                let b = Point::new(x, y);
                assert!(euclidean(a, b) <= manhattan(a, b) as f64 + 1e-9);
            }
        }
    }
}
