//! Cell classification and the map marker alphabet.

/// What a single grid position is.
///
/// `Wall` cells are impassable; everything else can be walked through.
/// `Start` and `Goal` are walkable cells that additionally designate the
/// endpoints embedded in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// Classify a raw map character.
    ///
    /// The alphabet is fixed and case-insensitive: `#` is a wall, `o` the
    /// start marker, `x` the goal marker, and any other character an open
    /// cell. Classification happens exactly once, at grid construction;
    /// nothing downstream ever looks at raw characters again.
    pub fn from_marker(ch: char) -> Self {
        match ch {
            '#' => Self::Wall,
            'o' | 'O' => Self::Start,
            'x' | 'X' => Self::Goal,
            _ => Self::Open,
        }
    }

    /// Whether a cell of this kind can be entered.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_table() {
        assert_eq!(CellKind::from_marker('#'), CellKind::Wall);
        assert_eq!(CellKind::from_marker('o'), CellKind::Start);
        assert_eq!(CellKind::from_marker('x'), CellKind::Goal);
        assert_eq!(CellKind::from_marker(' '), CellKind::Open);
        assert_eq!(CellKind::from_marker('.'), CellKind::Open);
    }

    #[test]
    fn marker_table_is_case_insensitive() {
        assert_eq!(CellKind::from_marker('O'), CellKind::Start);
        assert_eq!(CellKind::from_marker('X'), CellKind::Goal);
    }

    #[test]
    fn walkability() {
        assert!(!CellKind::Wall.is_walkable());
        assert!(CellKind::Open.is_walkable());
        assert!(CellKind::Start.is_walkable());
        assert!(CellKind::Goal.is_walkable());
    }
}
