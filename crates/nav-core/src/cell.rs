#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a grid cell, `(x, y)` in columns and rows.
///
/// Ordered `(y, x)` so that iteration in sort order matches row-major grid
/// order; this keeps tie-breaks that fall back to cell comparison stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex {
    pub x: i32,
    pub y: i32,
}

impl CellIndex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: number of 8-connected steps between two cells.
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl PartialOrd for CellIndex {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellIndex {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![
            CellIndex::new(3, 1),
            CellIndex::new(0, 2),
            CellIndex::new(1, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellIndex::new(1, 1),
                CellIndex::new(3, 1),
                CellIndex::new(0, 2),
            ]
        );
    }

    #[test]
    fn chebyshev_counts_diagonal_steps_once() {
        assert_eq!(CellIndex::new(0, 0).chebyshev(CellIndex::new(3, 2)), 3);
    }
}
