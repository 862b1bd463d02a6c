/*!
# Coordinate Representation

Vertices of a maze graph are grid cells identified by a `(row, col)` pair.
We choose `i32` for both components: grids never come close to `2^31` cells per side
and signed values let callers probe cells just outside the grid without wrapping.
*/

use std::fmt::{Debug, Display};

/// Component type of a [`Coordinates`] value
pub type Coord = i32;

/// There can be at most `2^32 - 1` vertices in a graph
pub type NumVertices = u32;

/// A grid cell, ordered row-major
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinates {
    row: Coord,
    col: Coord,
}

impl Coordinates {
    /// Creates the cell at `(row, col)`
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    /// Returns *true* if both cells share a side, ie. their Manhattan distance is exactly one
    pub fn is_adjacent(&self, other: &Coordinates) -> bool {
        let dr = (self.row as i64 - other.row as i64).abs();
        let dc = (self.col as i64 - other.col as i64).abs();
        dr + dc == 1
    }

    /// Returns the cells above, below, left and right of `self` (in this order).
    /// Cells that would leave the range of [`Coord`] are skipped.
    pub fn orthogonal_neighbours(&self) -> impl Iterator<Item = Coordinates> + use<> {
        let Coordinates { row, col } = *self;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc): (Coord, Coord)| {
                Some(Coordinates::new(row.checked_add(dr)?, col.checked_add(dc)?))
            })
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Debug for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Coord, Coord)> for Coordinates {
    fn from(value: (Coord, Coord)) -> Self {
        Coordinates::new(value.0, value.1)
    }
}

impl From<&(Coord, Coord)> for Coordinates {
    fn from(value: &(Coord, Coord)) -> Self {
        Coordinates::new(value.0, value.1)
    }
}

impl From<Coordinates> for (Coord, Coord) {
    fn from(value: Coordinates) -> Self {
        (value.row, value.col)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn adjacency() {
        let c = Coordinates::new(2, 3);
        assert!(c.is_adjacent(&Coordinates::new(1, 3)));
        assert!(c.is_adjacent(&Coordinates::new(2, 4)));
        assert!(!c.is_adjacent(&c));
        assert!(!c.is_adjacent(&Coordinates::new(3, 4)));
        assert!(!c.is_adjacent(&Coordinates::new(2, 5)));
    }

    #[test]
    fn orthogonal_neighbours_at_boundary() {
        let c = Coordinates::new(Coord::MIN, 0);
        assert_eq!(
            c.orthogonal_neighbours().collect_vec(),
            vec![
                Coordinates::new(Coord::MIN + 1, 0),
                Coordinates::new(Coord::MIN, -1),
                Coordinates::new(Coord::MIN, 1)
            ]
        );

        let c = Coordinates::new(0, 0);
        assert_eq!(c.orthogonal_neighbours().count(), 4);
        assert!(c.orthogonal_neighbours().all(|n| n.is_adjacent(&c)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![(1, 0), (0, 1), (0, 0), (1, 1)]
            .into_iter()
            .map(Coordinates::from)
            .collect_vec();
        cells.sort();
        assert_eq!(
            cells.into_iter().map(<(Coord, Coord)>::from).collect_vec(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(format!("{}", Coordinates::new(-1, 4)), "(-1,4)");
    }
}
