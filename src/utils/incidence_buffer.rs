/*!
# Incidence Buffer

Flat storage for the columns of an incidence matrix.

- A contiguous `cells: Vec<u8>` stores all columns back to back.
- Every column has the same `width`: one cell per vertex (`1` at both endpoints, `0` elsewhere)
  followed by one trailing cell holding the wall flag.

Column `i` therefore occupies `cells[i * width..(i + 1) * width]`.

### Invariants
1. `width >= 1`
2. `cells.len() == columns * width`
3. Every column holds exactly two `1`s among its first `width - 1` cells

Growing the vertex index space rewrites the whole buffer one cell wider ([`IncidenceBuffer::grow`]),
so no column can ever be shorter than the others.
*/

use log::trace;

/// Index of a vertex row inside an [`IncidenceBuffer`]
pub type RowIndex = usize;

/// Fixed-width incidence columns stored in one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceBuffer {
    cells: Vec<u8>,
    width: usize,
}

impl Default for IncidenceBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl IncidenceBuffer {
    /// Creates an empty buffer for `num_rows` vertices
    pub fn new(num_rows: usize) -> Self {
        Self {
            cells: Vec::new(),
            width: num_rows + 1,
        }
    }

    /// Returns the number of stored columns (ie. edges)
    pub fn len(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Returns *true* if no column is stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the length of every column, wall cell included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of vertex rows
    pub fn num_rows(&self) -> usize {
        self.width - 1
    }

    /// Returns column `i` including its trailing wall cell.
    /// ** Panics if `i >= self.len()` **
    pub fn column(&self, i: usize) -> &[u8] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    /// Returns column `i` without its wall cell.
    /// ** Panics if `i >= self.len()` **
    pub fn incidences(&self, i: usize) -> &[u8] {
        let col = self.column(i);
        &col[..col.len() - 1]
    }

    /// Returns an iterator over all columns in insertion order
    pub fn columns(&self) -> std::slice::ChunksExact<'_, u8> {
        self.cells.chunks_exact(self.width)
    }

    /// Appends a column with `1`s at rows `a` and `b` and the given wall flag.
    /// ** Panics if `a` or `b` is not a valid row **
    pub fn push(&mut self, a: RowIndex, b: RowIndex, wall: bool) {
        assert!(a < self.num_rows() && b < self.num_rows());
        debug_assert_ne!(a, b);

        let start = self.cells.len();
        self.cells.resize(start + self.width, 0);
        self.cells[start + a] = 1;
        self.cells[start + b] = 1;
        self.cells[start + self.width - 1] = wall as u8;
    }

    /// Removes column `i`, keeping the order of all other columns.
    /// ** Panics if `i >= self.len()` **
    pub fn remove(&mut self, i: usize) {
        assert!(i < self.len());
        self.cells.drain(i * self.width..(i + 1) * self.width);
    }

    /// Returns the index of the column with `1`s at rows `a` and `b`, if any
    pub fn find(&self, a: RowIndex, b: RowIndex) -> Option<usize> {
        self.columns().position(|col| col[a] == 1 && col[b] == 1)
    }

    /// Returns the wall flag of column `i`.
    /// ** Panics if `i >= self.len()` **
    pub fn wall(&self, i: usize) -> bool {
        self.cells[(i + 1) * self.width - 1] != 0
    }

    /// Sets the wall flag of column `i`.
    /// ** Panics if `i >= self.len()` **
    pub fn set_wall(&mut self, i: usize, wall: bool) {
        self.cells[(i + 1) * self.width - 1] = wall as u8;
    }

    /// Returns both rows marked in column `i` in ascending order.
    /// ** Panics if `i >= self.len()` **
    pub fn endpoints(&self, i: usize) -> (RowIndex, RowIndex) {
        let mut rows = self
            .incidences(i)
            .iter()
            .enumerate()
            .filter_map(|(r, &x)| (x == 1).then_some(r));
        match (rows.next(), rows.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => panic!("column {i} does not mark two rows"),
        }
    }

    /// Makes room for one additional vertex row by rewriting every column one cell wider.
    /// The new row is `0` in every existing column; wall flags are carried over.
    pub fn grow(&mut self) {
        let old_width = self.width;
        let new_width = old_width + 1;
        let num_columns = self.len();

        let mut cells = Vec::with_capacity(num_columns * new_width);
        for col in self.cells.chunks_exact(old_width) {
            let (incidences, wall) = col.split_at(old_width - 1);
            cells.extend_from_slice(incidences);
            cells.push(0);
            cells.extend_from_slice(wall);
        }

        self.cells = cells;
        self.width = new_width;
        assert_eq!(self.cells.len(), num_columns * self.width);

        trace!("incidence buffer grew from width {old_width} to {new_width} ({num_columns} columns rewritten)");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn push_find_remove() {
        let mut buf = IncidenceBuffer::new(4);
        assert!(buf.is_empty());
        assert_eq!(buf.width(), 5);

        buf.push(0, 1, true);
        buf.push(2, 1, false);
        buf.push(3, 0, false);
        assert_eq!(buf.len(), 3);

        assert_eq!(buf.column(0), &[1, 1, 0, 0, 1]);
        assert_eq!(buf.incidences(1), &[0, 1, 1, 0]);
        assert_eq!(buf.find(1, 2), Some(1));
        assert_eq!(buf.find(2, 1), Some(1));
        assert_eq!(buf.find(2, 3), None);
        assert_eq!(buf.endpoints(2), (0, 3));

        assert!(buf.wall(0));
        buf.set_wall(0, false);
        assert!(!buf.wall(0));

        buf.remove(1);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.find(1, 2), None);
        assert_eq!(buf.endpoints(1), (0, 3));
    }

    #[test]
    fn grow_keeps_columns_aligned() {
        let mut buf = IncidenceBuffer::new(2);
        buf.push(0, 1, true);
        buf.push(1, 0, false);

        for step in 0..5 {
            buf.grow();
            assert_eq!(buf.width(), 4 + step);
            assert!(buf.columns().all(|c| c.len() == buf.width()));
            assert_eq!(buf.len(), 2);
        }

        assert_eq!(buf.column(0), &[1, 1, 0, 0, 0, 0, 0, 1]);
        assert!(buf.wall(0));
        assert!(!buf.wall(1));

        buf.push(6, 2, true);
        assert_eq!(buf.endpoints(2), (2, 6));
        assert_eq!(
            buf.columns().map(|c| c[c.len() - 1]).collect_vec(),
            vec![1, 0, 1]
        );
    }
}
