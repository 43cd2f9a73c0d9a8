use crate::{points::PointId, Float};

/// One entry of the cost table, keyed by the vertex span `(i, j)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// minimum perimeter sum for the sub-polygon `i..=j`, 0 for spans under three vertices
    pub cost: Float,
    /// distance between vertex `i` and vertex `j`
    pub dist: Float,
    /// back-pointer to the split vertex, `PointId::INVALID` for trivial spans
    pub apex: PointId,
}

impl Cell {
    pub(crate) const UNFILLED: Cell = Cell {
        cost: Float::NAN,
        dist: Float::NAN,
        apex: PointId::INVALID,
    };

    pub fn is_filled(&self) -> bool {
        !self.cost.is_nan() && !self.dist.is_nan()
    }
}

/// Diagonal-major addressing for the upper triangle of an `n x n` table.
///
/// All cells of span 0 come first, then span 1 and so on, so one wavefront
/// level is a contiguous slice and every lower level sits in the prefix
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    n: usize,
}

impl Layout {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// number of vertices
    pub fn vertices(&self) -> usize {
        self.n
    }

    /// number of cells
    pub fn len(&self) -> usize {
        self.diagonal_start(self.n)
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// offset of the first cell with span `diff`
    #[inline(always)]
    pub fn diagonal_start(&self, diff: usize) -> usize {
        debug_assert!(diff <= self.n);
        diff * self.n - diff * diff.saturating_sub(1) / 2
    }

    /// number of cells with span `diff`
    #[inline(always)]
    pub fn diagonal_len(&self, diff: usize) -> usize {
        self.n - diff
    }

    /// linear offset of cell `(i, j)`, requires `i <= j < n`
    #[inline(always)]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.n, "cell ({i}, {j}) out of range");
        self.diagonal_start(j - i) + i
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i <= j && j < self.n
    }
}

/// Read-only view over the levels below the one being filled.
#[derive(Clone, Copy)]
pub(crate) struct Lower<'a> {
    layout: Layout,
    cells: &'a [Cell],
}

impl<'a> Lower<'a> {
    #[inline(always)]
    pub(crate) fn get(&self, i: usize, j: usize) -> &'a Cell {
        let cells: &'a [Cell] = self.cells;
        &cells[self.layout.offset(i, j)]
    }
}

/// The dynamic-programming table for one triangulation run.
///
/// Owned by the run that created it and never mutated once the solver
/// returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    layout: Layout,
    cells: Vec<Cell>,
}

impl CostTable {
    pub(crate) fn new(n: usize) -> Self {
        let layout = Layout::new(n);
        Self {
            layout,
            cells: vec![Cell::UNFILLED; layout.len()],
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// number of vertices the table was built for
    pub fn vertices(&self) -> usize {
        self.layout.vertices()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&Cell> {
        if !self.layout.contains(i, j) {
            return None;
        }
        self.cells.get(self.layout.offset(i, j))
    }

    /// cell `(i, j)`, panics when out of range
    pub fn cell(&self, i: usize, j: usize) -> &Cell {
        assert!(self.layout.contains(i, j), "cell ({i}, {j}) out of range");
        &self.cells[self.layout.offset(i, j)]
    }

    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, i: usize, j: usize) -> &mut Cell {
        let offset = self.layout.offset(i, j);
        &mut self.cells[offset]
    }

    /// cost of the whole polygon, 0 when there are fewer than three vertices
    pub fn cost(&self) -> Float {
        match self.layout.vertices() {
            0 => 0.,
            n => self.cell(0, n - 1).cost,
        }
    }

    /// iter all cells with their `(i, j)` key, in storage order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let n = self.layout.vertices();
        (0..n)
            .flat_map(move |diff| (0..n - diff).map(move |i| (i, i + diff)))
            .zip(self.cells.iter())
    }

    /// every level as its own mutable slice, paired with its span
    pub(crate) fn diagonals_mut(&mut self) -> Vec<(usize, &mut [Cell])> {
        let layout = self.layout;
        let mut rest = self.cells.as_mut_slice();
        let mut diagonals = Vec::with_capacity(layout.vertices());
        for diff in 0..layout.vertices() {
            let (diagonal, tail) =
                std::mem::take(&mut rest).split_at_mut(layout.diagonal_len(diff));
            diagonals.push((diff, diagonal));
            rest = tail;
        }
        diagonals
    }

    /// split into the finished levels below `diff` and the mutable level `diff` itself
    pub(crate) fn split_level_mut(&mut self, diff: usize) -> (Lower<'_>, &mut [Cell]) {
        let layout = self.layout;
        let (lower, upper) = self.cells.split_at_mut(layout.diagonal_start(diff));
        let level = &mut upper[..layout.diagonal_len(diff)];
        (Lower { layout, cells: lower }, level)
    }
}
