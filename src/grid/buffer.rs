use crate::error::GridError;

/// A fixed-size 2D grid stored as a single row-major buffer.
///
/// Indexed `(row, col)`. Out-of-range reads return `None` and out-of-range
/// writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Boolean occupancy grid.
pub type BoolGrid = Grid<bool>;

/// Grid of per-cell counts; `None` marks a cell with nothing to report.
pub type CountGrid = Grid<Option<u32>>;

impl<T: Clone> Grid<T> {
    /// Creates a `rows x cols` grid with every cell set to `fill`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Builds a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedRow` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: cols,
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Copies the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Grid<T> {
    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Reads a cell, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Mutable access to a cell, or `None` when out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.index(row, col).map(move |i| &mut self.cells[i])
    }

    /// Writes a cell. Returns `false` and leaves the grid untouched when the
    /// position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Iterates rows top to bottom as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on a zero chunk size.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Iterates `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / cols, i % cols, v))
    }
}

impl BoolGrid {
    /// Number of `true` cells.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns `true` if no cell is set.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Smallest column holding a set cell, scanning columns in ascending
    /// order and each column top to bottom.
    #[must_use]
    pub fn first_occupied_col(&self) -> Option<usize> {
        (0..self.cols).find(|&col| (0..self.rows).any(|row| self.cells[row * self.cols + col]))
    }

    /// Smallest row holding a set cell, scanning rows in ascending order and
    /// each row left to right.
    #[must_use]
    pub fn first_occupied_row(&self) -> Option<usize> {
        self.iter_rows().position(|row| row.contains(&true))
    }

    /// Flips a cell and returns its new value, or `None` when out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<bool> {
        let cell = self.get_mut(row, col)?;
        *cell = !*cell;
        Some(*cell)
    }
}
