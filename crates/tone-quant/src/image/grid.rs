//! Owned row-major sample grid.

use crate::error::QuantError;

/// Number of rows and columns of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Image height in samples
    pub rows: usize,
    /// Image width in samples
    pub cols: usize,
}

impl Dimensions {
    /// Create a dimension pair.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of samples (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True when either extent is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// A rectangular grid of samples stored in row-major order.
///
/// `P` is `u8` for single-channel images and `[u8; 3]` for three-channel
/// (R, G, B) images. Filters take a `&Grid` and return a freshly allocated
/// grid; they never write through the borrowed input.
///
/// # Example
///
/// ```
/// use tone_quant::Grid;
///
/// let mut grid = Grid::new(2, 3, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(grid.get(1, 0), 4);
/// grid.set(1, 0, 40);
/// assert_eq!(grid.row(1), &[40, 5, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<P> {
    dims: Dimensions,
    data: Vec<P>,
}

impl<P: Copy> Grid<P> {
    /// Wrap a row-major buffer.
    ///
    /// Fails with [`QuantError::DataLengthMismatch`] unless
    /// `data.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<P>) -> Result<Self, QuantError> {
        let dims = Dimensions::new(rows, cols);
        if data.len() != dims.len() {
            return Err(QuantError::DataLengthMismatch {
                expected: dims.len(),
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Grid of the given size with every sample set to `value`.
    pub fn filled(rows: usize, cols: usize, value: P) -> Self {
        Self {
            dims: Dimensions::new(rows, cols),
            data: vec![value; rows * cols],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Read the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> P {
        self.data[self.index(row, col)]
    }

    /// Overwrite the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: P) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Borrow one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[P] {
        let start = row * self.dims.cols;
        &self.data[start..start + self.dims.cols]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[P]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.data.chunks(self.dims.cols.max(1))
    }

    /// All samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Consume the grid, returning the row-major buffer.
    pub fn into_raw(self) -> Vec<P> {
        self.data
    }

    /// Apply `f` to every sample, producing a new grid of the same shape.
    pub fn map<Q: Copy>(&self, f: impl FnMut(&P) -> Q) -> Grid<Q> {
        Grid {
            dims: self.dims,
            data: self.data.iter().map(f).collect(),
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "({}, {}) outside {}x{} grid",
            row,
            col,
            self.dims.rows,
            self.dims.cols
        );
        row * self.dims.cols + col
    }
}
