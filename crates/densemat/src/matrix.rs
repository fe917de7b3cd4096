use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::MatrixError;

/// Absolute tolerance used by [`Matrix::equals`].
pub const EQ_TOLERANCE: f64 = 1e-7;

pub(crate) fn checked_numel(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    rows.checked_mul(cols).ok_or(MatrixError::ShapeOverflow { rows, cols })
}

fn expect_numel(rows: usize, cols: usize) -> usize {
    match checked_numel(rows, cols) {
        Ok(numel) => numel,
        Err(e) => panic!("{e}"),
    }
}

/// A dense two-dimensional matrix of `f64` values.
///
/// The data is stored in a contiguous row-major buffer that always holds
/// exactly `rows * cols` elements. The extents can only change together with
/// the buffer through [`Matrix::replace_data`].
///
/// # Examples
///
/// ```rust
/// use densemat::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0), Ok(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a new matrix with all elements set to zero.
    ///
    /// Zero extents are allowed and produce an empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_shape_val(rows, cols, 0.0)
    }

    /// Alias of [`Matrix::new`].
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    /// Create a new matrix with all elements set to `value`.
    pub fn from_shape_val(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; expect_numel(rows, cols)],
            rows,
            cols,
        }
    }

    /// Create a new matrix by evaluating `f` at every `(row, col)` position.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_shape_fn(2, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn from_shape_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(expect_numel(rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_shape_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Wrap an existing row-major buffer as a matrix without copying it.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows.
    /// * `cols` - Number of columns.
    /// * `data` - Row-major buffer holding `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeOverflow`] if `rows * cols` overflows and
    /// [`MatrixError::InvalidShape`] if the buffer length does not match the
    /// requested shape.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols)?;
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a list of rows.
    ///
    /// An empty list produces a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the rows do not all have the
    /// same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::shape_mismatch(
                    "from_rows",
                    (1, cols),
                    (1, row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a matrix of the same shape around `data`.
    pub(crate) fn with_data(&self, data: Vec<f64>) -> Matrix {
        debug_assert_eq!(data.len(), self.numel());
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` extent pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements, `rows * cols`.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major data buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The row-major data buffer, mutably.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize, MatrixError> {
        if i >= self.rows {
            return Err(MatrixError::index_out_of_bounds(i, self.rows));
        }
        if j >= self.cols {
            return Err(MatrixError::index_out_of_bounds(j, self.cols));
        }
        Ok(i * self.cols + j)
    }

    /// Get the element at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(self.data[offset])
    }

    /// Get a mutable reference to the element at row `i` and column `j`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut f64, MatrixError> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `i >= rows` or `j >= cols`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    /// Replace the data and both extents in a single step.
    ///
    /// The matrix is left untouched if the buffer does not hold
    /// `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] on a length mismatch.
    pub fn replace_data(
        &mut self,
        data: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> Result<(), MatrixError> {
        let replacement = Self::from_shape_vec(rows, cols, data)?;
        log::debug!(
            "replacing {}x{} matrix data with {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );
        *self = replacement;
        Ok(())
    }

    /// Set every element to zero in place.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Tolerance-based equality.
    ///
    /// Two matrices are equal when their shapes match and every pair of
    /// corresponding elements differs by no more than [`EQ_TOLERANCE`].
    /// A pair only counts as different when its absolute difference compares
    /// greater than the tolerance, so pairs whose difference is NaN (a NaN
    /// entry, or equal infinities) never break equality.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0, 2.0 + 1e-8]]).unwrap();
    /// assert!(a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Matrix) -> bool {
        self.equals_with_tolerance(other, EQ_TOLERANCE)
    }

    /// Same as [`Matrix::equals`] with a caller-provided absolute tolerance.
    pub fn equals_with_tolerance(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && !self
                .data
                .iter()
                .zip(other.data.iter())
                .any(|(a, b)| (a - b).abs() > tolerance)
    }

    /// Hash consistent with [`Matrix::equals`].
    ///
    /// Only the shape contributes: any finer bucketing of the values would
    /// split matrices that compare equal across a bucket boundary.
    pub fn tolerance_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.shape().hash(&mut hasher);
        hasher.finish()
    }

    /// Build an `n x 1` column matrix from a flat slice.
    pub fn from_array(values: &[f64]) -> Self {
        Self::from_column_vec(values.to_vec())
    }

    /// Wrap `data` as an `n x 1` column matrix.
    pub(crate) fn from_column_vec(data: Vec<f64>) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data,
        }
    }

    /// Flatten the matrix in row-major order, element `(i, j)` landing at
    /// index `i * cols + j`.
    pub fn to_array(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Flatten with the historic `i * (rows - 1) + j` index.
    ///
    /// This layout is only lossless for single-row matrices. It is kept to
    /// read and reproduce arrays written by older producers; new code should
    /// use [`Matrix::to_array`]. Later elements overwrite earlier ones when
    /// their indices collide.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] when the legacy index of an
    /// element falls outside the output buffer.
    pub fn to_array_legacy(&self) -> Result<Vec<f64>, MatrixError> {
        let len = self.numel();
        let mut out = vec![0.0; len];
        let mut written = vec![false; len];
        let mut collisions = 0usize;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let index = i * (self.rows - 1) + j;
                if index >= len {
                    return Err(MatrixError::index_out_of_bounds(index, len));
                }
                if written[index] {
                    collisions += 1;
                }
                written[index] = true;
                out[index] = self.data[i * self.cols + j];
            }
        }
        if collisions > 0 {
            log::warn!(
                "legacy flattening of a {}x{} matrix overwrote {} element(s)",
                self.rows,
                self.cols,
                collisions
            );
        }
        Ok(out)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        match self.offset(i, j) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        match self.offset(i, j) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---------------")?;
        for i in 0..self.rows {
            for v in &self.data[i * self.cols..(i + 1) * self.cols] {
                write!(f, " {v} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "---------------")
    }
}
