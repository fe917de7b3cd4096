use crate::error::MatrixError;
use crate::matrix::Matrix;

/// A column vector: a [`Matrix`] constrained to a single column.
///
/// Binary operations against a [`Matrix`] are computed on the underlying
/// matrix and the result is converted back with [`Matrix::to_vector`].
///
/// # Examples
///
/// ```rust
/// use densemat::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.sum(), 6.0);
/// assert_eq!(v.mean(), Ok(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    inner: Matrix,
}

impl Vector {
    /// Create a zeroed vector of `len` entries (a `len x 1` matrix).
    pub fn new(len: usize) -> Self {
        Self {
            inner: Matrix::new(len, 1),
        }
    }

    /// Create a vector by copying `values`.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            inner: Matrix::from_array(values),
        }
    }

    /// Create a vector that takes ownership of `values`.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            inner: Matrix::from_column_vec(values),
        }
    }

    /// Reinterpret a single-column matrix as a vector without copying.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotAVector`] if the matrix does not have
    /// exactly one column.
    pub fn try_from_matrix(matrix: Matrix) -> Result<Self, MatrixError> {
        if matrix.cols() != 1 {
            return Err(MatrixError::NotAVector {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(Self { inner: matrix })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.rows()
    }

    /// Whether the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entries in order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    /// Get entry `i`, same as `get(i, 0)` on the matrix.
    pub fn get(&self, i: usize) -> Result<f64, MatrixError> {
        self.inner.get(i, 0)
    }

    /// Set entry `i`, same as `set(i, 0, value)` on the matrix.
    pub fn set(&mut self, i: usize, value: f64) -> Result<(), MatrixError> {
        self.inner.set(i, 0, value)
    }

    /// Borrow the vector as a `len x 1` matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    /// Convert into a `len x 1` matrix, reusing the buffer.
    pub fn into_matrix(self) -> Matrix {
        self.inner
    }

    /// Sum of the entries, accumulated in index order.
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().fold(0.0, |acc, &x| acc + x)
    }

    /// Arithmetic mean of the entries.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyVector`] if the vector has no entries.
    pub fn mean(&self) -> Result<f64, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyVector);
        }
        Ok(self.sum() / self.len() as f64)
    }

    /// Elementwise sum with a matrix of shape `len x 1`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Matrix) -> Result<Vector, MatrixError> {
        self.inner.add(rhs)?.to_vector()
    }

    /// Elementwise difference with a matrix of shape `len x 1`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, rhs: &Matrix) -> Result<Vector, MatrixError> {
        self.inner.sub(rhs)?.to_vector()
    }

    /// Matrix product of the `len x 1` vector with `rhs`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InnerDimensionMismatch`] unless `rhs` has a
    /// single row, and with [`MatrixError::NotAVector`] when the product has
    /// more than one row and more than one column.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, rhs: &Matrix) -> Result<Vector, MatrixError> {
        self.inner.matmul(rhs)?.to_vector()
    }

    /// Add `value` to every entry.
    pub fn add_scalar(&self, value: f64) -> Vector {
        Self {
            inner: self.inner.add_scalar(value),
        }
    }

    /// Subtract `value` from every entry.
    pub fn sub_scalar(&self, value: f64) -> Vector {
        Self {
            inner: self.inner.sub_scalar(value),
        }
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&self, factor: f64) -> Vector {
        Self {
            inner: self.inner.scale(factor),
        }
    }

    /// Tolerance-based equality, see [`Matrix::equals`].
    pub fn equals(&self, other: &Vector) -> bool {
        self.inner.equals(&other.inner)
    }
}

impl Matrix {
    /// Read a row or column matrix as a [`Vector`].
    ///
    /// Elements are packed in row-major order: `i` over `0..rows`, then `j`
    /// over `0..cols`. A `1 x n` row becomes an `n`-entry vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotAVector`] if the matrix has more than one
    /// row and more than one column.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let row = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    /// let v = row.to_vector().unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// assert!(Matrix::new(3, 3).to_vector().is_err());
    /// ```
    pub fn to_vector(&self) -> Result<Vector, MatrixError> {
        if self.rows() > 1 && self.cols() > 1 {
            return Err(MatrixError::NotAVector {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let mut packed = Vec::with_capacity(self.numel());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                packed.push(self.as_slice()[i * self.cols() + j]);
            }
        }
        Ok(Vector::from_vec(packed))
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}
