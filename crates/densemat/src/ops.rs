use crate::error::MatrixError;
use crate::matrix::{checked_numel, Matrix};

impl Matrix {
    /// Apply a binary function to every pair of corresponding elements.
    ///
    /// # Arguments
    ///
    /// * `other` - The right operand, must have the same shape as `self`.
    /// * `op_name` - Name reported in the shape mismatch error.
    /// * `op` - The function to apply.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[3.0, 5.0]]).unwrap();
    /// let c = a.element_wise_op(&b, "max", f64::max).unwrap();
    /// assert_eq!(c.as_slice(), &[3.0, 5.0]);
    /// ```
    pub fn element_wise_op<F>(
        &self,
        other: &Matrix,
        op_name: &'static str,
        op: F,
    ) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(
                op_name,
                self.shape(),
                other.shape(),
            ));
        }

        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(&a, &b)| op(a, b))
            .collect();

        Ok(self.with_data(data))
    }

    /// Elementwise sum of two matrices of the same shape.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.element_wise_op(other, "add", |a, b| a + b)
    }

    /// Elementwise difference of two matrices of the same shape.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.element_wise_op(other, "sub", |a, b| a - b)
    }

    /// Hadamard (elementwise) product of two matrices of the same shape.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.element_wise_op(other, "hadamard", |a, b| a * b)
    }

    /// Add `value` to every element.
    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.map(|x| x + value)
    }

    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: f64) -> Matrix {
        self.map(|x| x - value)
    }

    /// Multiply every element by `factor`.
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Matrix product `self * other`.
    ///
    /// Uses the naive triple loop. Each output element is accumulated from
    /// `0.0` over `k = 0..self.cols` in increasing order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InnerDimensionMismatch`] if `self.cols != other.rows`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let c = a.matmul(&a.transpose()).unwrap();
    /// assert_eq!(c.as_slice(), &[5.0, 11.0, 11.0, 25.0]);
    /// ```
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::InnerDimensionMismatch {
                left_cols: self.cols(),
                right_rows: other.rows(),
            });
        }

        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        log::trace!("matmul {m}x{k} * {k}x{n}");

        let a = self.as_slice();
        let b = other.as_slice();
        let mut data = vec![0.0; checked_numel(m, n)?];
        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0;
                for p in 0..k {
                    sum += a[i * k + p] * b[p * n + j];
                }
                data[i * n + j] = sum;
            }
        }

        Matrix::from_shape_vec(m, n, data)
    }

    /// Transpose: element `(i, j)` of the result is element `(j, i)` of `self`.
    pub fn transpose(&self) -> Matrix {
        let src = self.as_slice();
        let cols = self.cols();
        Matrix::from_shape_fn(self.cols(), self.rows(), |i, j| src[j * cols + i])
    }

    /// Apply `f` to every element.
    ///
    /// The visiting order is unspecified.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let data = self.as_slice().iter().map(|&x| f(x)).collect();
        self.with_data(data)
    }

    /// New matrix of the same shape with every element set to `value`.
    pub fn set_all(&self, value: f64) -> Matrix {
        Matrix::from_shape_val(self.rows(), self.cols(), value)
    }

    /// Rewrite out-of-range elements into a zero-initialized result.
    ///
    /// Elements below `min` become `min` and elements above `max` become
    /// `max`. Elements inside `[min, max]` are *not* copied: they stay at the
    /// result's initial zero, so this behaves as a saturation mask. Use
    /// [`Matrix::clamp`] to keep in-range values.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[-1.0, 5.0, 10.0]]).unwrap();
    /// assert_eq!(m.clip(0.0, 8.0).as_slice(), &[0.0, 0.0, 8.0]);
    /// ```
    pub fn clip(&self, min: f64, max: f64) -> Matrix {
        self.map(|x| {
            if x < min {
                min
            } else if x > max {
                max
            } else {
                0.0
            }
        })
    }

    /// Limit every element to `[min, max]`, keeping in-range values.
    pub fn clamp(&self, min: f64, max: f64) -> Matrix {
        self.map(|x| {
            if x < min {
                min
            } else if x > max {
                max
            } else {
                x
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, MatrixError};
    use approx::assert_relative_eq;

    fn m23() -> Result<Matrix, MatrixError> {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn add_sub() -> Result<(), MatrixError> {
        let a = m23()?;
        let b = Matrix::from_rows(&[[0.5, 0.5, 0.5], [1.0, 1.0, 1.0]])?;
        let c = a.add(&b)?;
        assert_eq!(c.as_slice(), &[1.5, 2.5, 3.5, 5.0, 6.0, 7.0]);
        assert!(c.sub(&b)?.equals(&a));
        assert!(a.add(&b)?.equals(&b.add(&a)?));
        Ok(())
    }

    #[test]
    fn add_shape_mismatch() -> Result<(), MatrixError> {
        let a = m23()?;
        let b = Matrix::new(3, 2);
        assert_eq!(
            a.add(&b).unwrap_err(),
            MatrixError::shape_mismatch("add", (2, 3), (3, 2))
        );
        assert!(a.sub(&b).unwrap_err().is_shape_mismatch());
        assert!(a.hadamard(&b).unwrap_err().is_shape_mismatch());
        Ok(())
    }

    #[test]
    fn scalar_ops() -> Result<(), MatrixError> {
        let a = m23()?;
        assert_eq!(a.add_scalar(1.0).as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(a.sub_scalar(1.0).as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.scale(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        assert!(a.scale(1.0).equals(&a));
        assert!(a.scale(0.0).equals(&Matrix::zeros(2, 3)));
        Ok(())
    }

    #[test]
    fn hadamard() -> Result<(), MatrixError> {
        let a = m23()?;
        let c = a.hadamard(&a)?;
        assert_eq!(c.as_slice(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
        Ok(())
    }

    #[test]
    fn matmul_2x2() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let t = a.transpose();
        assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
        let c = a.matmul(&t)?;
        assert_eq!(c.as_slice(), &[5.0, 11.0, 11.0, 25.0]);
        Ok(())
    }

    #[test]
    fn matmul_rectangular() -> Result<(), MatrixError> {
        let a = m23()?;
        let b = Matrix::from_rows(&[[1.0], [0.5], [0.25]])?;
        let c = a.matmul(&b)?;
        assert_eq!(c.shape(), (2, 1));
        assert_relative_eq!(c.get(0, 0)?, 2.75);
        assert_relative_eq!(c.get(1, 0)?, 8.0);
        Ok(())
    }

    #[test]
    fn matmul_identity() -> Result<(), MatrixError> {
        let a = m23()?;
        assert!(Matrix::identity(2).matmul(&a)?.equals(&a));
        assert!(a.matmul(&Matrix::identity(3))?.equals(&a));
        Ok(())
    }

    #[test]
    fn matmul_inner_mismatch() -> Result<(), MatrixError> {
        let a = m23()?;
        let err = a.matmul(&a).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InnerDimensionMismatch {
                left_cols: 3,
                right_rows: 2
            }
        );
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('2'));
        Ok(())
    }

    #[test]
    fn matmul_empty_inner() -> Result<(), MatrixError> {
        let a = Matrix::new(2, 0);
        let b = Matrix::new(0, 3);
        let c = a.matmul(&b)?;
        assert!(c.equals(&Matrix::zeros(2, 3)));
        Ok(())
    }

    #[test]
    fn matmul_rejects_overflowing_result() {
        let a = Matrix::new(usize::MAX, 0);
        let b = Matrix::new(0, 2);
        assert_eq!(
            a.matmul(&b).unwrap_err(),
            MatrixError::ShapeOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn transpose_roundtrip() -> Result<(), MatrixError> {
        let a = m23()?;
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1)?, a.get(1, 2)?);
        assert!(t.transpose().equals(&a));
        Ok(())
    }

    #[test]
    fn map_and_set_all() -> Result<(), MatrixError> {
        let a = m23()?;
        let sq = a.map(|x| x * x);
        assert_eq!(sq.as_slice(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
        let s = a.set_all(7.0);
        assert_eq!(s.shape(), (2, 3));
        assert!(s.as_slice().iter().all(|&v| v == 7.0));
        Ok(())
    }

    #[test]
    fn clip_zeroes_in_range() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[-1.0, 5.0, 10.0]])?;
        assert_eq!(a.clip(0.0, 8.0).as_slice(), &[0.0, 0.0, 8.0]);
        Ok(())
    }

    #[test]
    fn clamp_keeps_in_range() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[-1.0, 5.0, 10.0]])?;
        assert_eq!(a.clamp(0.0, 8.0).as_slice(), &[0.0, 5.0, 8.0]);
        Ok(())
    }
}
