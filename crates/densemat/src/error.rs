use thiserror::Error;

/// Error type for matrix and vector operations.
///
/// Every fallible operation in this crate returns one of these variants
/// synchronously. No operation returns a partial result on failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The operands of an elementwise operation have different shapes.
    ///
    /// # Examples
    /// - Adding a 2x3 matrix to a 3x2 matrix
    /// - Hadamard product of matrices with different row counts
    #[error("Shape mismatch in {}: left is {}x{}, right is {}x{}", .op, .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        /// Name of the operation that failed
        op: &'static str,
        /// Shape `(rows, cols)` of the left operand
        left: (usize, usize),
        /// Shape `(rows, cols)` of the right operand
        right: (usize, usize),
    },

    /// The inner dimensions of a matrix product do not agree.
    #[error("Cols and rows of left and right do not match. Left cols: {left_cols} Right rows: {right_rows}")]
    InnerDimensionMismatch {
        /// Number of columns of the left operand
        left_cols: usize,
        /// Number of rows of the right operand
        right_rows: usize,
    },

    /// The matrix has more than one row and more than one column and cannot
    /// be read as a column vector.
    #[error("Cannot create vector from matrix with {rows} rows and {cols} cols")]
    NotAVector {
        /// Rows of the offending matrix
        rows: usize,
        /// Cols of the offending matrix
        cols: usize,
    },

    /// Index exceeds the extent of the indexed dimension.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// A data buffer does not hold `rows * cols` elements.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The element count `rows * cols` does not fit in a `usize`.
    #[error("Shape {rows}x{cols} overflows the addressable element count")]
    ShapeOverflow {
        /// Requested rows
        rows: usize,
        /// Requested cols
        cols: usize,
    },

    /// The mean of a vector with no entries is undefined.
    #[error("Cannot compute the mean of an empty vector")]
    EmptyVector,
}

impl MatrixError {
    /// Creates a ShapeMismatch error for the named operation.
    pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::ShapeMismatch { op, left, right }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Returns true if the operand dimensions violated an operation's precondition.
    ///
    /// This groups elementwise mismatches, matrix product inner-dimension
    /// mismatches and failed vector conversions.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. }
                | Self::InnerDimensionMismatch { .. }
                | Self::NotAVector { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_lists_both_shapes() {
        let err = MatrixError::shape_mismatch("add", (2, 3), (3, 2));
        assert_eq!(
            err.to_string(),
            "Shape mismatch in add: left is 2x3, right is 3x2"
        );
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn inner_dimension_message_lists_both_extents() {
        let err = MatrixError::InnerDimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Left cols: 3"));
        assert!(msg.contains("Right rows: 2"));
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn index_errors_are_not_shape_errors() {
        assert!(!MatrixError::index_out_of_bounds(4, 3).is_shape_mismatch());
        assert!(!MatrixError::EmptyVector.is_shape_mismatch());
        assert!(!MatrixError::invalid_shape(6, 5).is_shape_mismatch());
    }

    #[test]
    fn shape_overflow_message_lists_extents() {
        let err = MatrixError::ShapeOverflow { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "Shape 3x7 overflows the addressable element count"
        );
    }
}
