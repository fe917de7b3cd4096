#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `densemat` provides a small dense matrix value type for numeric building
//! blocks such as neural-network layers. Every operation that is not
//! explicitly in-place allocates a fresh result; shape preconditions are
//! checked and reported through [`MatrixError`].
//!
//! - **Matrix**: a `rows x cols` grid of `f64` stored row-major
//! - **Vector**: a single-column matrix with linear indexing and reductions
//!
//! # Quick Start
//!
//! ```rust
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = a.matmul(&a.transpose()).unwrap();
//! assert_eq!(b.as_slice(), &[5.0, 11.0, 11.0, 25.0]);
//!
//! // shape violations are errors, not panics
//! assert!(a.add(&Matrix::new(2, 3)).is_err());
//! ```
//!
//! Random initialization takes the generator as an argument:
//!
//! ```rust
//! use densemat::Matrix;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let w = Matrix::new(4, 3).randomize_between(-0.5, 0.5, &mut rng);
//! assert_eq!(w.shape(), (4, 3));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Matrix`] and [`Vector`]
//! - `bincode`: `Encode`/`Decode` for [`Matrix`]

/// Bincode module for binary serialization and deserialization.
#[cfg(feature = "bincode")]
pub mod bincode;

/// Error types for matrix operations.
pub mod error;

/// The [`Matrix`] type, construction, element access and conversions.
pub mod matrix;

/// Arithmetic and shape manipulation on [`Matrix`].
pub mod ops;

/// Uniform random initialization.
pub mod random;

/// Serde module for JSON/other format serialization and deserialization.
#[cfg(feature = "serde")]
pub mod serde;

/// The [`Vector`] column vector type.
pub mod vector;

pub use crate::error::MatrixError;
pub use crate::matrix::{Matrix, EQ_TOLERANCE};
pub use crate::vector::Vector;
