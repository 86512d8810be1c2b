//! `linmat-core`: dense, immutable matrix and vector algebra.
//!
//! Provides the [`Scalar`] abstraction with its exact/approximate
//! [`Number`] implementation, row-major [`Matrix`] and [`Vector`] values,
//! structural transforms, and the classic decompositions (Gauss-Jordan
//! RREF, LU with partial pivoting, Gram-Schmidt/QR) together with the
//! determinants, inverses, solvers, and norms derived from them.
//!
//! # Design
//!
//! - Every value is immutable once built; each operation returns a new one.
//! - Every failure is a [`CoreError`] value, reported before any part of
//!   the result is built.
//! - Exact scalars are compared exactly. Asking whether two approximate
//!   scalars are equal is an error, not a guess.
//! - Callbacks passed to `build` and the maps may suspend; they are driven
//!   by a [`Task`] loop and never recurse.
//!
//! ```
//! use linmat_core::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, [1, 2, 3, 4].map(Number::exact).to_vec())?;
//! assert_eq!(a.determinant()?, Number::exact(-2));
//! assert!(a.matmul(&a.inverse()?)?.equals(&Matrix::identity(2))?);
//! # Ok::<(), CoreError>(())
//! ```

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod number;
pub mod shape;
pub mod step;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::Scalar;
pub use error::{CoreError, Result};
pub use matrix::Matrix;
pub use number::Number;
pub use step::{Step, Task};
pub use vector::Vector;

/// Items intended for glob-import: `use linmat_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::Scalar;
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{LuDecomposition, QrDecomposition};
    pub use crate::matrix::Matrix;
    pub use crate::number::Number;
    pub use crate::step::{Step, Task};
    pub use crate::vector::Vector;
}
