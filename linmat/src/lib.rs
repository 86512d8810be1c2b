//! # Linmat
//!
//! Dense matrix and vector algebra over exact rationals and floats.
//!
//! One `use linmat::prelude::*;` gives you matrices, vectors, the
//! exact/approximate [`Number`](linmat_core::Number) type, and the LU and
//! QR decompositions.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `serde` | `Serialize`/`Deserialize` for `Matrix`, `Vector`, and `Number` |
//!
//! ```
//! use linmat::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, [2, 0, 0, 2].map(Number::exact).to_vec())?;
//! let b = Matrix::from_vec(2, 1, vec![Number::exact(4), Number::exact(6)])?;
//! let x = a.solve(&b)?;
//! assert_eq!(x.to_string(), "mat(2,1)[\n  [2],\n  [3]\n]");
//! # Ok::<(), CoreError>(())
//! ```

pub use linmat_core as core;

/// Glob-import convenience: `use linmat::prelude::*;`
pub mod prelude {
    pub use linmat_core::prelude::*;
}
