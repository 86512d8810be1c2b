//! Matrix decompositions.
//!
//! | Decomposition | Module       | Factorization           |
//! |---------------|--------------|-------------------------|
//! | RREF          | [`rref`](mod@rref) | Gauss-Jordan reduced form |
//! | LU            | [`lu`]       | `PA = LU`               |
//! | QR            | [`qr`]       | `A = QR` (Gram-Schmidt) |

pub mod lu;
pub mod qr;
pub mod rref;

pub use lu::LuDecomposition;
pub use qr::{QrDecomposition, gram_schmidt};
pub use rref::rref;
