//! `Display` formatting for [`Matrix`] and [`Vector`].

use core::fmt;

use crate::Scalar;
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat({},{})[", self.height, self.width)?;
        if self.is_empty() {
            return write!(f, "]");
        }
        writeln!(f)?;
        for r in 0..self.height {
            write!(f, "  [")?;
            for (c, v) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            if r + 1 < self.height {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "]")
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector({})[", self.len())?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
