//! Output of the result of a solve.

pub mod result;
