//! Building a formula from some external source.

pub mod dimacs;
