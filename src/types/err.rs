//! Error types used in the library.
//!
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve, and are always recovered from by analysis and a backjump.
//! - Some are external --- e.g. a DIMACS file may be malformed, or a result file may not be writable.
//!
//! Satisfiability, unsatisfiability, and exhaustion of some budget are not errors, and are instead given by a [Report](crate::reports::Report).
//!
//! Breaches of an invariant of the watch or trail structures are not errors either, and lead to a panic.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// The umbrella error, to which each specific error converts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    BCP(BCPError),
    Parse(ParseError),
    Portfolio(PortfolioError),
    Write(WriteError),
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    ///
    /// The key is to the clause which was found to be unsatisfiable, and the literal is the literal the clause attempted to assert.
    Conflict(ClauseKey, CLiteral),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line, e.g. the line could not be read.
    Line(usize),

    /// Some token at a specific line is not a literal.
    Literal(usize),

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from a portfolio.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PortfolioError {
    /// Some worker thread panicked, and so no report from the worker is available.
    WorkerPanic,
}

impl From<PortfolioError> for ErrorKind {
    fn from(e: PortfolioError) -> Self {
        ErrorKind::Portfolio(e)
    }
}

/// Errors when writing the result of a solve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WriteError {
    /// The result file could not be created or written to.
    File,

    /// The assignment does not satisfy the original clause at the given index.
    /// This is quite serious, and indicates some corruption of the watch or trail structures.
    Unverified(usize),
}

impl From<WriteError> for ErrorKind {
    fn from(e: WriteError) -> Self {
        ErrorKind::Write(e)
    }
}
