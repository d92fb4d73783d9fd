//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use portfolio_sat::structures::clause::Clause;
//! let clause = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//! assert!(!clause.is_tautology());
//!
//! let assignment = (1..=41).map(|atom| -atom).collect::<Vec<_>>();
//! assert!(clause.satisfied_by(&assignment));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Clauses in a context do not contain repeated literals, and learnt clauses never contain both a literal and its negation.

use std::collections::HashSet;

use crate::structures::literal::{CLiteral, Literal};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// True if the clause contains some literal and the negation of that literal, false otherwise.
    fn is_tautology(&self) -> bool;

    /// True if some literal of the clause is in `assignment`, false otherwise.
    ///
    /// The assignment is given as a sequence of literals, one per atom, in atom order.
    /// So, the literal in the assignment for atom *a* is at index *a - 1*.
    fn satisfied_by(&self, assignment: &[CLiteral]) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_tautology(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len());
        for literal in self {
            if seen.contains(&literal.negate()) {
                return true;
            }
            seen.insert(*literal);
        }
        false
    }

    fn satisfied_by(&self, assignment: &[CLiteral]) -> bool {
        self.iter().any(|literal| {
            let index = (literal.atom() as usize).wrapping_sub(1);
            assignment.get(index) == Some(literal)
        })
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_tautology(&self) -> bool {
        self.as_slice().is_tautology()
    }

    fn satisfied_by(&self, assignment: &[CLiteral]) -> bool {
        self.as_slice().satisfied_by(assignment)
    }
}
