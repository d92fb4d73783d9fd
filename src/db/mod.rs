//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + An append-only arena of clauses, each indexed by a [ClauseKey]. \
//!     The first clauses are *original* clauses, any clause after these is *learnt*.
//!
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms: value, decision level, source, order of assignment, activity, and occurrences.
//!
//! - [The watch database](crate::db::watches)
//!   + Two watched positions for each clause.
//!
//! - [The trail](crate::db::trail)
//!   + Assignments, in order, partitioned by decision level.
//!
//! - [The check queue](crate::db::check_q)
//!   + Clauses to be inspected by [BCP](crate::procedures::bcp).

pub mod atom;
pub mod check_q;
pub mod clause;
pub mod trail;
pub mod watches;

/// The index of a clause in the [clause database](crate::db::clause).
///
/// Keys are stable for the lifetime of a context, as no clause is ever removed.
pub type ClauseKey = usize;

/// The index of a decision level.
pub type LevelIndex = u32;

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A free choice, made at a fresh decision level.
    Decision,

    /// An atom which occurs with only one polarity, assigned at level 0.
    Pure,

    /// Forced by the clause with the given key.
    Clause(ClauseKey),
}

impl AssignmentSource {
    /// The antecedent of the assignment, if any.
    pub fn antecedent(&self) -> Option<ClauseKey> {
        match self {
            Self::Clause(key) => Some(*key),
            _ => None,
        }
    }
}
