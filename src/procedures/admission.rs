/*!
The admission policy for learnt clauses, and the admission of a clause to a context.

A learnt clause is [classified](GenericContext::classify_clause) after the backjump following analysis:
- The empty clause shows the formula is unsatisfiable.
- A tautology is rejected, whatever the size cap.
- A clause longer than the current size cap (see [Schedule](crate::context::Schedule)) is:
  + Accepted, if every literal but one is false, as the clause asserts the remaining literal.
  + Rejected as satisfied, if some literal is true.
  + Rejected as oversized, otherwise.
- Any other clause within the size cap is accepted.

An accepted clause is then [admitted](GenericContext::admit_clause).
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// The classification of a learnt clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The clause should be admitted.
    Accept,

    /// The clause is empty.
    Unsatisfiable,

    /// Rejected, as the clause is longer than the size cap and already satisfied.
    Satisfied,

    /// Rejected, as the clause is longer than the size cap.
    Oversized,

    /// Rejected, as the clause contains some literal and the negation of that literal.
    Tautology,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::admission](crate::procedures::admission).
    pub fn classify_clause(&self, clause: &[CLiteral]) -> Admission {
        if clause.is_empty() {
            return Admission::Unsatisfiable;
        }

        if clause.is_tautology() {
            return Admission::Tautology;
        }

        if clause.len() > self.schedule.learnt_size_limit.value {
            let false_count = clause
                .iter()
                .filter(|literal| self.atom_db.is_false(**literal))
                .count();

            if false_count == clause.len() - 1 {
                Admission::Accept
            } else if clause.iter().any(|literal| self.atom_db.is_true(*literal)) {
                Admission::Satisfied
            } else {
                Admission::Oversized
            }
        } else {
            Admission::Accept
        }
    }

    /// Stores `clause` in the clause database, and returns the key of the clause.
    ///
    /// The occurrences and activity of each atom in the clause are updated, the clause is watched, and the clause is queued for BCP.
    pub fn admit_clause(&mut self, clause: CClause) -> ClauseKey {
        log::trace!(target: targets::ADMISSION, "Admitting {}", clause.as_dimacs(true));

        let key = self.clause_db.len();
        self.atom_db.note_clause(key, &clause);

        let size = clause.len();
        let key = self.clause_db.store(clause);

        match size {
            0 | 1 => self.watch_db.watch(key, 0, 0),
            _ => {
                self.watch_db.watch(key, 0, 1);
                self.watch_db
                    .update_watches(&[key], &self.clause_db, &self.atom_db, &mut self.rng);
            }
        }

        self.check_q.push(key);
        self.schedule.clause_added = true;
        self.counters.admitted += 1;

        log::trace!(target: targets::CLAUSE_DB, "{} clauses, {} learnt", self.clause_db.len(), self.clause_db.learnt_count());
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context, db::AssignmentSource};

    fn context() -> Context {
        let clauses = vec![vec![1, 2, 3, 4], vec![-1, -2, -3, -4]];
        Context::from_clauses(clauses, 4, Config::default())
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        assert_eq!(context().classify_clause(&[]), Admission::Unsatisfiable);
    }

    #[test]
    fn tautology_rejected_regardless_of_cap() {
        let mut the_context = context();
        for cap in 1..=6 {
            the_context.schedule.learnt_size_limit.value = cap;
            assert_eq!(the_context.classify_clause(&[1, -1]), Admission::Tautology);
        }

        the_context.trail.fresh_level();
        the_context.assign_and_queue(-1, AssignmentSource::Decision);
        the_context.schedule.learnt_size_limit.value = 1;
        assert_eq!(the_context.classify_clause(&[1, -1]), Admission::Tautology);
    }

    #[test]
    fn oversized_clauses() {
        let mut the_context = context();
        the_context.schedule.learnt_size_limit.value = 1;

        assert_eq!(the_context.classify_clause(&[1, 2]), Admission::Oversized);

        the_context.trail.fresh_level();
        the_context.assign_and_queue(-1, AssignmentSource::Decision);
        assert_eq!(the_context.classify_clause(&[1, 2]), Admission::Accept);
        assert_eq!(the_context.classify_clause(&[1, 2, 3]), Admission::Oversized);

        the_context.assign_and_queue(3, AssignmentSource::Decision);
        assert_eq!(the_context.classify_clause(&[1, 2, 3]), Admission::Satisfied);
    }

    #[test]
    fn admission_updates_the_databases() {
        let mut the_context = context();
        let before = the_context.atom_db.activity_of(2);

        let key = the_context.admit_clause(vec![2, -3]);

        assert_eq!(key, 2);
        assert_eq!(the_context.learnt_clauses(), &[vec![2, -3]]);
        assert_eq!(the_context.atom_db.activity_of(2), before + 1);
        assert!(the_context.atom_db.occurrences(-3).contains(&key));
        assert!(the_context.schedule.clause_added);
        assert_eq!(the_context.check_q.next_key(), Some(key));
    }
}
