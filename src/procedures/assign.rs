/*!
Methods for assigning a value to an atom.

Every assignment passes through [assign_and_queue](GenericContext::assign_and_queue), which:
- Records the assignment on the [trail](crate::db::trail) and in the [atom database](crate::db::atom).
- Moves watches away from the literal made false by the assignment.
- Queues each clause containing the literal made false for [BCP](crate::procedures::bcp).
*/

use crate::{
    context::GenericContext,
    db::{trail::Assignment, AssignmentSource},
    structures::literal::{CLiteral, Literal},
};

/// The status of a literal relative to the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal has no value.
    None,

    /// The literal is already true.
    Set,

    /// The literal is false.
    Conflict,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The status of `literal` relative to the current valuation.
    pub fn check_assignment(&self, literal: CLiteral) -> ValuationStatus {
        match self.atom_db.value_of_literal(literal) {
            None => ValuationStatus::None,
            Some(true) => ValuationStatus::Set,
            Some(false) => ValuationStatus::Conflict,
        }
    }

    /// Makes `literal` true at the current level, if the atom of `literal` has no value.
    ///
    /// Returns the status of `literal` before the call, and so [ValuationStatus::None] indicates an assignment was made.
    pub fn assign_and_queue(
        &mut self,
        literal: CLiteral,
        source: AssignmentSource,
    ) -> ValuationStatus {
        let status = self.check_assignment(literal);
        if status != ValuationStatus::None {
            return status;
        }

        let level = self.trail.level();
        let order = self.trail.push(Assignment {
            literal,
            level,
            source,
        });
        self.atom_db.set_value(literal, level, source, order);

        let falsified = literal.negate();
        self.watch_db.update_watches(
            self.atom_db.occurrences(falsified),
            &self.clause_db,
            &self.atom_db,
            &mut self.rng,
        );
        self.check_q.extend(self.atom_db.occurrences(falsified));

        status
    }
}
