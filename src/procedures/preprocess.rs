//! Preprocessing of the formula of a context.
//!
//! Before the first decision, and after each restart, every fact which holds regardless of any decision is established at level 0:
//! - The literal of each clause of one literal is assigned.
//! - Each atom which occurs with only one polarity (a 'pure' atom) is assigned that polarity.
//!   An atom with no occurrence is valued true.
//!
//! Then, the consequences of these assignments are propagated.
//! Any conflict found during preprocessing is a conflict without a decision, and so the formula is unsatisfiable.

use crate::{
    context::GenericContext,
    db::AssignmentSource,
    misc::log::targets,
    procedures::assign::ValuationStatus,
    structures::literal::{CLiteral, Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Establishes facts at level 0, and propagates the consequences of the facts.
    ///
    /// Assumes the trail is at level 0.
    pub fn preprocess(&mut self) -> Result<(), err::BCPError> {
        for key in 0..self.clause_db.len() {
            let unit = match self.clause_db.get(key).map(|clause| clause.as_slice()) {
                Some([literal]) => *literal,
                _ => continue,
            };

            if self.assign_and_queue(unit, AssignmentSource::Clause(key))
                == ValuationStatus::Conflict
            {
                log::trace!(target: targets::PREPROCESSING, "Conflicting unit clauses on {}", unit.atom());
                return Err(err::BCPError::Conflict(key, unit));
            }
        }

        let mut pure_count = 0;
        for atom in 1..=self.atom_count {
            if self.atom_db.value_of(atom).is_some() {
                continue;
            }
            let pure = match self.atom_db.occurrence_counts(atom) {
                (_, 0) => CLiteral::new(atom, true),
                (0, _) => CLiteral::new(atom, false),
                _ => continue,
            };
            self.assign_and_queue(pure, AssignmentSource::Pure);
            pure_count += 1;
        }

        log::trace!(target: targets::PREPROCESSING, "{pure_count} pure atoms of {}", self.atom_count);

        self.bcp()
    }
}
