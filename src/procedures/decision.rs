/*!
Methods for choosing the value of an atom.

# Overview

A decision is made in two steps:
- An atom without a value is chosen.
  With probability *numerator / denominator* (from the [schedule](crate::context::Schedule)) the atom is taken uniformly at random from the random pool of the [atom database](crate::db::atom).
  Otherwise, the atom without a value of greatest activity is taken.
- A value for the atom is chosen by a fair coin.

The decision is then assigned at a fresh decision level.

If the pool chosen from holds no atom without a value then every atom has a value, and no decision can be made.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
*/

use crate::{
    context::GenericContext,
    db::AssignmentSource,
    misc::log::targets,
    procedures::assign::ValuationStatus,
    structures::literal::{CLiteral, Literal},
};

/// Possible results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an atom without a value and a value for the atom, and assigns the value at a fresh level.
    ///
    /// ```rust,ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        let denominator = self.schedule.branch_denominator.value.max(1);
        let random = self.rng.random_range(0..denominator) < self.schedule.branch_numerator;

        let chosen_atom = match random {
            true => self.atom_db.take_random(&mut self.rng),
            false => self.atom_db.take_most_active(),
        };

        let Some(atom) = chosen_atom else {
            return DecisionOk::Exhausted;
        };

        let decision = CLiteral::new(atom, self.rng.random_bool(0.5));
        let level = self.trail.fresh_level();
        self.counters.total_decisions += 1;

        log::trace!(target: targets::DECISION, "Decision {decision} at level {level}, random: {random}");

        match self.assign_and_queue(decision, AssignmentSource::Decision) {
            ValuationStatus::None => DecisionOk::Literal(decision),
            _ => panic!("! Decision on the valued atom {atom}"),
        }
    }
}
