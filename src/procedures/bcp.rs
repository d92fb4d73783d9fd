/*!
A context method for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview

Propagation drains the [check queue](crate::db::check_q).
For each clause taken from the queue:
- A clause of one literal forces the literal.
- Otherwise, if the literal at one watch is false the literal at the other watch is forced.
  By the way [watches are updated](crate::db::watches::WatchDB::update_watches), a watch on a false literal means no literal other than the literal at the other watch is open.

A forced literal which is already true is skipped, and a forced literal which is false is a conflict.
A forced literal with no value is [assigned](GenericContext::assign_and_queue), and so the clauses containing the negation of the literal are queued in turn.

# Example

```rust,ignore
match self.bcp() {
    Err(err::BCPError::Conflict(key, literal)) => {
        let analysis = self.conflict_analysis(key, literal);
        ...
    }
    Ok(()) => match self.make_decision() {
        ...
    },
}
```
*/

use crate::{
    context::GenericContext,
    db::AssignmentSource,
    misc::log::targets,
    procedures::assign::ValuationStatus,
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// On a conflict the check queue is cleared.
    pub fn bcp(&mut self) -> Result<(), err::BCPError> {
        while let Some(key) = self.check_q.next_key() {
            let Some(clause) = self.clause_db.get(key) else {
                continue;
            };

            let forced = match clause.len() {
                0 => None,
                1 => Some(clause[0]),
                _ => {
                    let watches = self.watch_db.watches_of(key);
                    let (a, b) = (clause[watches.a], clause[watches.b]);
                    if self.atom_db.is_false(a) {
                        Some(b)
                    } else if self.atom_db.is_false(b) {
                        Some(a)
                    } else {
                        None
                    }
                }
            };

            let Some(literal) = forced else {
                continue;
            };

            match self.assign_and_queue(literal, AssignmentSource::Clause(key)) {
                ValuationStatus::None => {
                    log::trace!(target: targets::PROPAGATION, "{key} forced {literal}");
                }

                ValuationStatus::Set => {}

                ValuationStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key} forcing {literal}");
                    self.check_q.clear();
                    return Err(err::BCPError::Conflict(key, literal));
                }
            }
        }
        Ok(())
    }
}
