/*!
Methods to backjump from the current level to some lower level.

A backjump to level *l* removes assignments from the back of the trail while the assignment:
- Is above level *l*, or
- Is at level *l* and is not a decision.

Assignments at level 0 are never removed.

So, after a backjump to some level other than 0 the last assignment on the trail is the decision of that level, and propagation from the decision is queued afresh.
Any assignment removed from level *l* is recovered by that propagation, unless some learnt clause now prevents the assignment.

Each removed atom is returned to the pools of atoms to choose a decision from, and the watches of clauses containing the literal which was false are updated.

If a backjump would remove no assignment, the backjump has no effect.
Otherwise, the activity of every atom is decreased by one.

```rust
# use portfolio_sat::context::Context;
# use portfolio_sat::config::Config;
# use portfolio_sat::db::AssignmentSource;
let mut the_context = Context::from_clauses(vec![vec![-1, 2], vec![-2, 3]], 3, Config::default());

the_context.trail.fresh_level();
the_context.assign_and_queue(1, AssignmentSource::Decision);
assert!(the_context.bcp().is_ok());
assert_eq!(the_context.trail.len(), 3);

the_context.backjump(1);
assert_eq!(the_context.trail.len(), 1);
assert_eq!(the_context.atom_db.value_of(1), Some(true));
assert_eq!(the_context.atom_db.value_of(3), None);

assert!(the_context.bcp().is_ok());
assert_eq!(the_context.atom_db.value_of(3), Some(true));
```
*/

use crate::{
    context::GenericContext,
    db::{trail::Assignment, AssignmentSource, LevelIndex},
    misc::log::targets,
    structures::literal::Literal,
};

/// True if a backjump to `target` removes `assignment`.
fn removed_by_backjump(assignment: &Assignment, target: LevelIndex) -> bool {
    assignment.level > 0
        && (assignment.level > target
            || (assignment.level == target && assignment.source != AssignmentSource::Decision))
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if !self
            .trail
            .top()
            .is_some_and(|top| removed_by_backjump(top, target))
        {
            return;
        }

        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        self.atom_db.decay_activity();

        let mut watch_updates = Vec::default();
        while let Some(top) = self.trail.top().copied() {
            if !removed_by_backjump(&top, target) {
                break;
            }
            self.trail.pop();
            self.atom_db.drop_value(top.literal.atom());
            watch_updates.extend_from_slice(self.atom_db.occurrences(top.literal.negate()));
        }

        self.trail.set_level(target);
        self.watch_db
            .update_watches(&watch_updates, &self.clause_db, &self.atom_db, &mut self.rng);

        self.check_q.clear();
        if let Some(top) = self.trail.top().copied() {
            if top.level > 0 {
                if top.source != AssignmentSource::Decision {
                    panic!("! Backjump to {target} left {} at the back of the trail", top.literal);
                }
                self.check_q
                    .extend(self.atom_db.occurrences(top.literal.negate()));
            }
        }
    }
}
