/*!
Analysis of a conflict, by resolution to the first unique implication point.

# Overview

Analysis begins with the clause found to be in conflict, and the literal the clause attempted to assert.
The atom of that literal has a value, though it is treated as if valued last at the current level, as the assertion is what revealed the conflict.

Then, the clause is repeatedly resolved with the antecedent of the literal of the clause at the current level which was most recently assigned (and has an antecedent), until fewer than two literals of the clause were propagated at the current level.
The decision of the current level is not counted, and so the resolved clause may hold both the decision and one propagated literal of the current level.

If no resolution step is made nothing is learnt.
For example, a conflict between the decision and a single propagated literal gives nothing to learn.

The number of resolution steps is bounded by the length of the trail.

# Backjump level

The backjump level is the greatest level among the literals of the resolved clause which is below the current level, or level 0 if there is no such level.

# Example

```rust,ignore
let analysis = self.conflict_analysis(key, literal);
self.backjump(analysis.backjump_level);
if let Some(clause) = analysis.learnt {
    ...
}
```
*/

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// The result of conflict analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The resolved clause, if at least one resolution step was made.
    pub learnt: Option<CClause>,

    /// The level to backjump to.
    pub backjump_level: LevelIndex,

    /// A count of resolution steps made.
    pub resolution_steps: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: ClauseKey, literal: CLiteral) -> AnalysisResult {
        let current_level = self.trail.level();
        let mut resolved = self.clause_db.get(key).cloned().unwrap_or_default();

        let conflict_atom = literal.atom();
        let (recorded_level, recorded_order) =
            self.atom_db
                .overlay_level_order(conflict_atom, current_level, self.trail.next_order());

        let step_limit = self.trail.len();
        let mut resolution_steps = 0;

        while resolution_steps < step_limit {
            // Literals propagated at the current level.
            let mut current_level_count = 0;
            // The most recent literal at the current level with an antecedent, as (order, atom, antecedent).
            let mut pivot: Option<(usize, Atom, ClauseKey)> = None;

            for literal in &resolved {
                let cell = self.atom_db.cell(literal.atom());
                if cell.level != current_level {
                    continue;
                }

                if let Some(antecedent) = cell.source.antecedent() {
                    current_level_count += 1;
                    if pivot.map_or(true, |(order, _, _)| cell.order > order) {
                        pivot = Some((cell.order, literal.atom(), antecedent));
                    }
                }
            }

            if current_level_count < 2 {
                break;
            }

            let Some((_, pivot_atom, antecedent)) = pivot else {
                break;
            };
            let Some(antecedent_clause) = self.clause_db.get(antecedent) else {
                break;
            };

            resolved = self
                .resolution_buffer
                .resolve(&resolved, antecedent_clause, pivot_atom);
            resolution_steps += 1;
        }

        self.atom_db
            .overlay_level_order(conflict_atom, recorded_level, recorded_order);

        let backjump_level = resolved
            .iter()
            .map(|literal| self.atom_db.cell(literal.atom()).level)
            .filter(|level| *level < current_level)
            .max()
            .unwrap_or(0);

        log::trace!(target: targets::ANALYSIS,
            "Conflict {key} at level {current_level}: {} after {resolution_steps} steps, backjump to {backjump_level}",
            resolved.as_dimacs(false)
        );

        AnalysisResult {
            learnt: (resolution_steps > 0).then_some(resolved),
            backjump_level,
            resolution_steps,
        }
    }
}
