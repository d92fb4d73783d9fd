/*!
Determines the satisfiability of the formula in a context.

# Overview

A solve alternates between decisions and propagation:

```none
                 +-------------+
        +------->| restart_due |--- if due ---> restart, and preprocess
        |        +-------------+
        |               |
        |               ⌄
        |       +---------------+
        |       | make_decision |----> satisfiable, if every atom has a value
        |       +---------------+
        |               |
        |               ⌄
        |           +-------+
        +-----------|  bcp  |<--------------------------+
                    +-------+                           |
                        |                               |
                        | on a conflict                 |
                        ⌄                               |
       unsatisfiable, if at level 0                     |
                        |                               |
                        ⌄                               |
    conflict_analysis -> backjump -> classify / admit --+
```

Two methods share the loop:
- [solve](GenericContext::solve) runs until the formula is found satisfiable or unsatisfiable, or the solve is cancelled or out of time.
- [learn](GenericContext::learn) also ends once some count of conflicts is reached, and is used by a [portfolio](crate::portfolio) to gather learnt clauses.

A solve is cancelled through the [terminate](GenericContext::set_terminate) token of the context, which is checked after each conflict and after each restart.

# Example

```rust
# use portfolio_sat::config::Config;
# use portfolio_sat::context::Context;
# use portfolio_sat::reports::Report;
let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2]];
let mut the_context = Context::from_clauses(clauses, 2, Config::default());

assert_eq!(the_context.solve(), Report::Unsatisfiable);
```
*/

use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    generic::cancel::CancelToken,
    misc::log::targets,
    procedures::{admission::Admission, decision::DecisionOk},
    reports::Report,
    structures::clause::Clause,
    types::err,
};

/// A bound on a learning solve.
struct LearnBound<'t> {
    /// Conflicts after which the solve ends.
    conflicts: usize,

    /// Shared by the learners of a round, cancelled by the first learner to reach its bound.
    round: &'t CancelToken,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// Returns [Report::Unknown] only if the solve was cancelled, or the time limit of the configuration passed.
    ///
    /// Without a time limit the solve may not end, as some conflicts [teach nothing](crate::procedures::analysis).
    pub fn solve(&mut self) -> Report {
        self.search(None)
    }

    /// As [solve](GenericContext::solve), though the solve also ends with [Report::Unknown] once `conflicts` conflicts have been seen, or `round` is cancelled.
    ///
    /// On reaching `conflicts` conflicts `round` is cancelled.
    /// Clauses learnt are available through [learnt_clauses](GenericContext::learnt_clauses), regardless of the report.
    pub fn learn(&mut self, conflicts: usize, round: &CancelToken) -> Report {
        self.search(Some(LearnBound { conflicts, round }))
    }

    fn search(&mut self, bound: Option<LearnBound>) -> Report {
        let start = Instant::now();

        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return self.report(),
            ContextState::Solving => self.refresh(),
            ContextState::Input => {}
        }
        self.state = ContextState::Solving;

        if self.preprocess().is_err() {
            return self.conclude(ContextState::Unsatisfiable, start);
        }

        loop {
            if self.restart_due() {
                self.restart();
                if self.preprocess().is_err() {
                    return self.conclude(ContextState::Unsatisfiable, start);
                }
                if self.interrupted(&bound, start) {
                    return self.conclude(ContextState::Solving, start);
                }
            }

            match self.make_decision() {
                DecisionOk::Literal(_) => {}
                DecisionOk::Exhausted => return self.conclude(ContextState::Satisfiable, start),
            }

            while let Err(err::BCPError::Conflict(key, literal)) = self.bcp() {
                if self.trail.level() == 0 {
                    return self.conclude(ContextState::Unsatisfiable, start);
                }

                self.counters.total_conflicts += 1;
                self.counters.fresh_conflicts += 1;

                let analysis = self.conflict_analysis(key, literal);
                self.backjump(analysis.backjump_level);

                match analysis.learnt {
                    Some(clause) => match self.classify_clause(&clause) {
                        Admission::Accept => {
                            self.admit_clause(clause);
                        }

                        Admission::Unsatisfiable => {
                            return self.conclude(ContextState::Unsatisfiable, start);
                        }

                        rejection => {
                            log::trace!(target: targets::ADMISSION, "{rejection:?}: {}", clause.as_dimacs(true));
                            self.counters.rejected += 1;
                        }
                    },

                    // The conflict is revisited from the backjump level.
                    None => self.check_q.push(key),
                }

                if self.interrupted(&bound, start) {
                    return self.conclude(ContextState::Solving, start);
                }
            }

            if let Some(LearnBound { conflicts, round }) = &bound {
                if self.counters.total_conflicts >= *conflicts || round.is_cancelled() {
                    round.cancel();
                    return self.conclude(ContextState::Solving, start);
                }
            }
        }
    }

    /// True if the solve should end without a result.
    fn interrupted(&mut self, bound: &Option<LearnBound>, start: Instant) -> bool {
        self.counters.time = start.elapsed();
        self.is_terminated()
            || self
                .config
                .time_limit
                .is_some_and(|limit| self.counters.time > limit)
            || bound
                .as_ref()
                .is_some_and(|bound| bound.round.is_cancelled())
    }

    fn conclude(&mut self, state: ContextState, start: Instant) -> Report {
        self.state = state;
        self.counters.time = start.elapsed();

        log::debug!(target: targets::RESTART,
            "{}: {} conflicts, {} decisions, {} restarts, {} admitted, {} rejected, in {:.2?}",
            self.report(),
            self.counters.total_conflicts,
            self.counters.total_decisions,
            self.counters.restarts,
            self.counters.admitted,
            self.counters.rejected,
            self.counters.time,
        );

        self.report()
    }
}
