//! Restarts, and annealing of the schedule.
//!
//! A restart forgets every assignment and every decision, while keeping every clause.
//! So, after a restart the [preprocessing](crate::procedures::preprocess) of the formula, now with learnt clauses, is required.
//!
//! Each restart also [anneals](crate::context::Schedule::anneal) the schedule, and uses one restart from the restart budget.

use crate::{context::GenericContext, misc::log::targets};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// True if enough conflicts have been seen since the last restart, and some restart remains in the budget.
    pub fn restart_due(&self) -> bool {
        self.counters.fresh_conflicts >= self.schedule.restart_interval
            && self.schedule.restart_budget > 0
    }

    /// Forgets every assignment, and anneals the schedule.
    pub fn restart(&mut self) {
        self.schedule.anneal();
        self.refresh();

        self.schedule.restart_budget = self.schedule.restart_budget.saturating_sub(1);
        self.counters.restarts += 1;
        self.counters.fresh_conflicts = 0;

        log::debug!(target: targets::RESTART,
            "Restart {}: interval {} (bound {}), size cap {}, ratio {}/{}",
            self.counters.restarts,
            self.schedule.restart_interval,
            self.schedule.restart_interval_bound.value,
            self.schedule.learnt_size_limit.value,
            self.schedule.branch_numerator,
            self.schedule.branch_denominator.value,
        );
    }
}
