/*!
Hyperparameters of a solve which change as the solve progresses.

At the start of a solve the schedule is read from the [configuration](crate::config::Config).
Then, at each restart, the schedule is [annealed](Schedule::anneal):
- The denominator of the random branching ratio grows by one, up to its ceiling.
  As the numerator is fixed, random decisions become rarer.
- If no clause was admitted since the last anneal, the learnt clause size cap grows by one, up to its ceiling.
  Otherwise, the cap shrinks by one, to no less than its floor.
- The restart interval doubles while below its bound.
  Once at the bound, the interval is reset to its base and the bound doubles, up to its ceiling.

```rust
# use portfolio_sat::config::Config;
# use portfolio_sat::context::Schedule;
let mut schedule = Schedule::from_config(&Config::default());
assert_eq!(schedule.restart_interval, 100);

schedule.anneal();
assert_eq!(schedule.restart_interval, 100);
assert_eq!(schedule.restart_interval_bound.value, 200);

schedule.anneal();
assert_eq!(schedule.restart_interval, 200);
```
*/

use crate::config::{Config, ConfigOption};

/// The schedule of a context.
#[derive(Clone, Debug)]
pub struct Schedule {
    pub branch_numerator: u32,

    /// The value grows toward the max.
    pub branch_denominator: ConfigOption<u32>,

    pub learnt_size_limit: ConfigOption<usize>,

    /// Conflicts since the last restart required for a restart.
    pub restart_interval: u32,

    /// The value the restart interval is reset to.
    pub restart_interval_base: u32,

    /// The value grows toward the max.
    pub restart_interval_bound: ConfigOption<u32>,

    /// Restarts remaining.
    pub restart_budget: u32,

    /// Whether some clause has been admitted since the last anneal.
    pub clause_added: bool,
}

impl Schedule {
    pub fn from_config(config: &Config) -> Self {
        let interval = config.restart_interval.value;
        Schedule {
            branch_numerator: config.branch_numerator.value,
            branch_denominator: config.branch_denominator.clone(),
            learnt_size_limit: config.learnt_size_limit.clone(),

            restart_interval: interval,
            restart_interval_base: interval,
            restart_interval_bound: ConfigOption {
                name: "restart_interval_bound",
                min: interval,
                max: config.restart_interval.max,
                value: interval,
            },

            restart_budget: config.restart_budget.value,
            clause_added: false,
        }
    }

    /// Adjusts the schedule, and clears the note of an added clause.
    pub fn anneal(&mut self) {
        let denominator = self.branch_denominator.value.saturating_add(1);
        self.branch_denominator.clamp(denominator);

        let size_limit = &mut self.learnt_size_limit;
        match std::mem::take(&mut self.clause_added) {
            false if size_limit.value < size_limit.max => size_limit.value += 1,
            true if size_limit.value > size_limit.min => size_limit.value -= 1,
            _ => {}
        }

        if self.restart_interval < self.restart_interval_bound.value {
            self.restart_interval = self
                .restart_interval
                .saturating_mul(2)
                .min(self.restart_interval_bound.value);
        } else {
            self.restart_interval = self.restart_interval_base;
            let bound = self.restart_interval_bound.value.saturating_mul(2);
            self.restart_interval_bound.clamp(bound);
        }
    }
}
