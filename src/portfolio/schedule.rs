/*!
The schedule of learners across rounds of a portfolio.

Every [change interval](crate::config::PortfolioConfig::change_interval) rounds the schedule [advances](RoundSchedule::advance):
- The restart budget of a learner decreases by the restart decay, while above the restart floor.
- The numerator and denominator of the random branching ratio are halved together, until the numerator is 1.
- The conflict budget of a learner doubles while below its bound.
  Once at the bound, the budget is reset to its base and the bound doubles, up to its ceiling.

```rust
# use portfolio_sat::config::PortfolioConfig;
# use portfolio_sat::portfolio::RoundSchedule;
let mut schedule = RoundSchedule::from_config(&PortfolioConfig::default());
assert_eq!(schedule.conflict_budget, 64);

schedule.advance();
assert_eq!(schedule.conflict_budget, 128);
assert_eq!(schedule.branch_ratio, (64, 128));

schedule.advance();
assert_eq!(schedule.conflict_budget, 64);
assert_eq!(schedule.conflict_bound, 256);
```
*/

use std::time::Duration;

use crate::config::{defaults, Config, PortfolioConfig};

/// Parameters given to the learners of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSchedule {
    pub restart_budget: u32,
    pub branch_ratio: (u32, u32),
    pub conflict_budget: usize,
    pub conflict_base: usize,
    pub conflict_bound: usize,
    restart_decay: u32,
    restart_floor: u32,
}

impl RoundSchedule {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        RoundSchedule {
            restart_budget: config.learner.restart_budget.value,
            branch_ratio: (
                config.learner.branch_numerator.value,
                config.learner.branch_denominator.value,
            ),
            conflict_budget: config.conflict_budget,
            conflict_base: config.conflict_budget,
            conflict_bound: config.conflict_bound,
            restart_decay: config.restart_decay,
            restart_floor: config.restart_floor,
        }
    }

    pub fn advance(&mut self) {
        if self.restart_budget > self.restart_floor {
            self.restart_budget = self.restart_budget.saturating_sub(self.restart_decay);
        }

        let (numerator, denominator) = self.branch_ratio;
        if numerator > 1 {
            self.branch_ratio = (numerator / 2, (denominator / 2).max(1));
        }

        if self.conflict_budget < self.conflict_bound {
            self.conflict_budget = self
                .conflict_budget
                .saturating_mul(2)
                .min(self.conflict_bound);
        } else {
            self.conflict_budget = self.conflict_base;
            if self.conflict_bound < defaults::LEARNER_CONFLICT_BOUND_MAX {
                self.conflict_bound = self
                    .conflict_bound
                    .saturating_mul(2)
                    .min(defaults::LEARNER_CONFLICT_BOUND_MAX);
            }
        }
    }

    /// The configuration of a learner this round, from the configuration of learners in the first round.
    pub fn learner_config(&self, learner: &Config, seed: u64, time_limit: Duration) -> Config {
        let mut config = learner
            .clone()
            .with_restart_budget(self.restart_budget)
            .with_branch_ratio(self.branch_ratio.0, self.branch_ratio.1)
            .with_seed(seed);
        config.time_limit = Some(match config.time_limit {
            Some(limit) => limit.min(time_limit),
            None => time_limit,
        });
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_halves_to_one() {
        let mut schedule = RoundSchedule::from_config(&PortfolioConfig::default());
        for _ in 0..20 {
            schedule.advance();
        }
        assert_eq!(schedule.branch_ratio, (1, 2));
    }

    #[test]
    fn restart_budget_decays_to_floor() {
        let mut config = PortfolioConfig::default();
        config.learner = config.learner.with_restart_budget(450);
        let mut schedule = RoundSchedule::from_config(&config);

        let budgets = (0..6)
            .map(|_| {
                schedule.advance();
                schedule.restart_budget
            })
            .collect::<Vec<_>>();
        assert_eq!(budgets, vec![350, 250, 150, 50, 50, 50]);
    }

    #[test]
    fn conflict_bound_is_capped() {
        let mut schedule = RoundSchedule::from_config(&PortfolioConfig::default());
        for _ in 0..1000 {
            schedule.advance();
            assert!(schedule.conflict_budget <= schedule.conflict_bound);
        }
        assert_eq!(schedule.conflict_bound, defaults::LEARNER_CONFLICT_BOUND_MAX);
    }

    #[test]
    fn learner_config_takes_round_values() {
        let portfolio = PortfolioConfig::default();
        let mut schedule = RoundSchedule::from_config(&portfolio);
        schedule.advance();

        let config = schedule.learner_config(&portfolio.learner, 9, Duration::from_secs(3));
        assert_eq!(config.branch_numerator.value, 64);
        assert_eq!(config.branch_denominator.value, 128);
        assert_eq!(config.restart_budget.value, 999_900);
        assert_eq!(config.seed, 9);
        assert_eq!(config.time_limit, Some(Duration::from_secs(3)));
    }
}
