/*!
Configuration of a context, and of a portfolio.

All configuration for a context is contained within [Config].
Some parts of the configuration are adjusted during a solve (see [Schedule](crate::context::Schedule)), and so a context takes ownership of the configuration and holds the adjusted values in its schedule.

A [portfolio](crate::portfolio) is configured by [PortfolioConfig], which contains a [Config] for the unbounded solver and a [Config] for the first round of learners.

```rust
# use portfolio_sat::config::Config;
let mut config = Config::default();
config.restart_interval.clamp(1_000_000);

assert_eq!(config.restart_interval.value, config.restart_interval.max);
```
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

mod portfolio;
pub use portfolio::PortfolioConfig;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The numerator of the probability of choosing a decision atom at random, rather than by activity.
    pub branch_numerator: ConfigOption<u32>,

    /// The denominator of the probability of choosing a decision atom at random.
    pub branch_denominator: ConfigOption<u32>,

    /// Learnt clauses longer than this are admitted only if asserting.
    pub learnt_size_limit: ConfigOption<usize>,

    /// Conflicts between restarts, at the start of a solve.
    pub restart_interval: ConfigOption<u32>,

    /// The number of restarts permitted.
    pub restart_budget: ConfigOption<u32>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<Duration>,

    /// Seed for the source of randomness.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch_numerator: ConfigOption {
                name: "branch_numerator",
                min: 0,
                max: defaults::DENOMINATOR_MAX,
                value: defaults::BRANCH_RATIO.0,
            },

            branch_denominator: ConfigOption {
                name: "branch_denominator",
                min: 1,
                max: defaults::DENOMINATOR_MAX,
                value: defaults::BRANCH_RATIO.1,
            },

            learnt_size_limit: ConfigOption {
                name: "learnt_size_limit",
                min: defaults::LEARNT_SIZE_MIN,
                max: defaults::LEARNT_SIZE_MAX,
                value: defaults::LEARNT_SIZE_MIN,
            },

            restart_interval: ConfigOption {
                name: "restart_interval",
                min: 1,
                max: defaults::RESTART_INTERVAL_MAX,
                value: defaults::RESTART_INTERVAL_BASE,
            },

            restart_budget: ConfigOption {
                name: "restart_budget",
                min: 0,
                max: u32::MAX,
                value: defaults::RESTART_BUDGET,
            },

            time_limit: None,

            seed: 0,
        }
    }
}

impl Config {
    /// A configuration with the given random branching ratio, within bounds.
    pub fn with_branch_ratio(mut self, numerator: u32, denominator: u32) -> Self {
        self.branch_denominator.clamp(denominator);
        self.branch_numerator.clamp(numerator);
        self
    }

    /// A configuration with the given restart budget.
    pub fn with_restart_budget(mut self, budget: u32) -> Self {
        self.restart_budget.clamp(budget);
        self
    }

    /// A configuration with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
