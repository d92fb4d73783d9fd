use std::time::Duration;

use crate::config::{defaults, Config};

/// Configuration of a [portfolio](crate::portfolio).
#[derive(Clone, Debug)]
pub struct PortfolioConfig {
    /// Threads used, including the unbounded solver thread.
    /// Each round spawns one fewer learners than this.
    pub worker_count: usize,

    /// Wall-clock limit of the portfolio.
    pub time_limit: Duration,

    /// The greatest number of learner rounds.
    pub round_limit: usize,

    /// Rounds between each change to the learner schedule.
    pub change_interval: usize,

    /// Configuration of the unbounded solver.
    pub solver: Config,

    /// Configuration of learners in the first round.
    pub learner: Config,

    /// Conflict budget of a learner in the first round.
    pub conflict_budget: usize,

    /// Bound on the conflict budget in the first round.
    pub conflict_bound: usize,

    /// Amount subtracted from the learner restart budget at each change.
    pub restart_decay: u32,

    /// The learner restart budget is only decreased while above this value.
    pub restart_floor: u32,

    /// Base seed of the portfolio, otherwise a seed is taken from the clock.
    pub seed: Option<u64>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            worker_count: defaults::WORKER_COUNT,
            time_limit: defaults::PORTFOLIO_TIME_LIMIT,
            round_limit: defaults::ROUND_LIMIT,
            change_interval: defaults::CHANGE_INTERVAL,

            solver: Config::default(),

            learner: Config::default()
                .with_restart_budget(defaults::LEARNER_RESTART_BUDGET)
                .with_branch_ratio(
                    defaults::LEARNER_BRANCH_RATIO.0,
                    defaults::LEARNER_BRANCH_RATIO.1,
                ),

            conflict_budget: defaults::LEARNER_CONFLICT_BUDGET,
            conflict_bound: defaults::LEARNER_CONFLICT_BOUND,
            restart_decay: defaults::LEARNER_RESTART_DECAY,
            restart_floor: defaults::LEARNER_RESTART_FLOOR,

            seed: None,
        }
    }
}

impl PortfolioConfig {
    /// The seed of the instance run by `worker` in `round`, derived from `base`.
    ///
    /// The unbounded solver is worker 0 of round 0.
    pub fn instance_seed(base: u64, round: usize, worker: usize) -> u64 {
        base.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add((round as u64) << 20)
            .wrapping_add(worker as u64)
    }
}
