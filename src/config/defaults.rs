//! Default values and hard limits of the configuration.

use std::time::Duration;

/// The largest denominator of the random branching ratio.
pub const DENOMINATOR_MAX: u32 = 1024;

/// The least cap on the size of an admitted learnt clause.
pub const LEARNT_SIZE_MIN: usize = 1;

/// The greatest cap on the size of an admitted learnt clause.
pub const LEARNT_SIZE_MAX: usize = 6;

/// The greatest restart interval bound, and so the greatest restart interval.
pub const RESTART_INTERVAL_MAX: u32 = 65_535;

/// The restart interval at the start of a solve, and after a reset of the interval.
pub const RESTART_INTERVAL_BASE: u32 = 100;

/// The restart budget of a standalone solve.
pub const RESTART_BUDGET: u32 = 10_000;

/// The (numerator, denominator) of the random branching ratio of a standalone solve.
pub const BRANCH_RATIO: (u32, u32) = (256, 512);

/// Threads used by the portfolio, including the unbounded solver.
pub const WORKER_COUNT: usize = 16;

/// Wall-clock limit of a portfolio solve.
pub const PORTFOLIO_TIME_LIMIT: Duration = Duration::from_secs(900);

/// Rounds of learners in a portfolio solve.
pub const ROUND_LIMIT: usize = 65_535;

/// Rounds between each change to the learner schedule.
pub const CHANGE_INTERVAL: usize = 5;

/// Restart budget of a learner in the first round.
pub const LEARNER_RESTART_BUDGET: u32 = 1_000_000;

/// The amount the learner restart budget decreases by at each change.
pub const LEARNER_RESTART_DECAY: u32 = 100;

/// The learner restart budget does not decrease below this value.
pub const LEARNER_RESTART_FLOOR: u32 = 100;

/// Random branching ratio of a learner in the first round.
pub const LEARNER_BRANCH_RATIO: (u32, u32) = (128, 256);

/// Conflict budget of a learner in the first round.
pub const LEARNER_CONFLICT_BUDGET: usize = 64;

/// Conflict budget bound of a learner in the first round.
pub const LEARNER_CONFLICT_BOUND: usize = 128;

/// The greatest conflict budget bound.
pub const LEARNER_CONFLICT_BOUND_MAX: usize = 65_535;
