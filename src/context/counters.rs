use std::time::Duration;

/// Counts kept through a solve, for logs and reports.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Conflicts seen, over every restart.
    pub total_conflicts: usize,

    /// Conflicts seen since the most recent restart.
    pub fresh_conflicts: u32,

    pub total_decisions: usize,

    pub restarts: usize,

    /// Learnt clauses admitted to the clause database.
    pub admitted: usize,

    /// Learnt clauses turned away by the admission policy.
    pub rejected: usize,

    /// Time spent in the most recent solve.
    pub time: Duration,
}
