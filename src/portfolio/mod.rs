/*!
A portfolio of contexts, which share learnt clauses.

# Overview

A portfolio runs one unbounded [solve](crate::context::GenericContext::solve) of the formula on its own thread, and alongside the solve runs rounds of bounded [learning](crate::context::GenericContext::learn) solves.

Each round:
- Learners are spawned, each with an independent context built from a copy of the shared clause list.
  The shared clause list is read-only for the round.
- Each learner solves until some count of conflicts, and the first learner to reach its count ends the round for every learner.
- Clauses learnt by each learner are merged into the shared clause list, and a set of clauses seen so far notes which learnt clauses are new.
  Every learnt clause is added to the shared list, while only new clauses count toward the growth of the list.

The parameters of learners [change](RoundSchedule) every few rounds.

The first context to find the formula satisfiable or unsatisfiable offers a verdict to a [slot](VerdictSlot) shared by every thread.
The first verdict offered is kept, and every other context is cancelled through the finished token of the slot.

The portfolio ends once some verdict is held, or the time limit passes.
If the round limit is reached first, the unbounded solve continues until a verdict or the time limit.

# Example

```rust
# use portfolio_sat::config::PortfolioConfig;
# use portfolio_sat::portfolio::Portfolio;
# use portfolio_sat::reports::Report;
let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2, 3], vec![-2, 4], vec![-3, -4]];

let mut config = PortfolioConfig::default();
config.worker_count = 4;
config.seed = Some(7);

let mut portfolio = Portfolio::new(clauses, 4, config);
let report = portfolio.solve().expect("no worker panic");

assert_eq!(report.report(), Report::Unsatisfiable);
```
*/

mod schedule;
pub use schedule::RoundSchedule;

mod verdict;
pub use verdict::{PortfolioReport, Verdict, VerdictSlot};

use std::{
    collections::HashSet,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use crate::{
    config::PortfolioConfig,
    context::Context,
    generic::cancel::CancelToken,
    misc::log::targets,
    reports::Report,
    structures::{atom::Atom, clause::CClause},
    types::err::{ErrorKind, PortfolioError},
};

/// A portfolio.
pub struct Portfolio {
    config: PortfolioConfig,

    /// The shared clause list, original clauses first.
    clauses: Vec<CClause>,

    original_count: usize,

    atom_count: Atom,

    /// Every clause seen, original or learnt.
    seen: HashSet<CClause>,

    distinct_learnt: usize,
}

impl Portfolio {
    pub fn new(clauses: Vec<CClause>, atom_count: Atom, config: PortfolioConfig) -> Self {
        let seen = clauses.iter().cloned().collect();
        Portfolio {
            config,
            original_count: clauses.len(),
            clauses,
            atom_count,
            seen,
            distinct_learnt: 0,
        }
    }

    /// The shared clause list.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn original_clauses(&self) -> &[CClause] {
        &self.clauses[..self.original_count]
    }

    /// Determines the satisfiability of the formula, with a portfolio of contexts.
    ///
    /// An error is returned only if some worker panicked.
    pub fn solve(&mut self) -> Result<PortfolioReport, ErrorKind> {
        let start = Instant::now();
        let base_seed = self.config.seed.unwrap_or_else(clock_seed);
        let slot = VerdictSlot::default();

        log::info!(target: targets::PORTFOLIO,
            "Portfolio of {} workers over {} clauses on {} atoms, seed {base_seed}",
            self.config.worker_count, self.original_count, self.atom_count
        );

        let rounds = crossbeam::scope(|scope| -> Result<usize, ErrorKind> {
            let solver = {
                let slot = &slot;
                let clauses = self.clauses.clone();
                let (atom_count, original_count) = (self.atom_count, self.original_count);
                let mut config = self.config.solver.clone().with_seed(
                    PortfolioConfig::instance_seed(base_seed, 0, 0),
                );
                config.time_limit = Some(match config.time_limit {
                    Some(limit) => limit.min(self.config.time_limit),
                    None => self.config.time_limit,
                });

                scope.spawn(move |_| {
                    let mut the_context =
                        Context::from_snapshot(clauses, atom_count, original_count, config);
                    the_context.set_terminate(slot.finished());
                    match the_context.solve() {
                        Report::Satisfiable => {
                            slot.offer(Verdict::Satisfiable(the_context.valuation()), "solver", start);
                        }
                        Report::Unsatisfiable => {
                            slot.offer(Verdict::Unsatisfiable, "solver", start);
                        }
                        Report::Unknown => {}
                    }
                })
            };

            let rounds = self.run_rounds(&slot, base_seed, start);
            if rounds.is_err() {
                slot.finished().cancel();
            }

            let solver_result = solver.join();
            slot.finished().cancel();
            solver_result.map_err(|_| PortfolioError::WorkerPanic)?;

            rounds
        })
        .map_err(|_| PortfolioError::WorkerPanic)??;

        let verdict = slot.take();
        let report = PortfolioReport {
            verdict,
            rounds,
            clause_count: self.clauses.len(),
            distinct_learnt: self.distinct_learnt,
            time: start.elapsed(),
        };

        log::info!(target: targets::PORTFOLIO,
            "{} after {rounds} rounds, {} clauses ({} distinct learnt), {:.2?}",
            report.report(), report.clause_count, report.distinct_learnt, report.time
        );

        Ok(report)
    }

    /// Runs rounds of learners until some verdict is held, the time limit passes, or the round limit is reached.
    ///
    /// If the time limit passes the finished token is cancelled, to end the unbounded solve.
    fn run_rounds(
        &mut self,
        slot: &VerdictSlot,
        base_seed: u64,
        start: Instant,
    ) -> Result<usize, ErrorKind> {
        let finished = slot.finished();
        let learner_count = self.config.worker_count.saturating_sub(1);
        let mut schedule = RoundSchedule::from_config(&self.config);
        let mut rounds = 0;

        if learner_count == 0 {
            return Ok(rounds);
        }

        while rounds < self.config.round_limit && !finished.is_cancelled() {
            let Some(remaining) = self.config.time_limit.checked_sub(start.elapsed()) else {
                log::info!(target: targets::PORTFOLIO, "Time limit passed");
                finished.cancel();
                break;
            };

            rounds += 1;
            let learnt = self.run_round(rounds, learner_count, &schedule, slot, base_seed, start, remaining)?;
            let added = self.merge(learnt);

            log::info!(target: targets::PORTFOLIO,
                "[{rounds}/{}] {added} clauses added, clause count {}",
                self.config.round_limit, self.clauses.len()
            );

            if rounds % self.config.change_interval.max(1) == 0 {
                schedule.advance();
                log::debug!(target: targets::PORTFOLIO, "Schedule advanced to {schedule:?}");
            }
        }

        Ok(rounds)
    }

    /// Runs the learners of a round, and returns the clauses learnt by each learner, in order of learner.
    #[allow(clippy::too_many_arguments)]
    fn run_round(
        &self,
        round: usize,
        learner_count: usize,
        schedule: &RoundSchedule,
        slot: &VerdictSlot,
        base_seed: u64,
        start: Instant,
        remaining: Duration,
    ) -> Result<Vec<Vec<CClause>>, ErrorKind> {
        let round_token = CancelToken::new();
        let snapshot: &[CClause] = &self.clauses;
        let (atom_count, original_count) = (self.atom_count, self.original_count);

        crossbeam::scope(|scope| {
            let handles = (1..=learner_count)
                .map(|worker| {
                    let round_token = &round_token;
                    let budget = schedule.conflict_budget;
                    let config = schedule.learner_config(
                        &self.config.learner,
                        PortfolioConfig::instance_seed(base_seed, round, worker),
                        remaining,
                    );

                    scope.spawn(move |_| {
                        let mut the_context = Context::from_snapshot(
                            snapshot.to_vec(),
                            atom_count,
                            original_count,
                            config,
                        );
                        the_context.set_terminate(slot.finished());

                        let name = format!("learner {worker} of round {round}");
                        match the_context.learn(budget, round_token) {
                            Report::Satisfiable => {
                                slot.offer(Verdict::Satisfiable(the_context.valuation()), &name, start);
                            }
                            Report::Unsatisfiable => {
                                slot.offer(Verdict::Unsatisfiable, &name, start);
                            }
                            Report::Unknown => {}
                        }

                        the_context.learnt_clauses().to_vec()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| ErrorKind::from(PortfolioError::WorkerPanic))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| PortfolioError::WorkerPanic)?
    }

    /// Appends every clause of `learnt` to the shared clause list, and returns a count of clauses not seen before.
    fn merge(&mut self, learnt: Vec<Vec<CClause>>) -> usize {
        let mut added = 0;
        for clause in learnt.into_iter().flatten() {
            if !self.seen.contains(&clause) {
                self.seen.insert(clause.clone());
                added += 1;
            }
            self.clauses.push(clause);
        }
        self.distinct_learnt += added;
        added
    }
}

/// A seed from the system clock.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_counts_distinct_clauses() {
        let mut portfolio = Portfolio::new(vec![vec![1, 2], vec![-1]], 2, PortfolioConfig::default());

        let added = portfolio.merge(vec![vec![vec![2]], vec![vec![2], vec![1, 2]]]);

        assert_eq!(added, 1);
        assert_eq!(portfolio.clauses().len(), 5);
        assert_eq!(portfolio.original_clauses().len(), 2);
        assert_eq!(portfolio.distinct_learnt, 1);
    }
}
