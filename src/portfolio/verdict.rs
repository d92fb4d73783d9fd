//! The one-shot record of the first verdict found by some worker of a portfolio.

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::{
    generic::cancel::CancelToken, misc::log::targets, reports::Report,
    structures::literal::CLiteral,
};

/// A verdict on the satisfiability of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Satisfiable, with a valuation given as one literal per atom, in order of atom.
    Satisfiable(Vec<CLiteral>),

    Unsatisfiable,
}

impl Verdict {
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable => Report::Unsatisfiable,
        }
    }
}

/// Holds the first verdict offered, and raises the finished token once some verdict is held.
#[derive(Debug, Default)]
pub struct VerdictSlot {
    verdict: Mutex<Option<Verdict>>,
    finished: CancelToken,
}

impl VerdictSlot {
    /// A token cancelled once some verdict is held.
    pub fn finished(&self) -> CancelToken {
        self.finished.clone()
    }

    /// Offers `verdict` from `worker`, returning true if the verdict was the first offered.
    pub fn offer(&self, verdict: Verdict, worker: &str, start: Instant) -> bool {
        let mut held = match self.verdict.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match held.as_ref() {
            Some(_) => false,
            None => {
                log::info!(target: targets::PORTFOLIO, "{worker} finished ({}) after {:.2?}", verdict.report(), start.elapsed());
                *held = Some(verdict);
                self.finished.cancel();
                true
            }
        }
    }

    /// The held verdict, if any.
    pub fn take(self) -> Option<Verdict> {
        match self.verdict.into_inner() {
            Ok(verdict) => verdict,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// A report on a solve by a portfolio.
#[derive(Clone, Debug)]
pub struct PortfolioReport {
    pub verdict: Option<Verdict>,

    /// Rounds of learners completed.
    pub rounds: usize,

    /// The size of the shared clause list at the end of the solve.
    pub clause_count: usize,

    /// Distinct learnt clauses added to the shared clause list.
    pub distinct_learnt: usize,

    pub time: Duration,
}

impl PortfolioReport {
    pub fn report(&self) -> Report {
        match &self.verdict {
            Some(verdict) => verdict.report(),
            None => Report::Unknown,
        }
    }

    /// The satisfying valuation, if the formula was found to be satisfiable.
    pub fn valuation(&self) -> Option<&[CLiteral]> {
        match &self.verdict {
            Some(Verdict::Satisfiable(valuation)) => Some(valuation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_wins() {
        let slot = VerdictSlot::default();
        let finished = slot.finished();
        let start = Instant::now();

        assert!(!finished.is_cancelled());
        assert!(slot.offer(Verdict::Unsatisfiable, "a", start));
        assert!(finished.is_cancelled());
        assert!(!slot.offer(Verdict::Satisfiable(vec![1]), "b", start));

        assert_eq!(slot.take(), Some(Verdict::Unsatisfiable));
    }

    #[test]
    fn offers_race_across_threads() {
        let slot = VerdictSlot::default();
        let start = Instant::now();

        let wins = crossbeam::scope(|scope| {
            let handles = (0..8)
                .map(|worker| {
                    let slot = &slot;
                    scope.spawn(move |_| {
                        slot.offer(Verdict::Satisfiable(vec![worker]), "worker", start)
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("no panic"))
                .filter(|won| *won)
                .count()
        })
        .expect("no panic");

        assert_eq!(wins, 1);
        assert!(slot.take().is_some());
    }
}
