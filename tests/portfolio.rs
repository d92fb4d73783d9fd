use std::time::Duration;

use portfolio_sat::{
    config::PortfolioConfig,
    portfolio::{Portfolio, Verdict},
    reports::Report,
    structures::clause::{CClause, Clause},
};

fn pigeonhole(pigeons: u32, holes: u32) -> Vec<CClause> {
    let atom = |pigeon: u32, hole: u32| (pigeon * holes + hole + 1) as i32;

    let mut clauses: Vec<CClause> = (0..pigeons)
        .map(|pigeon| (0..holes).map(|hole| atom(pigeon, hole)).collect())
        .collect();

    for hole in 0..holes {
        for pigeon in 0..pigeons {
            for other in pigeon + 1..pigeons {
                clauses.push(vec![-atom(pigeon, hole), -atom(other, hole)]);
            }
        }
    }
    clauses
}

fn config(workers: usize, seed: u64) -> PortfolioConfig {
    let mut config = PortfolioConfig::default();
    config.worker_count = workers;
    config.seed = Some(seed);
    config.time_limit = Duration::from_secs(60);
    config
}

#[test]
fn unsatisfiable_across_worker_counts() {
    for workers in [1, 2, 4] {
        let mut portfolio = Portfolio::new(pigeonhole(4, 3), 12, config(workers, 3));
        let report = portfolio.solve().expect("no worker panic");

        assert_eq!(report.report(), Report::Unsatisfiable);
        assert_eq!(report.verdict, Some(Verdict::Unsatisfiable));
        assert!(report.valuation().is_none());
    }
}

#[test]
fn satisfiable_valuation_verifies() {
    let clauses = pigeonhole(5, 5);
    let mut portfolio = Portfolio::new(clauses.clone(), 25, config(4, 17));
    let report = portfolio.solve().expect("no worker panic");

    assert_eq!(report.report(), Report::Satisfiable);

    let valuation = report.valuation().expect("a valuation");
    assert_eq!(valuation.len(), 25);
    assert!(clauses.iter().all(|clause| clause.satisfied_by(valuation)));
}

#[test]
fn single_worker_runs_no_rounds() {
    let mut portfolio = Portfolio::new(pigeonhole(3, 2), 6, config(1, 5));
    let report = portfolio.solve().expect("no worker panic");

    assert_eq!(report.report(), Report::Unsatisfiable);
    assert_eq!(report.rounds, 0);
    assert_eq!(report.distinct_learnt, 0);
    assert_eq!(report.clause_count, portfolio.original_clauses().len());
}

#[test]
fn shared_clauses_extend_the_formula() {
    let clauses = pigeonhole(4, 3);
    let original = clauses.len();

    let mut config = config(4, 29);
    config.round_limit = 3;

    let mut portfolio = Portfolio::new(clauses.clone(), 12, config);
    let report = portfolio.solve().expect("no worker panic");

    assert_eq!(report.report(), Report::Unsatisfiable);
    assert!(report.rounds <= 3);
    assert_eq!(portfolio.original_clauses(), clauses.as_slice());
    assert_eq!(report.clause_count, portfolio.clauses().len());
    assert!(report.distinct_learnt <= report.clause_count - original);
}

#[test]
fn empty_clause_is_immediately_unsatisfiable() {
    let clauses = vec![vec![1, 2], vec![], vec![-1]];
    let mut portfolio = Portfolio::new(clauses, 2, config(3, 1));
    let report = portfolio.solve().expect("no worker panic");

    assert_eq!(report.report(), Report::Unsatisfiable);
}
