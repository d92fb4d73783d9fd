use portfolio_sat::{
    config::Config,
    context::Context,
    db::{trail::Assignment, AssignmentSource},
    generic::{cancel::CancelToken, minimal_pcg::MinimalPCG32},
    reports::Report,
    structures::clause::{CClause, Clause},
};

use rand::{Rng, SeedableRng};

/// A random formula of `clause_count` clauses, each of three distinct atoms from 1 to `atom_count`.
fn random_formula(rng: &mut MinimalPCG32, atom_count: u32, clause_count: usize) -> Vec<CClause> {
    (0..clause_count)
        .map(|_| {
            let mut clause: CClause = Vec::with_capacity(3);
            while clause.len() < 3 {
                let atom = rng.random_range(1..=atom_count) as i32;
                if clause.iter().all(|literal| literal.abs() != atom) {
                    clause.push(match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    });
                }
            }
            clause
        })
        .collect()
}

/// Every valuation of atoms 1 to `atom_count` which satisfies `clauses`.
fn models(clauses: &[CClause], atom_count: u32) -> Vec<Vec<i32>> {
    (0..1_u32 << atom_count)
        .map(|mask| {
            (1..=atom_count as i32)
                .map(|atom| match (mask >> (atom - 1)) & 1 {
                    1 => atom,
                    _ => -atom,
                })
                .collect::<Vec<_>>()
        })
        .filter(|valuation| clauses.iter().all(|clause| clause.satisfied_by(valuation)))
        .collect()
}

const ATOMS: u32 = 10;

/// Conflicts after which a solve of a random formula gives up.
const BUDGET: usize = 20_000;

/// A solve which ends with [Report::Unknown] after [BUDGET] conflicts.
///
/// Some unsatisfiable formulas are never refuted, as a conflict between a decision and a single propagation teaches nothing.
fn bounded_solve(the_context: &mut Context) -> Report {
    the_context.learn(BUDGET, &CancelToken::new())
}

/// Random formulas around the threshold ratio of clauses to atoms, so both outcomes are common.
fn formulas() -> impl Iterator<Item = Vec<CClause>> {
    let mut rng = MinimalPCG32::seed_from_u64(83);
    (0..40).map(move |_| random_formula(&mut rng, ATOMS, 43))
}

#[test]
fn reports_are_sound() {
    let (mut satisfiable, mut unsatisfiable) = (0, 0);

    for (index, formula) in formulas().enumerate() {
        let config = Config::default().with_seed(index as u64);
        let mut the_context = Context::from_clauses(formula.clone(), ATOMS, config);

        let satisfying = models(&formula, ATOMS);
        match bounded_solve(&mut the_context) {
            Report::Satisfiable => {
                satisfiable += 1;
                assert!(the_context.verify(&the_context.valuation()));
                assert!(!satisfying.is_empty());
            }
            Report::Unsatisfiable => {
                unsatisfiable += 1;
                assert!(satisfying.is_empty(), "formula {index} has a model");
            }
            Report::Unknown => {
                assert!(the_context.counters.total_conflicts >= BUDGET);
            }
        }
    }

    assert!(satisfiable > 0);
    assert!(satisfiable + unsatisfiable >= 30);
}

#[test]
fn learnt_clauses_are_entailed() {
    for (index, formula) in formulas().enumerate() {
        let config = Config::default().with_seed(index as u64);
        let mut the_context = Context::from_clauses(formula.clone(), ATOMS, config);
        bounded_solve(&mut the_context);

        let satisfying = models(&formula, ATOMS);
        for learnt in the_context.learnt_clauses() {
            assert!(
                satisfying.iter().all(|model| learnt.satisfied_by(model)),
                "{} is not entailed by formula {index}",
                learnt.as_dimacs(true)
            );
        }
    }
}

#[test]
fn trail_levels_are_monotone() {
    for (index, formula) in formulas().enumerate() {
        let config = Config::default().with_seed(index as u64);
        let mut the_context = Context::from_clauses(formula, ATOMS, config);

        if bounded_solve(&mut the_context) != Report::Satisfiable {
            continue;
        }

        let trail: Vec<Assignment> = the_context.trail.iter().copied().collect();
        assert_eq!(trail.len(), ATOMS as usize);

        for pair in trail.windows(2) {
            assert!(pair[0].level <= pair[1].level);
            if pair[0].level < pair[1].level {
                assert_eq!(pair[1].source, AssignmentSource::Decision);
            }
        }

        for assignment in &trail {
            let cell = the_context.atom_db.cell(assignment.literal.unsigned_abs());
            assert_eq!(cell.level, assignment.level);
            assert_eq!(cell.source, assignment.source);
        }
    }
}

#[test]
fn watches_rest_on_model() {
    for (index, formula) in formulas().enumerate() {
        let config = Config::default().with_seed(index as u64);
        let mut the_context = Context::from_clauses(formula, ATOMS, config);

        if bounded_solve(&mut the_context) != Report::Satisfiable {
            continue;
        }

        for (key, clause) in the_context.clause_db.all().iter().enumerate() {
            if clause.len() < 2 {
                continue;
            }

            let watches = the_context.watch_db.watches_of(key);
            assert_ne!(watches.a, watches.b);
            assert!(
                the_context.atom_db.is_true(clause[watches.a])
                    || the_context.atom_db.is_true(clause[watches.b]),
                "clause {key} of formula {index} has no true watch"
            );
        }
    }
}

#[test]
fn backjump_is_idempotent() {
    let clauses = vec![vec![-1, 2], vec![-2, 3], vec![-4, 5], vec![-5, 6], vec![-7, 8]];
    let mut the_context = Context::from_clauses(clauses, 8, Config::default());

    for decision in [1, 4, 7] {
        the_context.trail.fresh_level();
        the_context.assign_and_queue(decision, AssignmentSource::Decision);
        assert!(the_context.bcp().is_ok());
    }
    assert_eq!(the_context.trail.len(), 8);

    the_context.backjump(2);
    let once: Vec<Assignment> = the_context.trail.iter().copied().collect();
    assert_eq!(once.len(), 4);
    assert_eq!(once.last().map(|top| top.literal), Some(4));

    the_context.backjump(2);
    let twice: Vec<Assignment> = the_context.trail.iter().copied().collect();
    assert_eq!(once, twice);
}

#[test]
fn learning_ends_within_budget() {
    let mut rng = MinimalPCG32::seed_from_u64(5);
    let formula = random_formula(&mut rng, 40, 170);

    let round = CancelToken::new();
    let config = Config::default().with_seed(11);
    let mut the_context = Context::from_clauses(formula, 40, config);

    match the_context.learn(16, &round) {
        Report::Unknown => {
            assert!(round.is_cancelled());
            assert!(the_context.counters.total_conflicts >= 16);
        }
        Report::Satisfiable => assert!(the_context.verify(&the_context.valuation())),
        Report::Unsatisfiable => {}
    }
}

#[test]
fn cancelled_round_ends_learning() {
    let mut rng = MinimalPCG32::seed_from_u64(9);
    let formula = random_formula(&mut rng, 60, 255);

    let round = CancelToken::new();
    round.cancel();

    let mut the_context = Context::from_clauses(formula, 60, Config::default());
    let report = the_context.learn(usize::MAX, &round);

    assert!(the_context.counters.total_conflicts <= 1 || report != Report::Unknown);
}

#[test]
fn terminated_solve_is_unknown() {
    let mut rng = MinimalPCG32::seed_from_u64(13);
    let formula = random_formula(&mut rng, 60, 255);

    let terminate = CancelToken::new();
    terminate.cancel();

    let mut the_context = Context::from_clauses(formula, 60, Config::default());
    the_context.set_terminate(terminate);

    match the_context.solve() {
        Report::Unknown => assert!(the_context.counters.total_conflicts <= 1),
        Report::Satisfiable => assert!(the_context.verify(&the_context.valuation())),
        Report::Unsatisfiable => {}
    }
}
