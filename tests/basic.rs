use portfolio_sat::{
    config::Config, context::Context, db::AssignmentSource, generic::cancel::CancelToken,
    reports::Report,
};

fn pigeonhole(pigeons: u32, holes: u32) -> Vec<Vec<i32>> {
    let atom = |pigeon: u32, hole: u32| (pigeon * holes + hole + 1) as i32;

    let mut clauses: Vec<Vec<i32>> = (0..pigeons)
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

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_clauses(vec![vec![1]], 1, Config::default());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.valuation(), vec![1]);
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_clauses(Vec::default(), 3, Config::default());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.valuation().len(), 3);
    }

    #[test]
    fn conflict() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2, 3], vec![-2, 4], vec![-3, -4]];
        let mut the_context = Context::from_clauses(clauses, 4, Config::default());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert!(!the_context.learnt_clauses().is_empty());
    }

    #[test]
    fn decision_conflicts_teach_nothing() {
        // Every conflict is between a decision and a single propagation.
        let clauses = vec![vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]];
        let mut the_context = Context::from_clauses(clauses, 2, Config::default());

        let round = CancelToken::new();
        assert_eq!(the_context.learn(64, &round), Report::Unknown);
        assert!(the_context.counters.total_conflicts >= 64);
        assert!(the_context.learnt_clauses().is_empty());
    }

    #[test]
    fn propagation_refutes() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2]];
        let mut the_context = Context::from_clauses(clauses, 2, Config::default());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_settled_at_level_zero() {
        let clauses = vec![vec![1], vec![2, 3]];
        let mut the_context = Context::from_clauses(clauses.clone(), 3, Config::default());
        assert_eq!(the_context.solve(), Report::Satisfiable);

        let cell = the_context.atom_db.cell(1);
        assert_eq!(cell.value, Some(true));
        assert_eq!(cell.level, 0);

        let valuation = the_context.valuation();
        assert!(the_context.verify(&valuation));
        assert!(valuation.contains(&2) || valuation.contains(&3));
    }

    #[test]
    fn empty_clause() {
        let clauses = vec![vec![1, 2], vec![]];
        let mut the_context = Context::from_clauses(clauses, 2, Config::default());
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn atom_count_raised() {
        let the_context = Context::from_clauses(vec![vec![1, -7]], 2, Config::default());
        assert_eq!(the_context.atom_count, 7);
    }

    #[test]
    fn solve_is_idempotent_once_concluded() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2]];
        let mut the_context = Context::from_clauses(clauses, 2, Config::default());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
    }
}

mod admission {
    use super::*;
    use portfolio_sat::procedures::admission::Admission;

    #[test]
    fn tautology_rejected() {
        let mut the_context = Context::from_clauses(vec![vec![1, 2, 3]], 3, Config::default());

        for cap in 1..=6 {
            the_context.schedule.learnt_size_limit.value = cap;
            assert_eq!(the_context.classify_clause(&[1, -1]), Admission::Tautology);
        }
    }

    #[test]
    fn empty_learnt_clause() {
        let the_context = Context::from_clauses(vec![vec![1, 2]], 2, Config::default());
        assert_eq!(the_context.classify_clause(&[]), Admission::Unsatisfiable);
    }

    #[test]
    fn asserting_clause_accepted_over_cap() {
        let mut the_context =
            Context::from_clauses(vec![vec![1, 2, 3], vec![-1, -2, -3]], 3, Config::default());
        the_context.schedule.learnt_size_limit.value = 1;

        the_context.trail.fresh_level();
        the_context.assign_and_queue(-1, AssignmentSource::Decision);
        the_context.trail.fresh_level();
        the_context.assign_and_queue(-2, AssignmentSource::Decision);

        assert_eq!(the_context.classify_clause(&[1, 2, 3]), Admission::Accept);
    }
}

mod hard {
    use super::*;

    #[test]
    fn pigeonhole_unsatisfiable() {
        for (pigeons, holes) in [(2, 1), (3, 2), (4, 3)] {
            let clauses = pigeonhole(pigeons, holes);
            let mut the_context =
                Context::from_clauses(clauses, pigeons * holes, Config::default());
            assert_eq!(the_context.solve(), Report::Unsatisfiable);
        }
    }

    #[test]
    fn pigeonhole_satisfiable() {
        let clauses = pigeonhole(4, 4);
        let mut the_context = Context::from_clauses(clauses, 16, Config::default());
        assert_eq!(the_context.solve(), Report::Satisfiable);

        let valuation = the_context.valuation();
        assert!(the_context.verify(&valuation));
    }

    #[test]
    fn seeds_agree() {
        let clauses = pigeonhole(4, 3);
        for seed in 0..8 {
            let config = Config::default().with_seed(seed);
            let mut the_context = Context::from_clauses(clauses.clone(), 12, config);
            assert_eq!(the_context.solve(), Report::Unsatisfiable);
        }
    }
}
