use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use portfolio_sat::{
    builder::dimacs::{parse_dimacs, Formula},
    config::{Config, PortfolioConfig},
    context::Context,
    io::result::format_result,
    portfolio::Portfolio,
    reports::Report,
};

fn cnf_files(directory: &str) -> Vec<PathBuf> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cnf")
        .join(directory);

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .expect("fixture directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|extension| extension == "cnf"))
        .collect();
    files.sort();
    files
}

fn load(path: &Path) -> Formula {
    let file = File::open(path).expect("readable fixture");
    parse_dimacs(BufReader::new(file)).expect("well formed fixture")
}

mod context {
    use super::*;

    #[test]
    fn satisfiable_fixtures() {
        let files = cnf_files("sat");
        assert!(!files.is_empty());

        for path in files {
            let formula = load(&path);
            if let Some((atoms, clauses)) = formula.expected {
                assert_eq!(atoms as u32, formula.atom_count);
                assert_eq!(clauses, formula.clauses.len());
            }

            let mut the_context =
                Context::from_clauses(formula.clauses, formula.atom_count, Config::default());
            assert_eq!(the_context.solve(), Report::Satisfiable, "{path:?}");
            assert!(the_context.verify(&the_context.valuation()), "{path:?}");
        }
    }

    #[test]
    fn unsatisfiable_fixtures() {
        let files = cnf_files("unsat");
        assert!(!files.is_empty());

        for path in files {
            let formula = load(&path);
            let mut the_context =
                Context::from_clauses(formula.clauses, formula.atom_count, Config::default());
            assert_eq!(the_context.solve(), Report::Unsatisfiable, "{path:?}");
        }
    }
}

mod portfolio {
    use super::*;

    fn config() -> PortfolioConfig {
        let mut config = PortfolioConfig::default();
        config.worker_count = 4;
        config.seed = Some(41);
        config.time_limit = Duration::from_secs(60);
        config
    }

    #[test]
    fn fixtures_agree_with_directory() {
        for (directory, expected) in [("sat", Report::Satisfiable), ("unsat", Report::Unsatisfiable)] {
            for path in cnf_files(directory) {
                let formula = load(&path);
                let mut portfolio = Portfolio::new(formula.clauses, formula.atom_count, config());

                let report = portfolio.solve().expect("no worker panic");
                assert_eq!(report.report(), expected, "{path:?}");

                let verdict = report.verdict.expect("a verdict");
                let written = format_result(&verdict, portfolio.original_clauses())
                    .expect("verified result");
                assert!(written.starts_with(&format!("s {expected}")), "{path:?}");
            }
        }
    }
}
