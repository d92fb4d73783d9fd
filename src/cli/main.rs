#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use portfolio_sat::{
    io::result::{result_path, write_result},
    portfolio::Portfolio,
    reports::Report,
    structures::clause::Clause,
};

mod misc;
mod parse;

use misc::load_formula;
use parse::CliOptions;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = parse::config_from_args(&matches);
    let options = CliOptions::from_args(&matches);

    println!("c Reading DIMACS file from {:?}", options.path);

    let formula = match load_formula(&options.path) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Error loading DIMACS: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c {} atoms, {} clauses, {} threads",
        formula.atom_count,
        formula.clauses.len(),
        config.worker_count
    );

    let mut the_portfolio = Portfolio::new(formula.clauses, formula.atom_count, config);

    let the_report = match the_portfolio.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Portfolio error: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c {} rounds, {} distinct learnt clauses shared, {:.2?}",
        the_report.rounds, the_report.distinct_learnt, the_report.time
    );

    if options.write {
        if let Some(verdict) = &the_report.verdict {
            let path = result_path(&options.path);
            match write_result(&path, verdict, the_portfolio.original_clauses()) {
                Ok(()) => println!("c Result written to {path:?}"),
                Err(e) => {
                    println!("c Failed to write result: {e:?}");
                    std::process::exit(1);
                }
            }
        }
    }

    println!("s {}", the_report.report());

    if options.model {
        if let Some(valuation) = the_report.valuation() {
            println!("v {}", valuation.as_dimacs(true));
        }
    }

    match the_report.report() {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(0),
    }
}
