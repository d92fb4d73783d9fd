use std::{path::PathBuf, time::Duration};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use portfolio_sat::config::{defaults, PortfolioConfig};

pub fn cli() -> Command {
    Command::new("portfolio_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by a portfolio of solvers sharing learnt clauses")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to solve (optionally xz compressed, if built with the 'xz' feature)."))

        .arg(Arg::new("threads")
            .long("threads")
            .short('t')
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Threads used, including the unbounded solver.
Default: {}", defaults::WORKER_COUNT))
            .long_help(format!("Threads used, including the unbounded solver.
Default: {}

One thread runs an unbounded solve of the formula.
Each of the remaining threads runs a bounded learning solve in each round, and the clauses learnt are added to the formula for the next round.
With a single thread no rounds are run.", defaults::WORKER_COUNT)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("Wall-clock limit of the solve, in seconds.
Default: {}", defaults::PORTFOLIO_TIME_LIMIT.as_secs())))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Base seed of the portfolio.
If no seed is given, a seed is taken from the clock."))

        .arg(Arg::new("rounds")
            .long("rounds")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The greatest number of learning rounds.
Default: {}", defaults::ROUND_LIMIT)))

        .arg(Arg::new("change_interval")
            .long("change-interval")
            .value_name("ROUNDS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Rounds between each change to the learner schedule.
Default: {}", defaults::CHANGE_INTERVAL)))

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Display a satisfying valuation, if one is found."))

        .arg(Arg::new("no_write")
            .long("no-write")
            .action(ArgAction::SetTrue)
            .help("Do not write a result file beside the input."))
}

pub fn config_from_args(args: &ArgMatches) -> PortfolioConfig {
    let mut the_config = PortfolioConfig::default();

    if let Ok(Some(threads)) = args.try_get_one::<usize>("threads") {
        the_config.worker_count = (*threads).max(1)
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit = Duration::from_secs(*secs)
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed = Some(*seed)
    };

    if let Ok(Some(rounds)) = args.try_get_one::<usize>("rounds") {
        the_config.round_limit = *rounds
    };

    if let Ok(Some(interval)) = args.try_get_one::<usize>("change_interval") {
        the_config.change_interval = (*interval).max(1)
    };

    the_config
}

/// Options of the cli which do not touch the portfolio.
#[derive(Clone, Debug, Default)]
pub struct CliOptions {
    pub path: PathBuf,
    pub model: bool,
    pub write: bool,
}

impl CliOptions {
    pub fn from_args(args: &ArgMatches) -> Self {
        let path = args.get_one::<PathBuf>("path").cloned().unwrap_or_default();

        let model = args.get_flag("model");
        let write = !args.get_flag("no_write");

        CliOptions { path, model, write }
    }
}
