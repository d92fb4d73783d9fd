//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, by a portfolio of conflict-driven clause-learning solvers which share learnt clauses.
//!
//! # Orientation
//!
//! The library is built around two structures:
//!
//! - A [context], which holds a single solver instance.
//!   A context solves exactly one (static) formula, and the only mutation of the formula during a solve is the addition of learnt clauses.
//! - A [portfolio], which runs one unbounded solve alongside repeated rounds of short, bounded, 'learning' solves over independent contexts.
//!   Clauses learnt during a round are deduplicated and appended to the formula given to contexts in the next round.
//!
//! Internally, and at a high-level, a solve of a context is viewed in terms of a handful of databases:
//! - The formula (original and learnt clauses) is stored in a [clause database](db::clause), an append-only arena indexed by [keys](db::ClauseKey).
//! - Values, decision levels, antecedents, activity, and occurrences of atoms are stored in an [atom database](db::atom).
//! - Watched literals for each clause are stored in a [watch database](db::watches).
//! - Assignments, in order, are stored on a [trail](db::trail).
//!
//! And the algorithm is factored into a collection of [procedures], each of which is a method on a context.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [portfolio] to inspect how solves are coordinated across threads.
//! - The [configuration](crate::config) to see what may be tuned.
//!
//! # Example
//!
//! ```rust
//! # use portfolio_sat::config::Config;
//! # use portfolio_sat::context::Context;
//! # use portfolio_sat::reports::Report;
//! let clauses = vec![vec![1, 2], vec![-1, 2], vec![-2, 3], vec![-2, 4], vec![-3, -4]];
//!
//! let mut the_context = Context::from_clauses(clauses, 4, Config::default());
//!
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a variety of targets defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when the cli is built with the `log` feature:
//! - Logs related to conflict analysis can be filtered with `RUST_LOG=analysis …` or,
//! - Summaries of each portfolio round can be found with `RUST_LOG=portfolio=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod io;
pub mod misc;
pub mod portfolio;
pub mod procedures;
pub mod reports;
pub mod resolution_buffer;
pub mod structures;
pub mod types;
