use crate::{
    config::Config,
    db::{
        atom::AtomDB, check_q::CheckQ, clause::ClauseDB, trail::Trail, watches::WatchDB,
    },
    generic::cancel::CancelToken,
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

use super::{ContextState, Counters, Schedule};

/// A generic context, paramaterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context, as given.
    pub config: Config,

    /// The current hyperparameters of a solve, initially read from the configuration.
    pub schedule: Schedule,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The watch database.
    pub watch_db: WatchDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// Clauses to be checked during BCP.
    pub check_q: CheckQ,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The greatest atom of the formula.
    pub atom_count: Atom,

    /// Checked at conflict boundaries and after each restart, a solve ends without a result once cancelled.
    pub terminate: Option<CancelToken>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context over `clauses`, the first `original_count` of which are original.
    ///
    /// `atom_count` is raised to the greatest atom in `clauses`, if required.
    pub fn from_parts(
        clauses: Vec<CClause>,
        atom_count: Atom,
        original_count: usize,
        config: Config,
        rng: R,
    ) -> Self {
        let atom_count = clauses
            .iter()
            .flatten()
            .map(|literal| literal.atom())
            .fold(atom_count, Atom::max);

        let clause_db = ClauseDB::new(clauses, original_count);
        let state = match clause_db.contains_empty() {
            true => ContextState::Unsatisfiable,
            false => ContextState::Input,
        };

        let mut the_context = GenericContext {
            schedule: Schedule::from_config(&config),
            config,
            counters: Counters::default(),

            atom_db: AtomDB::new(atom_count, &clause_db),
            clause_db,
            watch_db: WatchDB::default(),
            trail: Trail::default(),
            check_q: CheckQ::default(),
            resolution_buffer: ResolutionBuffer::new(atom_count),

            state,
            rng,
            atom_count,
            terminate: None,
        };
        the_context.refresh();
        the_context
    }

    /// Rebuilds every structure derived from the clause database, with no atom valued.
    ///
    /// Clauses, and so any learnt clause, are kept.
    pub fn refresh(&mut self) {
        self.atom_db = AtomDB::new(self.atom_count, &self.clause_db);
        self.watch_db = WatchDB::new(&self.clause_db, &mut self.rng);
        self.trail.clear();
        self.check_q.clear();
    }

    /// Ends any solve once `token` is cancelled.
    pub fn set_terminate(&mut self, token: CancelToken) {
        self.terminate = Some(token);
    }

    pub(crate) fn is_terminated(&self) -> bool {
        match &self.terminate {
            Some(token) => token.is_cancelled(),
            None => false,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The current valuation, as one literal for each atom, in order of atom.
    ///
    /// An atom without a value is given as a positive literal.
    pub fn valuation(&self) -> Vec<CLiteral> {
        (1..=self.atom_count)
            .map(|atom| match self.atom_db.value_of(atom) {
                Some(polarity) => CLiteral::new(atom, polarity),
                None => CLiteral::new(atom, true),
            })
            .collect()
    }

    /// True if `valuation` satisfies every original clause of the context.
    pub fn verify(&self, valuation: &[CLiteral]) -> bool {
        self.clause_db
            .original()
            .iter()
            .all(|clause| clause.satisfied_by(valuation))
    }

    /// Clauses learnt and admitted during a solve of the context.
    pub fn learnt_clauses(&self) -> &[CClause] {
        self.clause_db.learnt()
    }
}
