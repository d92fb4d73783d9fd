use crate::{
    config::Config, generic::minimal_pcg::MinimalPCG32, structures::atom::Atom,
    structures::clause::CClause,
};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// A context to solve the formula `clauses` on atoms 1 to (at least) `atom_count`.
    pub fn from_clauses(clauses: Vec<CClause>, atom_count: Atom, config: Config) -> Self {
        let original_count = clauses.len();
        Self::from_snapshot(clauses, atom_count, original_count, config)
    }

    /// A context over a snapshot of some formula with learnt clauses.
    ///
    /// The first `original_count` clauses are the formula, and the remaining clauses are taken to be consequences of the formula.
    /// Only clauses learnt by the context are returned by [learnt_clauses](GenericContext::learnt_clauses).
    pub fn from_snapshot(
        clauses: Vec<CClause>,
        atom_count: Atom,
        original_count: usize,
        config: Config,
    ) -> Self {
        let rng = MinimalPCG32::seed_from_u64(config.seed);
        Self::from_parts(clauses, atom_count, original_count, config, rng)
    }
}
