/*!
The context, within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and the procedures of a solve are implemented for the generic context.
A [Context] fixes the source of randomness to [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32), and is built from a formula and a [configuration](crate::config::Config).

# Example
```rust
# use portfolio_sat::context::Context;
# use portfolio_sat::config::Config;
# use portfolio_sat::reports::Report;
let clauses = vec![vec![1], vec![2, 3]];
let mut the_context = Context::from_clauses(clauses, 3, Config::default());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.atom_db.value_of(1), Some(true));

let valuation = the_context.valuation();
assert!(the_context.verify(&valuation));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod schedule;
pub use schedule::Schedule;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context has a formula, and no solve has begun.
    Input,

    /// The consistency of the formula is unknown.
    Solving,

    /// The formula is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The formula is known to be inconsistent.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
