//! Key structures, such as atoms, literals, and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Formulas
//!
//! A formula is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! Within a [context](crate::context) the first clauses of the sequence are *original* clauses, and any clause after these is a *learnt* clause.
//! Every learnt clause is a consequence of the original clauses.

pub mod atom;
pub mod clause;
pub mod literal;
