/*!
A buffer for resolution.

Resolution of two clauses on some atom is the union of the literals of the two clauses, without either literal of the atom.

The buffer records which literals are present in either clause by two presence arrays indexed by atom, one for each polarity, and notes which atoms have been touched so that only those atoms need to be cleared after.
The resolvent is given in order of atom, with the positive literal of an atom before the negative literal.
So, if the two clauses clash on some atom other than the pivot the resolvent contains both literals of the atom, and is a tautology.

```rust
# use portfolio_sat::resolution_buffer::ResolutionBuffer;
let mut buffer = ResolutionBuffer::new(4);

let resolvent = buffer.resolve(&[-1, 2, 4], &[1, 3, 4], 1);
assert_eq!(resolvent, vec![2, 3, 4]);
```
*/

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// The resolution buffer.
#[derive(Clone, Debug)]
pub struct ResolutionBuffer {
    positive: Vec<bool>,
    negative: Vec<bool>,
    touched: Vec<Atom>,
}

impl ResolutionBuffer {
    /// A buffer for clauses over atoms 1 to `atom_count`.
    pub fn new(atom_count: Atom) -> Self {
        let slots = atom_count as usize + 1;
        ResolutionBuffer {
            positive: vec![false; slots],
            negative: vec![false; slots],
            touched: Vec::default(),
        }
    }

    /// The resolvent of `clause` and `other` on `pivot`.
    pub fn resolve(&mut self, clause: &[CLiteral], other: &[CLiteral], pivot: Atom) -> CClause {
        for literal in clause.iter().chain(other) {
            self.mark(*literal);
        }

        self.touched.sort_unstable();
        self.touched.dedup();

        let mut resolvent = CClause::with_capacity(self.touched.len());
        for &atom in &self.touched {
            let index = atom as usize;
            if atom != pivot {
                if self.positive[index] {
                    resolvent.push(CLiteral::new(atom, true));
                }
                if self.negative[index] {
                    resolvent.push(CLiteral::new(atom, false));
                }
            }
            self.positive[index] = false;
            self.negative[index] = false;
        }
        self.touched.clear();

        resolvent
    }

    fn mark(&mut self, literal: CLiteral) {
        let atom = literal.atom();
        let index = atom as usize;
        if index >= self.positive.len() {
            self.positive.resize(index + 1, false);
            self.negative.resize(index + 1, false);
        }
        match literal.polarity() {
            true => self.positive[index] = true,
            false => self.negative[index] = true,
        }
        self.touched.push(atom);
    }
}
