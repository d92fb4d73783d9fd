/*!
Literals, aka. an atom paired with a polarity.

The canonical representation of a literal is as a signed integer, following DIMACS.
The atom of a literal is the absolute value of the integer, and the polarity of the literal is the sign of the integer.

```rust
# use portfolio_sat::structures::literal::{CLiteral, Literal};
let p: CLiteral = Literal::new(7, false);

assert_eq!(p, -7);
assert_eq!(p.atom(), 7);
assert!(!p.polarity());
assert_eq!(p.negate(), 7);
```
*/

use crate::structures::atom::Atom;

/// The canonical representation of a literal.
pub type CLiteral = i32;

/// The literal trait.
pub trait Literal {
    /// A literal with the given atom and polarity.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal as a DIMACS integer.
    fn as_int(&self) -> isize;
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
