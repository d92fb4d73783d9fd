/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *a* with 0 < *a* ≤ *m*, where *m* is the maximum atom of some formula.
The atom 0 is not used, and is otherwise free to act as a sentinel.

This representation allows atoms to be used as the indicies of a structure, e.g. `cells[a]`, without any translation.

```rust
# use portfolio_sat::structures::atom::Atom;
let max_atom: Atom = 97;
let atoms = (1..=max_atom).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded by the representation of [literals](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
