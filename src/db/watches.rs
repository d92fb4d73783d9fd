/*!
A database of watched positions.

Each clause has two watched positions, `a` and `b`, given as indicies into the literals of the clause.
For a clause of one literal both positions are 0, and for a clause of two literals the positions are fixed at the two literals.

When a literal becomes false the watches of each clause containing the literal are [updated](WatchDB::update_watches), and any watch on a false literal is moved to some other literal of the clause, if possible.
The search for a new position begins at a random offset and wraps around the clause, so no position of a clause is favoured.

If a watch cannot be moved, the watch stays where it is, and so after an update of a clause:
- If no watch is on a false literal, then the clause has at least two literals which are not false.
- Otherwise, every literal of the clause other than the literal at the other watch is false.
  And, [BCP](crate::procedures::bcp) treats the clause as unit on that literal (or in conflict).
*/

use rand::Rng;

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, ClauseKey},
    misc::log::targets,
    structures::literal::CLiteral,
};

/// The watched positions of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watches {
    pub a: usize,
    pub b: usize,
}

/// The watch database.
#[derive(Clone, Debug, Default)]
pub struct WatchDB {
    watches: Vec<Watches>,
}

impl WatchDB {
    /// Watches for every clause of `clause_db`, at distinct random positions where possible.
    pub fn new(clause_db: &ClauseDB, rng: &mut impl Rng) -> Self {
        let watches = clause_db
            .all()
            .iter()
            .map(|clause| match clause.len() {
                0 | 1 => Watches { a: 0, b: 0 },
                size => {
                    let a = rng.random_range(0..size);
                    let mut b = rng.random_range(0..size);
                    if a == b {
                        b = (a + 1) % size;
                    }
                    Watches { a, b }
                }
            })
            .collect();
        WatchDB { watches }
    }

    /// Watches a clause just stored with `key` at positions `a` and `b`.
    pub fn watch(&mut self, key: ClauseKey, a: usize, b: usize) {
        if self.watches.len() <= key {
            self.watches.resize(key + 1, Watches { a: 0, b: 0 });
        }
        self.watches[key] = Watches { a, b };
    }

    /// The watches of the clause indexed by `key`.
    pub fn watches_of(&self, key: ClauseKey) -> Watches {
        self.watches[key]
    }

    /// Moves any watch on a false literal of each clause indexed by `keys`.
    ///
    /// The second watch is only moved if the first watch was not on a false literal, or was moved.
    /// Clauses of fewer than three literals are skipped, as there is nowhere to move a watch to.
    pub fn update_watches(
        &mut self,
        keys: &[ClauseKey],
        clause_db: &ClauseDB,
        atom_db: &AtomDB,
        rng: &mut impl Rng,
    ) {
        for &key in keys {
            let Some(clause) = clause_db.get(key) else {
                continue;
            };
            if clause.len() < 3 {
                continue;
            }

            let Watches { mut a, mut b } = self.watches[key];

            let mut moved = true;
            if atom_db.is_false(clause[a]) {
                match relocate(clause, a, b, atom_db, rng) {
                    Some(fresh) => a = fresh,
                    None => moved = false,
                }
            }
            if moved && atom_db.is_false(clause[b]) {
                if let Some(fresh) = relocate(clause, b, a, atom_db, rng) {
                    b = fresh;
                }
            }

            log::trace!(target: targets::PROPAGATION, "Watches of {key} at ({a}, {b})");
            self.watches[key] = Watches { a, b };
        }
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

/// A position of `clause` other than `other` whose literal is not false, if some such position exists.
///
/// The search starts one past a random position and wraps around to the random position.
fn relocate(
    clause: &[CLiteral],
    current: usize,
    other: usize,
    atom_db: &AtomDB,
    rng: &mut impl Rng,
) -> Option<usize> {
    let size = clause.len();
    let start = rng.random_range(0..size);
    (1..=size)
        .map(|step| (start + step) % size)
        .find(|&position| {
            position != other && position != current && !atom_db.is_false(clause[position])
        })
}
