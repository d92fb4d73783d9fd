/*!
A database of properties of atoms.

For each atom the database records:
- The current value of the atom, if any, with the level, source, and order of the assignment.
- The clauses in which the atom occurs positively, and negatively.
- The activity of the atom, as a value in an [IndexHeap].

And, the database holds a pool of atoms from which an atom may be chosen uniformly at random.

Both the activity heap and the random pool hold atoms lazily.
That is, an atom may remain on the heap or in the pool after being valued, and it is the responsibility of whoever takes an atom from either to check whether the atom has a value.
Each time the value of an atom is [dropped](AtomDB::drop_value) the atom is returned to both the heap and the pool, and so every atom without a value is always on the heap and in the pool.

```rust
# use portfolio_sat::db::{atom::AtomDB, clause::ClauseDB, AssignmentSource};
let clause_db = ClauseDB::new(vec![vec![1, 2], vec![1, -2]], 2);
let mut atom_db = AtomDB::new(2, &clause_db);

assert_eq!(atom_db.occurrences(1), &[0, 1]);
assert_eq!(atom_db.occurrences(-2), &[1]);

atom_db.set_value(-2, 0, AssignmentSource::Pure, 0);
assert_eq!(atom_db.value_of_literal(2), Some(false));
assert!(atom_db.is_false(2));
```
*/

use rand::Rng;

use crate::{
    db::{clause::ClauseDB, AssignmentSource, ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The activity added to an atom for each occurrence in the formula when the database is built.
const INITIAL_ACTIVITY_PER_OCCURRENCE: i32 = 2;

/// The activity added to an atom for each occurrence in an admitted clause.
const ADMISSION_BUMP: i32 = 1;

/// Properties of an atom under the current valuation.
#[derive(Clone, Copy, Debug)]
pub struct AtomCell {
    /// The value of the atom, if any.
    pub value: Option<bool>,

    /// The level at which the atom was valued, meaningful only if valued.
    pub level: LevelIndex,

    /// The source of the value, meaningful only if valued.
    pub source: AssignmentSource,

    /// The position of the assignment in order of assignment, meaningful only if valued.
    pub order: usize,
}

impl Default for AtomCell {
    fn default() -> Self {
        AtomCell {
            value: None,
            level: 0,
            source: AssignmentSource::Decision,
            order: 0,
        }
    }
}

/// The atom database.
#[derive(Clone, Debug)]
pub struct AtomDB {
    cells: Vec<AtomCell>,
    positive_occurrences: Vec<Vec<ClauseKey>>,
    negative_occurrences: Vec<Vec<ClauseKey>>,
    activity: IndexHeap<i32>,
    random_pool: Vec<Atom>,
    /// Whether each atom is in the random pool, so no atom is held twice.
    pooled: Vec<bool>,
}

impl AtomDB {
    /// A database for atoms 1 to `atom_count` over the clauses of `clause_db`, with no atom valued.
    ///
    /// Each atom is given an activity of two for each occurrence in some clause.
    pub fn new(atom_count: Atom, clause_db: &ClauseDB) -> Self {
        let slots = atom_count as usize + 1;

        let mut positive_occurrences = vec![Vec::default(); slots];
        let mut negative_occurrences = vec![Vec::default(); slots];
        let mut activity = vec![0; slots];

        for (key, clause) in clause_db.all().iter().enumerate() {
            for literal in clause {
                let atom = literal.atom() as usize;
                match literal.polarity() {
                    true => positive_occurrences[atom].push(key),
                    false => negative_occurrences[atom].push(key),
                }
                activity[atom] += INITIAL_ACTIVITY_PER_OCCURRENCE;
            }
        }

        let mut activity = IndexHeap::from_values(activity);
        for atom in 1..slots {
            activity.activate(atom);
        }

        AtomDB {
            cells: vec![AtomCell::default(); slots],
            positive_occurrences,
            negative_occurrences,
            activity,
            random_pool: (1..=atom_count).collect(),
            pooled: (0..slots).map(|atom| atom > 0).collect(),
        }
    }

    pub fn cell(&self, atom: Atom) -> &AtomCell {
        &self.cells[atom as usize]
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.cells[atom as usize].value
    }

    /// The value of `literal`, if the atom of `literal` has a value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// True if the atom of `literal` has the value opposite to the polarity of `literal`.
    pub fn is_false(&self, literal: CLiteral) -> bool {
        self.value_of_literal(literal) == Some(false)
    }

    pub fn is_true(&self, literal: CLiteral) -> bool {
        self.value_of_literal(literal) == Some(true)
    }

    /// Values the atom of `literal` so that `literal` is true.
    ///
    /// No check is made on any existing value.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: AssignmentSource,
        order: usize,
    ) {
        self.cells[literal.atom() as usize] = AtomCell {
            value: Some(literal.polarity()),
            level,
            source,
            order,
        };
    }

    /// Clears the value of `atom`, and returns the atom to the activity heap and the random pool.
    ///
    /// An atom still in the pool is not added a second time.
    pub fn drop_value(&mut self, atom: Atom) {
        self.cells[atom as usize].value = None;
        self.activity.activate(atom as usize);
        if !self.pooled[atom as usize] {
            self.pooled[atom as usize] = true;
            self.random_pool.push(atom);
        }
    }

    /// Overwrites the level and order of `atom`, returning the previous level and order.
    ///
    /// Used to treat an atom as if valued at some level when the value could not be set.
    pub fn overlay_level_order(
        &mut self,
        atom: Atom,
        level: LevelIndex,
        order: usize,
    ) -> (LevelIndex, usize) {
        let cell = &mut self.cells[atom as usize];
        let previous = (cell.level, cell.order);
        cell.level = level;
        cell.order = order;
        previous
    }

    /// Keys to every clause containing `literal`.
    pub fn occurrences(&self, literal: CLiteral) -> &[ClauseKey] {
        let atom = literal.atom() as usize;
        match literal.polarity() {
            true => &self.positive_occurrences[atom],
            false => &self.negative_occurrences[atom],
        }
    }

    /// A count of clauses containing `atom` positively and negatively.
    pub fn occurrence_counts(&self, atom: Atom) -> (usize, usize) {
        (
            self.positive_occurrences[atom as usize].len(),
            self.negative_occurrences[atom as usize].len(),
        )
    }

    /// Records the occurrences of the literals of `clause`, and bumps the activity of each atom.
    pub fn note_clause(&mut self, key: ClauseKey, clause: &[CLiteral]) {
        for literal in clause {
            let atom = literal.atom() as usize;
            match literal.polarity() {
                true => self.positive_occurrences[atom].push(key),
                false => self.negative_occurrences[atom].push(key),
            }
            self.activity.apply_to_index(atom, |a| a + ADMISSION_BUMP);
            self.activity.heapify_if_active(atom);
        }
    }

    /// Decreases the activity of every atom by one.
    pub fn decay_activity(&mut self) {
        self.activity.apply_to_all(|a| a - 1);
    }

    pub fn activity_of(&self, atom: Atom) -> i32 {
        self.activity.value_at(atom as usize).copied().unwrap_or_default()
    }

    /// An atom without a value of greatest activity, if some such atom exists.
    pub fn take_most_active(&mut self) -> Option<Atom> {
        while let Some(index) = self.activity.pop_max() {
            let atom = index as Atom;
            if self.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }

    /// An atom without a value chosen uniformly at random from the pool, if some such atom exists.
    pub fn take_random(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        while !self.random_pool.is_empty() {
            let index = rng.random_range(0..self.random_pool.len());
            let atom = self.random_pool.swap_remove(index);
            self.pooled[atom as usize] = false;
            if self.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }
}
