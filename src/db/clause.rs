/*!
A database of clauses.

Clauses are stored in a single vector, and a [ClauseKey] is the index of a clause in that vector.
The database is append-only, and so every key remains valid for as long as the database lives.

The vector is partitioned into three (possibly empty) contiguous segments:
- Original clauses, the formula to be solved.
- Transferred clauses, learnt by some other context and given to the context at construction.
- Learnt clauses, admitted during a solve of the context.

```rust
# use portfolio_sat::db::clause::ClauseDB;
let mut clause_db = ClauseDB::new(vec![vec![1, 2], vec![-1, 2], vec![2, 3]], 2);

let key = clause_db.store(vec![-2]);

assert_eq!(key, 3);
assert_eq!(clause_db.original().len(), 2);
assert_eq!(clause_db.learnt(), &[vec![-2]]);
```
*/

use crate::{db::ClauseKey, structures::clause::CClause};

/// The clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<CClause>,
    original_count: usize,
    transferred_count: usize,
}

impl ClauseDB {
    /// A database of `clauses`, the first `original_count` of which are original, and the remainder transferred.
    pub fn new(clauses: Vec<CClause>, original_count: usize) -> Self {
        let original_count = original_count.min(clauses.len());
        let transferred_count = clauses.len() - original_count;
        ClauseDB {
            clauses,
            original_count,
            transferred_count,
        }
    }

    /// Stores `clause` and returns the key of the clause.
    pub fn store(&mut self, clause: CClause) -> ClauseKey {
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    /// The clause indexed by `key`, if it exists.
    pub fn get(&self, key: ClauseKey) -> Option<&CClause> {
        self.clauses.get(key)
    }

    /// Every clause, in order of key.
    pub fn all(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn original(&self) -> &[CClause] {
        &self.clauses[..self.original_count]
    }

    /// Clauses learnt during a solve of the context (so, excluding transferred clauses).
    pub fn learnt(&self) -> &[CClause] {
        &self.clauses[self.original_count + self.transferred_count..]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// A count of clauses learnt during a solve of the context.
    pub fn learnt_count(&self) -> usize {
        self.clauses.len() - self.original_count - self.transferred_count
    }

    /// True if some clause in the database is empty.
    pub fn contains_empty(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }
}
