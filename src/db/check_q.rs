//! The check queue, a worklist of clauses for [BCP](crate::procedures::bcp) to inspect.
//!
//! Keys are consumed in order of addition, and keys added while the queue is consumed are consumed in turn.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Default)]
pub struct CheckQ {
    keys: Vec<ClauseKey>,
    head: usize,
}

impl CheckQ {
    pub fn push(&mut self, key: ClauseKey) {
        self.keys.push(key);
    }

    pub fn extend(&mut self, keys: &[ClauseKey]) {
        self.keys.extend_from_slice(keys);
    }

    /// The next key to check, if any.
    pub fn next_key(&mut self) -> Option<ClauseKey> {
        let key = self.keys.get(self.head).copied();
        match key {
            Some(_) => self.head += 1,
            None => self.clear(),
        }
        key
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.head = 0;
    }

    /// A count of keys yet to be checked.
    pub fn pending(&self) -> usize {
        self.keys.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}
