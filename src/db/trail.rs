/*!
The trail of assignments.

A double-ended record of assignments, partitioned by decision level.

Assignments at level 0 are pushed to the front of the trail, and all other assignments are pushed to the back.
So, as a decision is always made at a fresh level, the levels of assignments are non-decreasing from front to back, and within a level the decision precedes every assignment made at the level.

The trail also issues the *order* of each assignment, a counter which strictly increases with each assignment until the trail is cleared.
*/

use std::collections::VecDeque;

use crate::{
    db::{AssignmentSource, LevelIndex},
    structures::literal::CLiteral,
};

/// An assignment, as recorded on the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub literal: CLiteral,
    pub level: LevelIndex,
    pub source: AssignmentSource,
}

/// The trail.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    assignments: VecDeque<Assignment>,
    level: LevelIndex,
    order: usize,
}

impl Trail {
    /// Records `assignment`, and returns the order of the assignment.
    pub fn push(&mut self, assignment: Assignment) -> usize {
        match assignment.level {
            0 => self.assignments.push_front(assignment),
            _ => self.assignments.push_back(assignment),
        }
        self.order += 1;
        self.order
    }

    /// The most recent assignment at the back of the trail.
    pub fn top(&self) -> Option<&Assignment> {
        self.assignments.back()
    }

    pub fn pop(&mut self) -> Option<Assignment> {
        self.assignments.pop_back()
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level
    }

    pub fn set_level(&mut self, level: LevelIndex) {
        self.level = level;
    }

    /// Raises the current decision level by one, and returns the fresh level.
    pub fn fresh_level(&mut self) -> LevelIndex {
        self.level += 1;
        self.level
    }

    /// The order the next assignment would receive.
    pub fn next_order(&self) -> usize {
        self.order + 1
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The assignments, from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// Removes every assignment, and resets the level and order.
    pub fn clear(&mut self) {
        self.assignments.clear();
        self.level = 0;
        self.order = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(literal: CLiteral, level: LevelIndex, source: AssignmentSource) -> Assignment {
        Assignment {
            literal,
            level,
            source,
        }
    }

    #[test]
    fn level_zero_goes_to_the_front() {
        let mut trail = Trail::default();
        trail.fresh_level();
        trail.push(assignment(1, 1, AssignmentSource::Decision));
        trail.push(assignment(2, 1, AssignmentSource::Clause(0)));
        trail.push(assignment(-3, 0, AssignmentSource::Clause(4)));

        let levels = trail.iter().map(|a| a.level).collect::<Vec<_>>();
        assert_eq!(levels, vec![0, 1, 1]);
        assert_eq!(trail.top().map(|a| a.literal), Some(2));
    }

    #[test]
    fn order_strictly_increases() {
        let mut trail = Trail::default();
        let first = trail.push(assignment(1, 0, AssignmentSource::Pure));
        let second = trail.push(assignment(2, 1, AssignmentSource::Decision));
        trail.pop();
        let third = trail.push(assignment(-2, 1, AssignmentSource::Decision));
        assert!(first < second && second < third);

        trail.clear();
        assert_eq!(trail.next_order(), 1);
        assert_eq!(trail.level(), 0);
    }
}
