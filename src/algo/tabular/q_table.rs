use std::collections::HashMap;

use crate::util::argmax;

use super::Hashable;

/// Value table mapping each state to one estimated return per action
///
/// Rows are allocated lazily: the first access to an unseen state inserts a row of
/// zeros of length [`num_actions`](QTable::num_actions). Later accesses reuse the
/// same row, so nothing written is ever reset.
///
/// Actions are addressed by their index in the agent's action set.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable<S: Hashable> {
    table: HashMap<S, Vec<f64>>,
    num_actions: usize,
}

impl<S: Hashable> QTable<S> {
    pub fn new(num_actions: usize) -> Self {
        Self {
            table: HashMap::new(),
            num_actions,
        }
    }

    /// Length of every row
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Number of states seen so far
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All action-value estimates for `state`, allocating a zero row if unseen
    pub fn values(&mut self, state: S) -> &mut [f64] {
        let num_actions = self.num_actions;
        self.table
            .entry(state)
            .or_insert_with(|| vec![0.0; num_actions])
    }

    /// The estimate for `(state, action)`, allocating a zero row if unseen
    ///
    /// **Panics** if `action >= num_actions`
    pub fn value(&mut self, state: S, action: usize) -> f64 {
        self.values(state)[action]
    }

    /// Overwrite the estimate for `(state, action)`
    ///
    /// **Panics** if `action >= num_actions`
    pub fn update(&mut self, state: S, action: usize, new_value: f64) {
        self.values(state)[action] = new_value;
    }

    /// Read a row without allocating
    pub fn get(&self, state: &S) -> Option<&[f64]> {
        self.table.get(state).map(Vec::as_slice)
    }

    /// Index of the best action in `state`, ties going to the lowest index
    pub fn greedy_action(&mut self, state: S) -> Option<usize> {
        argmax(self.values(state))
    }

    /// Iterate over the states seen so far and their rows, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[f64])> {
        self.table.iter().map(|(s, row)| (s, row.as_slice()))
    }
}
