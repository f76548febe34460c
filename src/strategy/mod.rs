//! Embedding-backed decision procedures.
//!
//! Each procedure is a pure function of the [`Table`], a [`Metric`] and the
//! [`State`] snapshot (plus an RNG for the impostor vote). None of them
//! mutate their inputs; every exclusion set is built privately per call.
//!
//! - [`speak`]: nearest unused word to our secret, or to the last word
//! - [`vote`]: farthest fresh word from our secret, or a random suspect
//! - [`guess`]: nearest unspoken word to the centroid of the others' words
pub mod guess;
pub mod speak;
pub mod vote;

pub use guess::guess;
pub use speak::speak;
pub use vote::vote;

use crate::State;
use crate::Table;
use std::collections::BTreeSet;

/// Vocabulary indices of every word spoken so far. Words outside the
/// vocabulary can never be selected, so they need no mask.
fn spoken(table: &Table, state: &State) -> BTreeSet<usize> {
    state
        .words()
        .iter()
        .filter_map(|word| table.vocabulary().get(word))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::Table;

    /// Hand-placed 3d embeddings: a feline/dairy cluster along x, household
    /// words along y, abstract words along z.
    pub fn table() -> Table {
        Table::from_rows([
            ("cat", vec![1.00, 0.00, 0.00]),
            ("kitten", vec![0.90, 0.10, 0.00]),
            ("milk", vec![0.98, 0.00, 0.02]),
            ("lion", vec![0.70, 0.30, 0.00]),
            ("dog", vec![0.60, 0.40, 0.00]),
            ("house", vec![0.00, 1.00, 0.00]),
            ("cheese", vec![0.50, 0.00, 0.50]),
            ("friend", vec![0.10, 0.70, 0.70]),
            ("sleep", vec![0.00, 0.00, 1.00]),
        ])
        .expect("fixture table")
    }
}
