use crate::Error;
use crate::Metric;
use crate::Result;
use crate::State;
use crate::Table;
use crate::masked_argmin;
use std::collections::BTreeSet;

/// Picks the word to say this turn.
///
/// With a secret word we stay as close to it as we can without repeating
/// it or anything already said, which signals knowledge to allies. Mr
/// White has no secret and follows the conversation instead, drifting from
/// the most recent word. Ties go to the lowest vocabulary index.
pub fn speak(table: &Table, metric: Metric, state: &State) -> Result<String> {
    let mut forbidden = super::spoken(table, state);
    if let Some(secret) = state.secret() {
        forbidden.insert(table.index_of(secret)?);
    }
    let index = match state.secret().or(state.last_word()) {
        Some(reference) => {
            let ref distances = metric.against(table.vector_of(reference)?, table);
            masked_argmin(distances, &forbidden)?
        }
        None => opening(table, state, &forbidden)?,
    };
    log::debug!(
        "{:<32}{:<32}",
        format!("player {} speaks", state.player()),
        table.word(index)
    );
    Ok(table.word(index).to_string())
}

/// Mr White opening the game has nothing to follow, so the seat decides:
/// walk the vocabulary from `n_players * player` to the first legal word.
fn opening(table: &Table, state: &State, forbidden: &BTreeSet<usize>) -> Result<usize> {
    let n = table.len();
    let start = (state.n_players() * state.player()) % n.max(1);
    (0..n)
        .map(|k| (start + k) % n)
        .find(|i| !forbidden.contains(i))
        .ok_or(Error::NoCandidate {
            excluded: forbidden.len(),
            total: n,
        })
}
