use crate::Centroid;
use crate::Error;
use crate::Guessing;
use crate::Metric;
use crate::Result;
use crate::State;
use crate::Table;
use crate::masked_argmin;

/// Mr White's last chance after elimination: name the Civilians' word.
///
/// Every informed player chose their words around the secret, so the secret
/// should sit near the middle of what they said. Our own words carry no
/// signal and are left out. Whatever the reference, the answer is the
/// nearest word nobody has spoken yet.
pub fn guess(table: &Table, metric: Metric, guessing: Guessing, state: &State) -> Result<String> {
    let reference = match guessing {
        Guessing::Centroid => centroid(table, state)?,
        Guessing::Recent => recent(table, state)?,
    };
    let reference = match reference {
        Some(reference) => reference,
        None => fallback(table, state)?,
    };
    let ref excluded = super::spoken(table, state);
    let ref distances = metric.against(&reference, table);
    let index = masked_argmin(distances, excluded)?;
    log::debug!(
        "{:<32}{:<32}",
        format!("player {} guesses", state.player()),
        table.word(index)
    );
    Ok(table.word(index).to_string())
}

/// Mean embedding of every word the other players said.
fn centroid(table: &Table, state: &State) -> Result<Option<Vec<f32>>> {
    state
        .others()
        .try_fold(Centroid::new(table.dimension()), |mut centroid, (word, _)| -> Result<Centroid> {
            centroid.absorb(table.vector_of(word)?);
            Ok(centroid)
        })
        .map(|centroid| centroid.reveal())
}

/// Embedding of the last word another player said.
fn recent(table: &Table, state: &State) -> Result<Option<Vec<f32>>> {
    state
        .others()
        .next_back()
        .map(|(word, _)| table.vector_of(word).map(<[f32]>::to_vec))
        .transpose()
}

/// Nobody else has spoken: all we have is our own last word.
fn fallback(table: &Table, state: &State) -> Result<Vec<f32>> {
    match state.last_word() {
        Some(word) => table.vector_of(word).map(<[f32]>::to_vec),
        None => Err(Error::NoCandidate {
            excluded: 0,
            total: 0,
        }),
    }
}
