use crate::Error;
use crate::Metric;
use crate::PlayerId;
use crate::Result;
use crate::State;
use crate::Table;
use crate::masked_argmax;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

/// Picks the player to eliminate at the end of the round.
///
/// Holding a secret word, we [`accuse`] whoever strayed farthest from it this
/// round. Without one (or before anyone has spoken this round) there is no
/// semantic signal, so we pick a random legal [`suspect`].
pub fn vote<R>(table: &Table, metric: Metric, state: &State, rng: &mut R) -> Result<PlayerId>
where
    R: Rng + ?Sized,
{
    match state.secret() {
        None => suspect(state, rng),
        Some(secret) => match accuse(table, metric, state, secret) {
            Err(Error::NoCandidate { .. }) => {
                log::debug!("no fresh evidence for player {}, voting at random", state.player());
                suspect(state, rng)
            }
            accused => accused,
        },
    }
}

/// Holder branch. Only the current round's words count as evidence, and
/// words spoken by the caller or by already revealed players are masked.
///
/// Anyone who said the secret word outright is accused on the spot.
/// Otherwise the speaker of the farthest fresh word is.
pub fn accuse(table: &Table, metric: Metric, state: &State, secret: &str) -> Result<PlayerId> {
    let legal = |p: PlayerId| p != state.player() && !state.is_revealed(p);
    let fresh = state.fresh().collect::<Vec<_>>();
    if let Some(&(_, parrot)) = fresh
        .iter()
        .find(|&&(word, p)| word == secret && legal(p))
    {
        log::debug!("player {} parroted the secret word", parrot);
        return Ok(parrot);
    }
    let reference = table.vector_of(secret)?;
    let vectors = fresh
        .iter()
        .map(|&(word, _)| table.vector_of(word))
        .collect::<Result<Vec<_>>>()?;
    let excluded = fresh
        .iter()
        .enumerate()
        .filter(|(_, (_, p))| !legal(*p))
        .map(|(i, _)| i)
        .collect::<BTreeSet<_>>();
    let ref distances = metric.distances(reference, vectors);
    let (word, accused) = fresh[masked_argmax(distances, &excluded)?];
    log::debug!("{:<32}{:<32}", format!("player {} accused", accused), word);
    Ok(accused)
}

/// Uniformly random among players that are neither us nor revealed.
pub fn suspect<R>(state: &State, rng: &mut R) -> Result<PlayerId>
where
    R: Rng + ?Sized,
{
    state
        .suspects()
        .choose(rng)
        .copied()
        .ok_or(Error::NoCandidate {
            excluded: state.n_players(),
            total: state.n_players(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use crate::strategy::fixtures;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xC47)
    }

    #[test]
    fn holder_accuses_farthest_fresh_word() {
        let ref table = fixtures::table();
        let ref state = State::new(
            5,
            1,
            "cat",
            ["milk", "lion", "house", "cheese", "friend"],
            [3, 4, 2, 1, 5],
            [],
        )
        .unwrap();
        assert_eq!(vote(table, Metric::Dot, state, &mut rng()).unwrap(), 2);
    }

    #[test]
    fn parrot_is_accused_without_distances() {
        let ref table = fixtures::table();
        // "cat" is nearest to itself, so only the exact match can pick player 2
        let ref state = State::new(5, 1, "cat", ["house", "cat", "sleep"], [3, 2, 5], []).unwrap();
        assert_eq!(accuse(table, Metric::Dot, state, "cat").unwrap(), 2);
    }

    #[test]
    fn parrot_check_precedes_vocabulary_lookup() {
        let ref table = fixtures::table();
        let ref state = State::new(4, 1, "zebra", ["zebra", "house"], [3, 2], []).unwrap();
        assert_eq!(accuse(table, Metric::Dot, state, "zebra").unwrap(), 3);
    }

    #[test]
    fn stale_rounds_are_ignored() {
        let ref table = fixtures::table();
        // round one: "sleep" by 5 is the farthest word overall but player 2 was revealed,
        // so the fresh round is only the last 4 words
        let ref state = State::new(
            5,
            1,
            "cat",
            ["sleep", "kitten", "milk", "cheese", "lion", "house", "dog", "friend"],
            [5, 2, 3, 4, 1, 3, 4, 5],
            [(2, Role::Undercover)],
        )
        .unwrap();
        assert_eq!(state.fresh().count(), 4);
        assert_eq!(vote(table, Metric::Dot, state, &mut rng()).unwrap(), 3);
    }

    #[test]
    fn own_word_is_never_accused() {
        let ref table = fixtures::table();
        let ref state = State::new(3, 1, "cat", ["sleep", "kitten"], [1, 2], []).unwrap();
        assert_eq!(accuse(table, Metric::Dot, state, "cat").unwrap(), 2);
    }

    #[test]
    fn holder_without_fresh_words_votes_at_random() {
        let ref table = fixtures::table();
        let ref state = State::new(5, 1, "cat", Vec::<String>::new(), [], [(4, Role::Civilian)]).unwrap();
        assert!(matches!(
            accuse(table, Metric::Dot, state, "cat"),
            Err(Error::NoCandidate { excluded: 0, total: 0 })
        ));
        let ref mut rng = rng();
        for _ in 0..64 {
            let p = vote(table, Metric::Dot, state, rng).unwrap();
            assert!([2, 3, 5].contains(&p));
        }
    }

    #[test]
    fn white_votes_among_legal_suspects() {
        let ref table = fixtures::table();
        let ref state = State::new(
            5,
            4,
            "",
            ["milk", "lion", "house", "cheese", "friend"],
            [3, 4, 2, 1, 5],
            [(2, Role::Undercover)],
        )
        .unwrap();
        let ref mut rng = rng();
        let votes = (0..256)
            .map(|_| vote(table, Metric::Dot, state, rng).unwrap())
            .collect::<BTreeSet<_>>();
        assert_eq!(votes, BTreeSet::from([1, 3, 5]));
    }

    #[test]
    fn nobody_left_is_no_candidate() {
        let ref state = State::new(2, 1, "", Vec::<String>::new(), [], [(2, Role::White)]).unwrap();
        assert!(matches!(
            suspect(state, &mut rng()),
            Err(Error::NoCandidate { .. })
        ));
    }
}
