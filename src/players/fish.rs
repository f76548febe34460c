use crate::Error;
use crate::Player;
use crate::PlayerId;
use crate::Result;
use crate::State;
use crate::Vocabulary;
use crate::strategy::vote::suspect;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

/// Random player that only knows the rules.
/// Serves as the fallback when a [`Robot`](crate::Robot) cannot decide.
pub struct Fish<'a> {
    vocabulary: &'a Vocabulary,
    rng: SmallRng,
}

impl<'a> Fish<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn seeded(vocabulary: &'a Vocabulary, seed: u64) -> Self {
        Self {
            vocabulary,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Any vocabulary word that is neither spoken nor our secret.
    fn word(&mut self, state: &State) -> Result<String> {
        let illegal = |word: &str| state.secret() == Some(word) || state.words().iter().any(|w| w == word);
        self.vocabulary
            .words()
            .iter()
            .filter(|word| !illegal(word.as_str()))
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoCandidate {
                excluded: self.vocabulary.len(),
                total: self.vocabulary.len(),
            })
    }
}

impl Player for Fish<'_> {
    fn speak(&mut self, state: &State) -> Result<String> {
        self.word(state)
    }
    fn vote(&mut self, state: &State) -> Result<PlayerId> {
        suspect(state, &mut self.rng)
    }
    fn guess(&mut self, state: &State) -> Result<String> {
        self.word(state)
    }
}
