use crate::Error;
use crate::PlayerId;
use crate::Result;
use crate::Role;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Everything the caller knows at the moment it must decide.
///
/// Built fresh by the game loop each turn and never mutated by the
/// strategies. `words[i]` was spoken by `speakers[i]`, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    n_players: usize,
    player: PlayerId,
    secret: Option<String>,
    words: Vec<String>,
    speakers: Vec<PlayerId>,
    roles: BTreeMap<PlayerId, Role>,
}

impl State {
    /// An empty `secret` marks the caller as Mr White.
    pub fn new<W, S, P, R>(
        n_players: usize,
        player: PlayerId,
        secret: &str,
        words: W,
        speakers: P,
        roles: R,
    ) -> Result<Self>
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
        P: IntoIterator<Item = PlayerId>,
        R: IntoIterator<Item = (PlayerId, Role)>,
    {
        let state = Self {
            n_players,
            player,
            secret: Some(secret.trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
            words: words.into_iter().map(Into::into).collect(),
            speakers: speakers.into_iter().collect(),
            roles: roles.into_iter().collect(),
        };
        state.validate()?;
        Ok(state)
    }

    fn validate(&self) -> Result<()> {
        let seat = |p: PlayerId| (1..=self.n_players).contains(&p);
        if !seat(self.player) {
            return Err(Error::MalformedState(format!(
                "player {} outside 1..={}",
                self.player, self.n_players
            )));
        }
        if self.words.len() != self.speakers.len() {
            return Err(Error::MalformedState(format!(
                "{} words but {} speakers",
                self.words.len(),
                self.speakers.len()
            )));
        }
        if let Some(p) = self
            .speakers
            .iter()
            .chain(self.roles.keys())
            .find(|&&p| !seat(p))
        {
            return Err(Error::MalformedState(format!(
                "player {} outside 1..={}",
                p, self.n_players
            )));
        }
        let mut seen = BTreeSet::new();
        if let Some(word) = self.words.iter().find(|w| !seen.insert(w.as_str())) {
            return Err(Error::MalformedState(format!("{:?} spoken twice", word)));
        }
        let mut seen = BTreeSet::new();
        if let Some((_, p)) = self.fresh().find(|&(_, p)| !seen.insert(p)) {
            return Err(Error::MalformedState(format!(
                "player {} spoke twice this round",
                p
            )));
        }
        Ok(())
    }

    pub fn n_players(&self) -> usize {
        self.n_players
    }
    pub fn player(&self) -> PlayerId {
        self.player
    }
    /// `None` when the caller is Mr White.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
    pub fn words(&self) -> &[String] {
        &self.words
    }
    pub fn speakers(&self) -> &[PlayerId] {
        &self.speakers
    }
    pub fn roles(&self) -> &BTreeMap<PlayerId, Role> {
        &self.roles
    }
    pub fn is_revealed(&self, player: PlayerId) -> bool {
        self.roles.contains_key(&player)
    }
    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Every `(word, speaker)` pair, oldest first.
    pub fn spoken(&self) -> impl DoubleEndedIterator<Item = (&str, PlayerId)> + ExactSizeIterator {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.speakers.iter().copied())
    }

    /// Words spoken by anyone but the caller.
    pub fn others(&self) -> impl DoubleEndedIterator<Item = (&str, PlayerId)> {
        self.spoken().filter(move |&(_, p)| p != self.player)
    }

    /// The current round: one word per player still in the game, i.e. the
    /// last `n_players - revealed` entries of the history.
    pub fn fresh(&self) -> impl Iterator<Item = (&str, PlayerId)> {
        let alive = self.n_players.saturating_sub(self.roles.len());
        let skip = self.words.len().saturating_sub(alive);
        self.spoken().skip(skip)
    }

    /// Players the caller may legally vote against.
    pub fn suspects(&self) -> Vec<PlayerId> {
        (1..=self.n_players)
            .filter(|&p| p != self.player)
            .filter(|&p| !self.is_revealed(p))
            .collect()
    }
}
