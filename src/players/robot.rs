use crate::Config;
use crate::Player;
use crate::PlayerId;
use crate::Result;
use crate::State;
use crate::Table;
use crate::strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt::Debug;
use std::time::Instant;

/// Embedding-backed player.
///
/// Borrows the table, so any number of robots can share one load.
pub struct Robot<'a> {
    table: &'a Table,
    config: Config,
    rng: SmallRng,
}

impl<'a> Robot<'a> {
    pub fn new(table: &'a Table, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { table, config, rng }
    }
}

impl Player for Robot<'_> {
    fn speak(&mut self, state: &State) -> Result<String> {
        let start = Instant::now();
        let word = strategy::speak(self.table, self.config.speak, state);
        log::debug!("speak took {:?}", start.elapsed());
        word
    }
    fn vote(&mut self, state: &State) -> Result<PlayerId> {
        let start = Instant::now();
        let ref mut rng = self.rng;
        let player = strategy::vote(self.table, self.config.vote, state, rng);
        log::debug!("vote took {:?}", start.elapsed());
        player
    }
    fn guess(&mut self, state: &State) -> Result<String> {
        let start = Instant::now();
        let word = strategy::guess(self.table, self.config.guess, self.config.guessing, state);
        log::debug!("guess took {:?}", start.elapsed());
        word
    }
}

impl Debug for Robot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot({} words, {:?})", self.table.len(), self.config)
    }
}
