use crate::Player;
use crate::PlayerId;
use crate::Result;
use crate::State;

/// Asks `primary` first and hands the turn to `backup` when the primary
/// fails with a turn-local error (unknown word, no candidate). Fatal errors
/// pass through untouched.
#[derive(Debug)]
pub struct Backup<P, B> {
    primary: P,
    backup: B,
}

impl<P, B> Backup<P, B> {
    pub fn new(primary: P, backup: B) -> Self {
        Self { primary, backup }
    }
}

impl<P, B> Player for Backup<P, B>
where
    P: Player,
    B: Player,
{
    fn speak(&mut self, state: &State) -> Result<String> {
        match self.primary.speak(state) {
            Err(e) if e.is_turn_local() => {
                log::warn!("speak fell back: {}", e);
                self.backup.speak(state)
            }
            other => other,
        }
    }
    fn vote(&mut self, state: &State) -> Result<PlayerId> {
        match self.primary.vote(state) {
            Err(e) if e.is_turn_local() => {
                log::warn!("vote fell back: {}", e);
                self.backup.vote(state)
            }
            other => other,
        }
    }
    fn guess(&mut self, state: &State) -> Result<String> {
        match self.primary.guess(state) {
            Err(e) if e.is_turn_local() => {
                log::warn!("guess fell back: {}", e);
                self.backup.guess(state)
            }
            other => other,
        }
    }
}
