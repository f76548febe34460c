use crate::PlayerId;
use crate::Result;
use crate::State;

/// One seat's decision maker. Called once per turn with a fresh snapshot.
///
/// Implementations may keep private state (an RNG, say) but must never
/// rely on the game loop mutating the snapshot between calls.
pub trait Player {
    /// A word to say. Never the secret word, never one already spoken.
    fn speak(&mut self, state: &State) -> Result<String>;
    /// A player to eliminate. Never ourselves, never someone revealed.
    fn vote(&mut self, state: &State) -> Result<PlayerId>;
    /// Mr White's guess at the secret word after elimination.
    fn guess(&mut self, state: &State) -> Result<String>;
}
