//! Decision makers the game loop can seat.
//!
//! - [`Robot`]: embedding strategies over a shared [`Table`](crate::Table)
//! - [`Fish`]: uniformly random legal moves
//! - [`Backup`]: a primary player that defers to another on turn-local errors
pub mod backup;
pub use backup::*;

pub mod fish;
pub use fish::*;

pub mod player;
pub use player::*;

pub mod robot;
pub use robot::*;
