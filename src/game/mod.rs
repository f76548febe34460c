pub mod role;
pub use role::*;

pub mod state;
pub use state::*;
