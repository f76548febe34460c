pub mod cache;
pub use cache::*;

pub mod table;
pub use table::*;

pub mod vocabulary;
pub use vocabulary::*;
