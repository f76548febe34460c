pub mod centroid;
pub use centroid::*;

pub mod metric;
pub use metric::*;

pub mod select;
pub use select::*;
