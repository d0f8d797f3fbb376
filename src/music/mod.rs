pub mod artist;
pub mod catalog;
pub mod concerts;

pub use artist::{fold_case, Artist};
pub use catalog::{alphabet, Catalog};
pub use concerts::{Dates, Locations, Relation, Relations};
