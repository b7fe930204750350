pub mod rep;

pub use rep::{Deal, RepId, SalesRep};
