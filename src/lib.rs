pub mod error;
pub mod explore;
pub mod grid;
