pub mod articles;
pub mod tags;
