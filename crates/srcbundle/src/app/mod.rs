//! Application layer orchestrating domain logic and file IO.

pub mod bundle;
pub mod languages;
pub mod rsp;
pub mod select;
