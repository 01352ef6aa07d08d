//! Interactive quiz adapters

pub mod terminal;
