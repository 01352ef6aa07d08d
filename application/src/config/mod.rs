//! Application-level configuration.
//!
//! - [`GenerationParams`] — model and question count for trivia generation

pub mod generation_params;

pub use generation_params::GenerationParams;
