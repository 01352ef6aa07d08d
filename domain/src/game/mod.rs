//! Game session state: per-question outcomes and the running score.

pub mod state;
