//! Trivia content: the question/answer set, its topic, and parsing it out of
//! a completion response.

pub mod parsing;
pub mod set;
pub mod topic;
