//! Answer matching: normalization, the numeric/substring/fuzzy rules, and
//! the Jaro-Winkler metric behind the fuzzy rule.

pub mod jaro_winkler;
pub mod matcher;
