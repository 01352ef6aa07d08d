//! Progress display while waiting on the completion API

pub mod spinner;
