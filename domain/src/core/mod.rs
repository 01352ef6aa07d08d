//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — completion models the generator can ask
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod string;
