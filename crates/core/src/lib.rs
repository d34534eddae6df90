//! Gymtrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the gym membership
//! application: member records, medical profiles, packages and their
//! assignments, financial transactions, workout schedules, and the
//! multi-step onboarding workflow that ties them together.
//!
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate. External systems (auth,
//! object storage, email, document rendering) are reached through the
//! traits in [`collaborators`].

pub mod collaborators;
pub mod constants;
pub mod errors;
pub mod medical;
pub mod members;
pub mod onboarding;
pub mod packages;
pub mod schedules;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
