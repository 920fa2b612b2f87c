//! Service layer orchestrating repositories.
//!
//! Services turn missing rows into `AppError::NotFound`, combine repository calls, and keep
//! the in-memory domain models in step with what they write.

pub mod group;
pub mod user;
