//! Database repository layer.
//!
//! Repository structs borrow a `DatabaseConnection` and perform the CRUD statements for one
//! table each. They use SeaORM entity models internally and return domain models, and they
//! never translate `DbErr`: every store failure goes straight back to the caller.

pub mod group;
pub mod group_member;
pub mod user;
