//! SeaORM entity definitions for the group store schema.
//!
//! Each module maps one table. Column and table names follow the persisted schema
//! exactly (`groups`, `groupMembers`, `users`), so the Rust-side identifiers are
//! renamed through `column_name` where the store uses camel case.

pub mod prelude;

pub mod group;
pub mod group_member;
pub mod user;
