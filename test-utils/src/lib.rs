//! Groupstore Test Utils
//!
//! Shared testing utilities for the group store repositories and services. Tests build a
//! `TestContext` around an in-memory SQLite database with only the tables they need, then
//! seed it through the factories.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn adds_member() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_group_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (group, users) = factory::helpers::create_group_with_members(db, 2).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
