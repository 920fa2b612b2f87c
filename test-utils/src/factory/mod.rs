//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` shorthand that
//! inserts a row with default values.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let group = factory::group::GroupFactory::new(db)
//!     .name("Admins")
//!     .description(Some("Admin group"))
//!     .build()
//!     .await?;
//! factory::create_group_member(db, user.id, group.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `group` - Create group entities
//! - `group_member` - Create user-group membership entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod group;
pub mod group_member;
pub mod helpers;
pub mod user;

pub use group::create_group;
pub use group_member::create_group_member;
pub use user::create_user;
