//! Data access for groups of users.
//!
//! The crate maps a `groups` table and a `groupMembers` join table onto plain domain
//! models, with repositories doing the SQL and services adding lookup semantics.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - One repository per table, returning domain models and `DbErr`
//! - **Service Layer** (`service/`) - Lookups, membership management, `NotFound` mapping
//! - **Model Layer** (`model/`) - `Group`, `User`, lookup keys and parameter types
//! - **Error Layer** (`error/`) - `AppError`
//! - **Configuration** (`config`) and **Startup** (`startup`) - Connection and schema setup
//!
//! The database connection is always passed in explicitly:
//!
//! ```rust,ignore
//! use groupstore::{config::Config, model::group::GroupKey, service::group::GroupService, startup};
//!
//! let db = startup::connect_to_database(&Config::from_env()?).await?;
//! let groups = GroupService::new(&db);
//!
//! groups.add("Admins", Some("Admin group".to_string())).await?;
//! let admins = groups.lookup(GroupKey::Name("Admins".to_string())).await?;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
