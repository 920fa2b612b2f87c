//! Error types for the group store.
//!
//! `AppError` is the single error type returned by services and startup code.
//! Repositories return `sea_orm::DbErr` directly, which converts into
//! `AppError::DbErr` through `?` without being caught or translated.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers connectivity failures, constraint violations and malformed SQL alike.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid argument error.
    ///
    /// # Fields
    /// - Message describing which argument was invalid
    #[error("{0}")]
    BadRequest(String),
}
