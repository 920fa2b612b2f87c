//! Domain and parameter models.
//!
//! Plain data types returned by repositories and services. None of them hold a
//! database handle; every read or write goes through the data and service layers.

pub mod group;
pub mod user;
