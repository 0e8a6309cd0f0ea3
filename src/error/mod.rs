//! Error types for the IPAM access layer.
//!
//! Failures are surfaced as the distinct kinds the spec of this system
//! recognizes: a missing or unusable configuration value, or a store-layer
//! failure (connection errors and constraint violations both arrive as
//! [`sea_orm::DbErr`] variants). Nothing is retried or translated.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (connection failures, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
