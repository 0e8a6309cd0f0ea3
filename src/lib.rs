//! Relational schema and access layer for IP address management.
//!
//! The schema lives in the `entity` and `migration` workspace crates; this
//! crate provides configuration, startup, error types, and one repository
//! per entity for issuing reads and writes against an injected
//! [`sea_orm::DatabaseConnection`].

pub mod config;
pub mod data;
pub mod error;
pub mod startup;
