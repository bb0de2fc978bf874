//! # Medix Shared Library
//!
//! Persistence layer shared by the Medix API server and its integration
//! tests.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL connection pool lifecycle
//! - `models`: application store models (users, tasks, categories)
//! - `medix`: read-only views over the external clinic schema

pub mod db;
pub mod medix;
pub mod models;
