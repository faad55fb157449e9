//! # pguser Shared Library
//!
//! Data access for the pguser command-line tool.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL connection pool management
//! - `models`: Database models and their queries
//! - `store`: The `UserStore` seam used by the command dispatcher
//! - `error`: Store error types

pub mod db;
pub mod error;
pub mod models;
pub mod store;

