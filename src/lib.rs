//! Client and phone directory over PostgreSQL.
//!
//! [`Directory`] owns a connection pool and exposes the CRUD operations on the
//! `client` and `phone` tables. Every operation returns [`Result`]; multi-step
//! operations run inside a single transaction.

pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod logging;
pub mod models;

pub use config::Config;
pub use db::Directory;
pub use error::{DirectoryError, Result};
pub use models::{parse_phones, Client, ClientChanges, ClientFilter, ClientRecord};
