use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::error::{DirectoryError, Result};

mod clients;
mod phones;
pub(crate) mod query;
mod schema;

/// Longest value accepted by the `VARCHAR(40)` columns.
pub const MAX_FIELD_CHARS: usize = 40;

/// Client directory backed by a PostgreSQL connection pool
pub struct Directory {
    pool: PgPool,
}

impl Directory {
    /// Create a new Directory with its own connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Wrap a pool the caller already configured
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Trim a required text field and check it fits its column.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DirectoryError::blank(field));
    }
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(DirectoryError::InvalidField {
            field,
            reason: format!("must be at most {MAX_FIELD_CHARS} characters"),
        });
    }

    Ok(value.to_string())
}

/// Initialize the directory's connection pool
pub async fn init(config: &Config) -> Result<Directory> {
    let directory = Directory::new(config).await?;
    info!(max_connections = config.max_connections, "database pool ready");

    Ok(directory)
}
