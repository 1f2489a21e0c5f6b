use tracing::{info, warn};

use super::Directory;
use crate::error::{DirectoryError, Result};

const DATABASE_EXISTS: &str =
    "SELECT EXISTS (SELECT 1 FROM pg_catalog.pg_database WHERE datname = $1)";

const CREATE_CLIENT: &str = r#"
    CREATE TABLE IF NOT EXISTS client (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(40) NOT NULL,
        last_name VARCHAR(40) NOT NULL,
        email VARCHAR(40) NOT NULL
    )
"#;

const CREATE_PHONE: &str = r#"
    CREATE TABLE IF NOT EXISTS phone (
        client_id INTEGER NOT NULL REFERENCES client(id),
        phone VARCHAR(40) NOT NULL UNIQUE
    )
"#;

impl Directory {
    /// Drop and recreate the `client` and `phone` tables.
    ///
    /// Fails with [`DirectoryError::DatabaseMissing`] when `database_name` does not
    /// exist on the server; the database itself is never created here. Fails with
    /// [`DirectoryError::DatabaseMismatch`] when it exists but the pool is connected
    /// to another one. Existing rows are lost.
    pub async fn create_schema(&self, database_name: &str) -> Result<()> {
        let mut tx = self.get_pool().begin().await?;

        // Make sure the named database exists
        let exists: bool = sqlx::query_scalar(DATABASE_EXISTS)
            .bind(database_name)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            warn!(database = database_name, "database missing, schema not created");
            return Err(DirectoryError::DatabaseMissing(database_name.to_string()));
        }

        // Only ever touch the tables of the database we were asked about
        let connected: String = sqlx::query_scalar("SELECT current_database()")
            .fetch_one(&mut *tx)
            .await?;
        if connected != database_name {
            warn!(database = database_name, connected = %connected, "connected to another database, schema not created");
            return Err(DirectoryError::DatabaseMismatch {
                expected: database_name.to_string(),
                connected,
            });
        }

        // Drop the old tables, phone first since it references client
        sqlx::query("DROP TABLE IF EXISTS phone").execute(&mut *tx).await?;
        sqlx::query("DROP TABLE IF EXISTS client").execute(&mut *tx).await?;

        // Recreate them empty
        sqlx::query(CREATE_CLIENT).execute(&mut *tx).await?;
        sqlx::query(CREATE_PHONE).execute(&mut *tx).await?;

        tx.commit().await?;
        info!(database = database_name, "schema created");

        Ok(())
    }
}
