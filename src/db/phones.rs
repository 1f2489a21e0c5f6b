use sqlx::PgConnection;
use tracing::{debug, info};

use super::{required, Directory};
use crate::error::{DirectoryError, Result};

/// Insert one trimmed number for `client_id` on an existing connection.
pub(crate) async fn insert_phone(conn: &mut PgConnection, client_id: i32, phone: &str) -> Result<()> {
    let phone = required("phone", phone)?;

    sqlx::query("INSERT INTO phone (client_id, phone) VALUES ($1, $2)")
        .bind(client_id)
        .bind(&phone)
        .execute(&mut *conn)
        .await
        .map_err(|err| DirectoryError::from_phone_insert(err, client_id, &phone))?;
    debug!(client_id, phone = %phone, "phone inserted");

    Ok(())
}

/// Remove every number of `client_id` on an existing connection.
pub(crate) async fn remove_all_phones(conn: &mut PgConnection, client_id: i32) -> Result<u64> {
    let removed = sqlx::query("DELETE FROM phone WHERE client_id = $1")
        .bind(client_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    Ok(removed)
}

impl Directory {
    /// Register a phone number for an existing client.
    ///
    /// The client is not looked up first; a bad id surfaces through the
    /// foreign key as [`DirectoryError::ClientNotFound`].
    pub async fn add_phone(&self, client_id: i32, phone: &str) -> Result<()> {
        let mut conn = self.get_pool().acquire().await?;
        insert_phone(&mut conn, client_id, phone).await?;
        info!(client_id, "phone added");

        Ok(())
    }

    /// Delete one number of a client. Returns whether a row was removed.
    pub async fn delete_phone(&self, client_id: i32, phone: &str) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM phone WHERE client_id = $1 AND phone = $2")
            .bind(client_id)
            .bind(phone.trim())
            .execute(self.get_pool())
            .await?
            .rows_affected();
        info!(client_id, removed, "phone delete");

        Ok(removed > 0)
    }

    /// Delete every number of a client, returning how many were removed.
    pub async fn delete_phone_all(&self, client_id: i32) -> Result<u64> {
        let mut conn = self.get_pool().acquire().await?;
        let removed = remove_all_phones(&mut conn, client_id).await?;
        info!(client_id, removed, "all phones deleted");

        Ok(removed)
    }

    /// Numbers registered to a client, sorted.
    pub async fn phones_of(&self, client_id: i32) -> Result<Vec<String>> {
        let phones = sqlx::query_scalar("SELECT phone FROM phone WHERE client_id = $1 ORDER BY phone")
            .bind(client_id)
            .fetch_all(self.get_pool())
            .await?;

        Ok(phones)
    }
}
