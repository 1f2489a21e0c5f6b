use sqlx::PgConnection;
use tracing::info;

use super::phones::{insert_phone, remove_all_phones};
use super::query::{self, ClientPhoneRow, SELECT_CLIENT_PHONES};
use super::{required, Directory};
use crate::error::{DirectoryError, Result};
use crate::models::{parse_phones, ClientChanges, ClientFilter, ClientRecord};

async fn client_exists(conn: &mut PgConnection, id: i32) -> Result<bool> {
    let exists = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM client WHERE id = $1)")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(exists)
}

impl Directory {
    /// Insert a client and, optionally, its comma-separated phone numbers.
    ///
    /// Runs in one transaction: if any phone is rejected the client row is
    /// rolled back too. Returns the new client id.
    pub async fn add_client(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phones: Option<&str>,
    ) -> Result<i32> {
        let first_name = required("first_name", first_name)?;
        let last_name = required("last_name", last_name)?;
        let email = required("email", email)?;
        let phones = phones.map(parse_phones).unwrap_or_default();

        // Start a transaction
        let mut tx = self.get_pool().begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO client (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .fetch_one(&mut *tx)
        .await?;

        // Any rejected phone drops the transaction and the client with it
        for phone in &phones {
            insert_phone(&mut tx, id, phone).await?;
        }

        tx.commit().await?;
        info!(client_id = id, phones = phones.len(), "client added");

        Ok(id)
    }

    /// Update the supplied fields of a client.
    ///
    /// Blank values are ignored. When `changes.phones` holds numbers the client's
    /// phones are replaced by the parsed list. A change set with nothing left
    /// is rejected before any SQL runs.
    pub async fn change_client(&self, id: i32, changes: &ClientChanges) -> Result<()> {
        if changes.is_empty() {
            return Err(DirectoryError::EmptyUpdate);
        }

        let columns = changes
            .columns()
            .into_iter()
            .map(|(column, value)| required(column, value).map(|value| (column, value)))
            .collect::<Result<Vec<_>>>()?;

        // Start a transaction
        let mut tx = self.get_pool().begin().await?;

        // Update the client row, or just confirm it exists for a phones-only change
        match query::update_client(id, &columns) {
            Some(mut update) => {
                let updated = update.build().execute(&mut *tx).await?.rows_affected();
                if updated == 0 {
                    return Err(DirectoryError::ClientNotFound(id));
                }
            }
            None => {
                if !client_exists(&mut tx, id).await? {
                    return Err(DirectoryError::ClientNotFound(id));
                }
            }
        }

        // Replace the phone list
        if let Some(phones) = changes.phone_list() {
            remove_all_phones(&mut tx, id).await?;
            for phone in &phones {
                insert_phone(&mut tx, id, phone).await?;
            }
        }

        tx.commit().await?;
        info!(client_id = id, columns = columns.len(), "client changed");

        Ok(())
    }

    /// Delete a client and all of its phones in one transaction.
    pub async fn delete_client(&self, id: i32) -> Result<()> {
        // Start a transaction
        let mut tx = self.get_pool().begin().await?;

        // Delete phones first so the foreign key holds
        let phones = remove_all_phones(&mut tx, id).await?;

        // Then the client itself
        let deleted = sqlx::query("DELETE FROM client WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(DirectoryError::ClientNotFound(id));
        }

        tx.commit().await?;
        info!(client_id = id, phones, "client deleted");

        Ok(())
    }

    /// Every client matching all supplied criteria, ordered by id.
    pub async fn find_client(&self, filter: &ClientFilter) -> Result<Vec<ClientRecord>> {
        let mut select = query::find_clients(filter).ok_or(DirectoryError::EmptyFilter)?;

        let rows = select
            .build_query_as::<ClientPhoneRow>()
            .fetch_all(self.get_pool())
            .await?;

        Ok(query::group_rows(rows))
    }

    pub async fn get_client(&self, id: i32) -> Result<Option<ClientRecord>> {
        let rows = sqlx::query_as::<_, ClientPhoneRow>(&format!(
            "{SELECT_CLIENT_PHONES} WHERE c.id = $1 ORDER BY p.phone"
        ))
        .bind(id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(query::group_rows(rows).into_iter().next())
    }

    pub async fn list_clients(&self) -> Result<Vec<ClientRecord>> {
        let rows = sqlx::query_as::<_, ClientPhoneRow>(&format!(
            "{SELECT_CLIENT_PHONES} ORDER BY c.id, p.phone"
        ))
        .fetch_all(self.get_pool())
        .await?;

        Ok(query::group_rows(rows))
    }
}
