//! Parameterized statement builders for the dynamic client queries.
//!
//! Builders return `None` when there is nothing to put in the SET or WHERE
//! list, so callers can reject the request instead of sending broken SQL.

use sqlx::{Postgres, QueryBuilder};

use crate::models::{Client, ClientFilter, ClientRecord};

/// Client columns joined with every phone the client owns.
pub(crate) const SELECT_CLIENT_PHONES: &str = "SELECT c.id, c.first_name, c.last_name, c.email, p.phone \
     FROM client AS c LEFT JOIN phone AS p ON p.client_id = c.id";

/// One row of the client/phone left join.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClientPhoneRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// `UPDATE client SET ... WHERE id = ...` over the given column assignments.
pub(crate) fn update_client(
    id: i32,
    columns: &[(&'static str, String)],
) -> Option<QueryBuilder<'static, Postgres>> {
    if columns.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE client SET ");
    let mut assignments = builder.separated(", ");
    for (column, value) in columns {
        assignments.push(format!("{column} = "));
        assignments.push_bind_unseparated(value.clone());
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    Some(builder)
}

/// Select every client matching all supplied criteria, with all their phones.
///
/// Criteria are trimmed and blank ones skipped. The phone criterion picks
/// clients owning that number; it does not narrow the phones returned for them.
pub(crate) fn find_clients(filter: &ClientFilter) -> Option<QueryBuilder<'static, Postgres>> {
    let filter = filter.normalized();
    if filter.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new(SELECT_CLIENT_PHONES);
    builder.push(" WHERE ");
    let mut criteria = builder.separated(" AND ");
    let columns = [
        ("c.first_name", &filter.first_name),
        ("c.last_name", &filter.last_name),
        ("c.email", &filter.email),
    ];
    for (column, value) in columns {
        if let Some(value) = value {
            criteria.push(format!("{column} = "));
            criteria.push_bind_unseparated(value.clone());
        }
    }
    if let Some(phone) = &filter.phone {
        criteria.push("EXISTS (SELECT 1 FROM phone AS f WHERE f.client_id = c.id AND f.phone = ");
        criteria.push_bind_unseparated(phone.clone());
        criteria.push_unseparated(")");
    }
    builder.push(" ORDER BY c.id, p.phone");

    Some(builder)
}

/// Fold join rows, ordered by client id, into one record per client.
pub(crate) fn group_rows(rows: Vec<ClientPhoneRow>) -> Vec<ClientRecord> {
    let mut records: Vec<ClientRecord> = Vec::new();

    for row in rows {
        let ClientPhoneRow {
            id,
            first_name,
            last_name,
            email,
            phone,
        } = row;

        let continues_last = records.last().is_some_and(|record| record.client.id == id);
        if !continues_last {
            records.push(ClientRecord {
                client: Client {
                    id,
                    first_name,
                    last_name,
                    email,
                },
                phones: Vec::new(),
            });
        }

        if let (Some(phone), Some(record)) = (phone, records.last_mut()) {
            record.phones.push(phone);
        }
    }

    records
}
