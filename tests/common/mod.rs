#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use client_directory::Directory;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

/// A directory pinned to a private schema that is dropped on teardown.
pub struct TestDirectory {
    pub directory: Directory,
    pub database: String,
    admin: PgPool,
    schema: String,
}

/// Connect to `DATABASE_URL` and create fresh tables in a throwaway schema.
///
/// Returns `None` when no database is configured so the calling test can
/// skip itself.
pub async fn setup() -> Option<TestDirectory> {
    dotenvy::dotenv().ok();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or_default();
    let schema = format!(
        "client_directory_test_{}_{}_{}",
        std::process::id(),
        NEXT_SCHEMA.fetch_add(1, Ordering::SeqCst),
        nanos
    );
    admin
        .execute(format!("CREATE SCHEMA {schema}").as_str())
        .await
        .expect("create test schema");

    let search_path = format!("SET search_path TO {schema}");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .after_connect(move |conn, _meta| {
            let sql = search_path.clone();
            Box::pin(async move {
                conn.execute(sql.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .expect("connect test pool");

    let database: String = sqlx::query_scalar("SELECT current_database()")
        .fetch_one(&pool)
        .await
        .expect("current database");

    let directory = Directory::from_pool(pool);
    directory
        .create_schema(&database)
        .await
        .expect("create tables");

    Some(TestDirectory {
        directory,
        database,
        admin,
        schema,
    })
}

impl TestDirectory {
    pub async fn phone_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM phone")
            .fetch_one(self.directory.get_pool())
            .await
            .expect("count phones")
    }

    pub async fn teardown(self) {
        self.directory.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop test schema");
        self.admin.close().await;
    }
}
