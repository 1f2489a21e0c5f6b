use std::io;

use anyhow::Result;

use client_directory::{config, db, demo, logging, DirectoryError};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    // Load configuration
    let config = config::init()?;
    println!("Initializing client directory...");

    // Initialize database connection
    let directory = db::init(&config).await?;
    println!("Database connection established");

    match directory.create_schema(&config.clients_database).await {
        Ok(()) => println!("Tables created in {}", config.clients_database),
        Err(DirectoryError::DatabaseMissing(name)) => {
            println!("Database {name} does not exist, nothing created");
            return Ok(());
        }
        Err(err @ DirectoryError::DatabaseMismatch { .. }) => {
            println!("Check DATABASE_URL and CLIENTS_DATABASE: {err}");
            return Ok(());
        }
        Err(err) => {
            println!("Schema creation failed: {err}");
            return Ok(());
        }
    }

    let mut stdout = io::stdout().lock();
    demo::load_seed(&directory, &mut stdout).await?;
    demo::run_lookup_sequence(&directory, &mut stdout).await?;

    directory.close().await;

    Ok(())
}
