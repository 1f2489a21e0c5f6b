use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the client directory
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// Name of the database the schema initializer expects to exist
    #[serde(default = "default_clients_database")]
    pub clients_database: String,
    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_clients_database() -> String {
    "clients_db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are loaded first if one exists, then
    /// `DATABASE_URL`, `CLIENTS_DATABASE` and `MAX_CONNECTIONS` are read.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}
