use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use portfolio_core::storage::{DocumentStore, InMemoryStore};
use portfolio_core::{CategoryAllowList, SeedContent};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Process-local store; content is lost on restart
    Memory,
    /// Turso/libSQL database (requires the `db` feature)
    Libsql,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Personal portfolio content API")]
#[command(version)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8001)]
    pub port: u16,

    /// Document store backend
    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackend::Memory)]
    pub storage: StorageBackend,

    /// libSQL database: local file path or libsql:// URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Auth token for a remote libSQL database
    #[arg(long, env = "LIBSQL_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Logical database name inside the store
    #[arg(long, env = "DB_NAME", default_value = "portfolio")]
    pub db_name: String,

    /// TOML file with seed content; the built-in content is used when unset
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Tech stack categories surfaced in the portfolio (comma-separated)
    #[arg(long, env = "TECH_CATEGORIES", value_delimiter = ',')]
    pub tech_categories: Vec<String>,

    /// Directory for rolling JSON log files
    #[arg(long, env = "LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Skip seeding default content on startup
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn seed_content(&self) -> anyhow::Result<SeedContent> {
        let content = match &self.seed_file {
            Some(path) => SeedContent::from_file(path)
                .with_context(|| format!("loading seed content from {}", path.display()))?,
            None => SeedContent::builtin().context("loading built-in seed content")?,
        };
        Ok(content)
    }

    pub fn category_allow_list(&self) -> CategoryAllowList {
        let names: Vec<&str> = self
            .tech_categories
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            CategoryAllowList::default()
        } else {
            CategoryAllowList::new(names)
        }
    }

    /// Construct the store handle shared by every component
    pub async fn open_store(&self) -> anyhow::Result<Arc<dyn DocumentStore>> {
        match self.storage {
            StorageBackend::Memory => {
                info!("Using in-memory document store");
                Ok(Arc::new(InMemoryStore::new()))
            }
            StorageBackend::Libsql => self.open_database_store().await,
        }
    }

    #[cfg(feature = "db")]
    async fn open_database_store(&self) -> anyhow::Result<Arc<dyn DocumentStore>> {
        use portfolio_core::storage::DatabaseStore;
        use portfolio_core::DatabaseConfig;

        let Some(url) = self.database_url.clone() else {
            bail!("DATABASE_URL must be set for the libsql backend");
        };
        let config = DatabaseConfig {
            url,
            auth_token: self.auth_token.clone(),
            namespace: self.db_name.clone(),
        };
        let store = DatabaseStore::new(&config)
            .await
            .context("opening libSQL document store")?;
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "db"))]
    async fn open_database_store(&self) -> anyhow::Result<Arc<dyn DocumentStore>> {
        bail!("the libsql backend requires building with the `db` feature")
    }
}
