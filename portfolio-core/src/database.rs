use crate::common::error::{PortfolioError, Result};
use libsql::params::Params;
use libsql::{Builder, Connection, Database, Value};
use tracing::info;

/// Where the libSQL database lives and which logical database to use
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Local file path, or a `libsql://` / `https://` URL for a remote Turso database
    pub url: String,
    pub auth_token: Option<String>,
    /// Logical database name; every row is scoped to it
    pub namespace: String,
}

impl DatabaseConfig {
    fn is_remote(&self) -> bool {
        self.url.starts_with("libsql://")
            || self.url.starts_with("https://")
            || self.url.starts_with("http://")
    }
}

/// A document row: (id, data)
pub type DocumentRow = (String, String);

pub struct DatabaseManager {
    db: Database,
    namespace: String,
}

impl DatabaseManager {
    /// Open the database described by `config`
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let built = if config.is_remote() {
            let auth_token = config.auth_token.clone().ok_or_else(|| {
                PortfolioError::storage("LIBSQL_AUTH_TOKEN is required for a remote database")
            })?;
            info!("Connecting to remote libSQL database at {}", config.url);
            Builder::new_remote(config.url.clone(), auth_token).build().await
        } else {
            info!("Opening local libSQL database at {}", config.url);
            Builder::new_local(&config.url).build().await
        };
        let db = built
            .map_err(|e| PortfolioError::storage(format!("Failed to connect to database: {e}")))?;

        Ok(Self {
            db,
            namespace: config.namespace.clone(),
        })
    }

    /// Get a connection to the database
    pub fn get_connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| PortfolioError::storage(format!("Failed to get database connection: {e}")))
    }

    /// Create the documents table if it does not exist yet
    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations...");

        let conn = self.get_connection()?;
        let migration_sql_001 = include_str!("../migrations/001_create_documents.sql");
        conn.execute_batch(migration_sql_001)
            .await
            .map_err(|e| PortfolioError::storage(format!("Failed to run base migration: {e}")))?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    pub async fn insert_document(&self, id: &str, collection: &str, data: &str) -> Result<()> {
        let conn = self.get_connection()?;

        conn.execute(
            "INSERT INTO documents (id, namespace, collection, data, created_at)
             VALUES (?1, ?2, ?3, ?4, datetime('now'))",
            libsql::params![id, self.namespace.as_str(), collection, data],
        )
        .await
        .map_err(|e| PortfolioError::storage(format!("Failed to insert document: {e}")))?;

        Ok(())
    }

    /// Query a collection. `order_by` holds `(json path, descending)` pairs,
    /// applied before insertion order.
    pub async fn query_documents(
        &self,
        collection: &str,
        order_by: &[(String, bool)],
        limit: Option<usize>,
    ) -> Result<Vec<DocumentRow>> {
        let conn = self.get_connection()?;

        let mut sql = String::from(
            "SELECT id, data FROM documents WHERE namespace = ?1 AND collection = ?2 ORDER BY ",
        );
        let mut params = vec![
            Value::Text(self.namespace.clone()),
            Value::Text(collection.to_string()),
        ];

        for (path, descending) in order_by {
            params.push(Value::Text(path.clone()));
            sql.push_str(&format!(
                "json_extract(data, ?{}) {}, ",
                params.len(),
                if *descending { "DESC" } else { "ASC" }
            ));
        }
        sql.push_str("seq ASC");

        if let Some(limit) = limit {
            params.push(Value::Integer(limit as i64));
            sql.push_str(&format!(" LIMIT ?{}", params.len()));
        }

        let mut rows = conn
            .query(&sql, Params::Positional(params))
            .await
            .map_err(|e| PortfolioError::storage(format!("Failed to query {collection}: {e}")))?;

        let mut results = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| PortfolioError::storage(format!("Failed to read row: {e}")))?
        {
            let id: String = row
                .get(0)
                .map_err(|e| PortfolioError::storage(format!("Failed to get id: {e}")))?;
            let data: String = row
                .get(1)
                .map_err(|e| PortfolioError::storage(format!("Failed to get data: {e}")))?;

            results.push((id, data));
        }

        Ok(results)
    }
}
