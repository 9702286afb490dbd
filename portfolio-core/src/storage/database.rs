use super::traits::{Collection, Document, DocumentStore, SortDirection, SortKey, StoredDocument};
use crate::common::error::{PortfolioError, Result};
use crate::database::{DatabaseConfig, DatabaseManager};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Document store backed by Turso/libSQL, one JSON row per document
pub struct DatabaseStore {
    db: Arc<DatabaseManager>,
}

impl DatabaseStore {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db_manager = DatabaseManager::new(config).await?;
        db_manager.run_migrations().await?;

        Ok(Self {
            db: Arc::new(db_manager),
        })
    }

    fn row_to_document(id: String, data: &str) -> Result<StoredDocument> {
        let body: Document = serde_json::from_str(data).map_err(|e| {
            PortfolioError::storage(format!("Failed to deserialize document {id}: {e}"))
        })?;
        Ok(StoredDocument {
            internal_id: id,
            body,
        })
    }

    fn order_by(sort: &[SortKey]) -> Vec<(String, bool)> {
        sort.iter()
            .map(|key| {
                (
                    format!("$.{}", key.field),
                    key.direction == SortDirection::Descending,
                )
            })
            .collect()
    }
}

#[async_trait]
impl DocumentStore for DatabaseStore {
    async fn find(
        &self,
        collection: Collection,
        sort: &[SortKey],
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>> {
        let rows = self
            .db
            .query_documents(collection.name(), &Self::order_by(sort), limit)
            .await?;

        rows.into_iter()
            .map(|(id, data)| Self::row_to_document(id, &data))
            .collect()
    }

    async fn find_one(&self, collection: Collection) -> Result<Option<StoredDocument>> {
        let mut rows = self
            .db
            .query_documents(collection.name(), &[], Some(1))
            .await?;

        match rows.pop() {
            Some((id, data)) => Ok(Some(Self::row_to_document(id, &data)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, collection: Collection, document: Document) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();
        let data = serde_json::to_string(&document)?;

        self.db.insert_document(&id, collection.name(), &data).await?;

        debug!("Inserted document into {} with id {}", collection, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    async fn open_store(dir: &std::path::Path, namespace: &str) -> DatabaseStore {
        let config = DatabaseConfig {
            url: dir.join("portfolio.db").to_string_lossy().into_owned(),
            auth_token: None,
            namespace: namespace.to_string(),
        };
        DatabaseStore::new(&config).await.unwrap()
    }

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_ordered() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path(), "test").await;

        for (title, order, featured) in [("a", 2, false), ("b", 2, true), ("c", 1, true), ("d", 1, false)] {
            store
                .insert(
                    Collection::Projects,
                    doc(json!({"title": title, "order": order, "featured": featured})),
                )
                .await
                .unwrap();
        }

        let found = store
            .find(
                Collection::Projects,
                &[SortKey::desc("featured"), SortKey::asc("order")],
                None,
            )
            .await
            .unwrap();
        let titles: Vec<&str> = found
            .iter()
            .map(|d| d.body["title"].as_str().unwrap())
            .collect();

        assert_eq!(titles, vec!["c", "b", "d", "a"]);
    }

    #[tokio::test]
    async fn test_find_one_and_limit() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path(), "test").await;

        assert!(store.find_one(Collection::PortfolioConfig).await.unwrap().is_none());

        let first = store
            .insert(Collection::PortfolioConfig, doc(json!({"n": 1})))
            .await
            .unwrap();
        store
            .insert(Collection::PortfolioConfig, doc(json!({"n": 2})))
            .await
            .unwrap();

        let found = store.find_one(Collection::PortfolioConfig).await.unwrap().unwrap();
        assert_eq!(found.internal_id, first);

        let limited = store
            .find(Collection::PortfolioConfig, &[], Some(1))
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let dir = tempdir().unwrap();
        let first = open_store(dir.path(), "alpha").await;
        let second = open_store(dir.path(), "beta").await;

        first
            .insert(Collection::TechStack, doc(json!({"category": "frontend"})))
            .await
            .unwrap();

        assert_eq!(first.find(Collection::TechStack, &[], None).await.unwrap().len(), 1);
        assert!(second.find(Collection::TechStack, &[], None).await.unwrap().is_empty());
    }
}
