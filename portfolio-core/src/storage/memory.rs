use super::traits::{Collection, Document, DocumentStore, SortDirection, SortKey, StoredDocument};
use crate::common::error::{PortfolioError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

type Collections = HashMap<Collection, Vec<StoredDocument>>;

/// In-memory document store for development/testing.
///
/// Each collection is an insertion-ordered vector, so a stable sort gives
/// insertion order on ties for free.
#[derive(Clone)]
pub struct InMemoryStore {
    collections: Arc<Mutex<Collections>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| PortfolioError::storage("In-memory store lock poisoned"))
    }

    /// Number of documents currently held in a collection
    pub fn count(&self, collection: Collection) -> Result<usize> {
        Ok(self.lock()?.get(&collection).map_or(0, Vec::len))
    }
}

/// Rank JSON types the way the libSQL backend orders `json_extract` results:
/// missing/null first, then booleans and numbers, then text, then the rest.
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) | Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        Some(_) => 3,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (numeric(x), numeric(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

fn compare_documents(a: &Document, b: &Document, sort: &[SortKey]) -> Ordering {
    for key in sort {
        let ordering = compare_field(a.get(key.field), b.get(key.field));
        let ordering = match key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find(
        &self,
        collection: Collection,
        sort: &[SortKey],
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>> {
        let mut documents = {
            let collections = self.lock()?;
            collections.get(&collection).cloned().unwrap_or_default()
        };

        if !sort.is_empty() {
            documents.sort_by(|a, b| compare_documents(&a.body, &b.body, sort));
        }
        if let Some(limit) = limit {
            documents.truncate(limit);
        }

        Ok(documents)
    }

    async fn find_one(&self, collection: Collection) -> Result<Option<StoredDocument>> {
        let collections = self.lock()?;
        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.first())
            .cloned())
    }

    async fn insert(&self, collection: Collection, document: Document) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();

        let mut collections = self.lock()?;
        collections
            .entry(collection)
            .or_default()
            .push(StoredDocument {
                internal_id: id.clone(),
                body: document,
            });

        debug!("Inserted document into {} with id {}", collection, id);
        Ok(id)
    }
}
