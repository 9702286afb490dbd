use crate::common::constants::STATUS_LIST_LIMIT;
use crate::common::error::{PortfolioError, Result};
use crate::domain::{StatusCheck, StatusCheckCreate};
use crate::storage::{Collection, DocumentStore, Serialization};
use std::sync::Arc;
use tracing::debug;

/// Append-only status audit log, independent of portfolio content
pub struct StatusLog {
    store: Arc<dyn DocumentStore>,
}

impl StatusLog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, input: StatusCheckCreate) -> Result<StatusCheck> {
        let client_name = input
            .client_name
            .ok_or_else(|| PortfolioError::validation("client_name", "field required"))?;

        let check = StatusCheck::new(client_name);
        self.store
            .insert(Collection::StatusChecks, Serialization::encode(&check)?)
            .await?;

        debug!("Recorded status check {} for {}", check.id, check.client_name);
        Ok(check)
    }

    /// Entries in insertion order, at most `STATUS_LIST_LIMIT` of them
    pub async fn list(&self) -> Result<Vec<StatusCheck>> {
        let documents = self
            .store
            .find(Collection::StatusChecks, &[], Some(STATUS_LIST_LIMIT))
            .await?;
        Serialization::decode_all(documents)
    }
}
