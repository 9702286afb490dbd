use crate::common::constants::*;
use crate::common::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;

/// A schema-less record as held by the store
pub type Document = Map<String, Value>;

/// Key under which a backend may expose its native identifier inside a body
pub const INTERNAL_ID_FIELD: &str = "_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    PortfolioConfig,
    Experiences,
    Projects,
    TechStack,
    StatusChecks,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::PortfolioConfig => PORTFOLIO_CONFIG_COLLECTION,
            Collection::Experiences => EXPERIENCES_COLLECTION,
            Collection::Projects => PROJECTS_COLLECTION,
            Collection::TechStack => TECH_STACK_COLLECTION,
            Collection::StatusChecks => STATUS_CHECKS_COLLECTION,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One component of an ordering specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// A document as it comes out of a backend, before id normalization
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub internal_id: String,
    pub body: Document,
}

/// Document store access used by the seeder, aggregator and status log.
///
/// `find` orders by the given keys and falls back to insertion order on ties.
/// Documents missing a sort field sort before those that have it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(
        &self,
        collection: Collection,
        sort: &[SortKey],
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>>;

    /// First inserted document of the collection, if any
    async fn find_one(&self, collection: Collection) -> Result<Option<StoredDocument>>;

    /// Persist a document and return the store-assigned identifier
    async fn insert(&self, collection: Collection, document: Document) -> Result<String>;
}
