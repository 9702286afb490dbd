use crate::common::constants::{KNOWN_TECH_CATEGORIES, NOT_FOUND_MESSAGE};
use crate::common::error::{PortfolioError, Result};
use crate::domain::*;
use crate::storage::{Collection, DocumentStore, Serialization, SortKey};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

const EXPERIENCE_ORDER: &[SortKey] = &[SortKey::asc("order")];
const PROJECT_ORDER: &[SortKey] = &[SortKey::desc("featured"), SortKey::asc("order")];
const TECH_STACK_ORDER: &[SortKey] = &[SortKey::asc("order")];

/// Category names that make it into `techStack`.
///
/// Anything else stored in the tech stack collection is dropped without error,
/// so a new category only shows up once it is listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAllowList {
    names: HashSet<String>,
}

impl Default for CategoryAllowList {
    fn default() -> Self {
        Self::new(KNOWN_TECH_CATEGORIES.iter().copied())
    }
}

impl CategoryAllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.names.contains(category)
    }

    /// Fold ordered categories into the response map. Keys keep the order
    /// they first appear in; a repeated category replaces the technologies.
    pub fn fold(&self, categories: Vec<TechStackCategory>) -> IndexMap<String, Vec<String>> {
        let mut tech_stack = IndexMap::new();
        for entry in categories {
            if self.contains(&entry.category) {
                tech_stack.insert(entry.category, entry.technologies);
            } else {
                debug!("Dropping tech stack category '{}' (not allow-listed)", entry.category);
            }
        }
        tech_stack
    }
}

/// Builds the composite portfolio read-model from the store
pub struct PortfolioAggregator {
    store: Arc<dyn DocumentStore>,
    categories: CategoryAllowList,
}

impl PortfolioAggregator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_categories(store, CategoryAllowList::default())
    }

    pub fn with_categories(store: Arc<dyn DocumentStore>, categories: CategoryAllowList) -> Self {
        Self { store, categories }
    }

    pub async fn get_portfolio(&self) -> Result<Portfolio> {
        let config: PortfolioConfig = match self.store.find_one(Collection::PortfolioConfig).await? {
            Some(document) => Serialization::decode(document)?,
            None => return Err(PortfolioError::NotFound(NOT_FOUND_MESSAGE.to_string())),
        };

        let (experiences, projects, tech_stack) = tokio::try_join!(
            self.store.find(Collection::Experiences, EXPERIENCE_ORDER, None),
            self.store.find(Collection::Projects, PROJECT_ORDER, None),
            self.store.find(Collection::TechStack, TECH_STACK_ORDER, None),
        )?;

        let experience: Vec<Experience> = Serialization::decode_all(experiences)?;
        let projects: Vec<Project> = Serialization::decode_all(projects)?;
        let categories: Vec<TechStackCategory> = Serialization::decode_all(tech_stack)?;

        debug!(
            "Assembled portfolio: {} experiences, {} projects, {} categories",
            experience.len(),
            projects.len(),
            categories.len()
        );

        Ok(Portfolio {
            personal: config.personal,
            about: config.about,
            experience,
            projects,
            tech_stack: self.categories.fold(categories),
            looking_for: config.looking_for,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{SeedContent, Seeder};
    use crate::storage::{Document, InMemoryStore, StoredDocument};
    use async_trait::async_trait;
    use chrono::Utc;

    /// Store whose reads always fail, to exercise the error path
    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find(
            &self,
            _collection: Collection,
            _sort: &[SortKey],
            _limit: Option<usize>,
        ) -> Result<Vec<StoredDocument>> {
            Err(PortfolioError::storage("connection refused"))
        }

        async fn find_one(&self, _collection: Collection) -> Result<Option<StoredDocument>> {
            Err(PortfolioError::storage("connection refused"))
        }

        async fn insert(&self, _collection: Collection, _document: Document) -> Result<String> {
            Err(PortfolioError::storage("connection refused"))
        }
    }

    fn experience(company: &str, order: i64) -> Experience {
        Experience {
            id: None,
            company: company.to_string(),
            position: "Engineer".to_string(),
            duration: "2020 - 2021".to_string(),
            description: "Work".to_string(),
            achievements: vec![],
            order,
            created_at: Utc::now(),
        }
    }

    fn project(title: &str, order: i64, featured: bool) -> Project {
        Project {
            id: None,
            title: title.to_string(),
            description: "d".to_string(),
            impact: "i".to_string(),
            tech: vec!["Rust".to_string()],
            order,
            featured,
            created_at: Utc::now(),
        }
    }

    fn category(name: &str, order: i64) -> TechStackCategory {
        TechStackCategory {
            id: None,
            category: name.to_string(),
            technologies: vec![format!("{name}-tech")],
            icon: "*".to_string(),
            color: "bg".to_string(),
            order,
        }
    }

    /// Seed only the profile so each test controls the list collections
    async fn store_with_profile() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        let content = SeedContent::builtin().unwrap();
        store
            .insert(
                Collection::PortfolioConfig,
                Serialization::encode(&content.config(Utc::now())).unwrap(),
            )
            .await
            .unwrap();
        store
    }

    async fn insert<T: serde::Serialize>(store: &InMemoryStore, collection: Collection, value: &T) {
        store
            .insert(collection, Serialization::encode(value).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let aggregator = PortfolioAggregator::new(Arc::new(InMemoryStore::new()));

        let err = aggregator.get_portfolio().await.unwrap_err();
        match err {
            PortfolioError::NotFound(message) => assert_eq!(message, "Portfolio not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_experience_ordered_by_order() {
        let store = store_with_profile().await;
        insert(&store, Collection::Experiences, &experience("Acme", 2)).await;
        insert(&store, Collection::Experiences, &experience("Globex", 1)).await;

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();
        let companies: Vec<&str> = portfolio.experience.iter().map(|e| e.company.as_str()).collect();

        assert_eq!(companies, vec!["Globex", "Acme"]);
        assert!(portfolio.experience.iter().all(|e| e.id.is_some()));
    }

    #[tokio::test]
    async fn test_projects_featured_first() {
        let store = store_with_profile().await;
        insert(&store, Collection::Projects, &project("plain-1", 1, false)).await;
        insert(&store, Collection::Projects, &project("star-5", 5, true)).await;
        insert(&store, Collection::Projects, &project("plain-0", 0, false)).await;
        insert(&store, Collection::Projects, &project("star-2", 2, true)).await;

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["star-2", "star-5", "plain-0", "plain-1"]);
    }

    #[tokio::test]
    async fn test_unknown_categories_dropped() {
        let store = store_with_profile().await;
        insert(&store, Collection::TechStack, &category("frontend", 1)).await;
        insert(&store, Collection::TechStack, &category("cloud", 2)).await;
        insert(&store, Collection::TechStack, &category("tools", 3)).await;

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();

        assert_eq!(portfolio.tech_stack.len(), 2);
        assert_eq!(portfolio.tech_stack["frontend"], vec!["frontend-tech".to_string()]);
        assert!(portfolio.tech_stack.contains_key("tools"));
        assert!(!portfolio.tech_stack.contains_key("cloud"));
    }

    #[tokio::test]
    async fn test_tech_stack_keys_follow_category_order() {
        let store = store_with_profile().await;
        insert(&store, Collection::TechStack, &category("tools", 4)).await;
        insert(&store, Collection::TechStack, &category("frontend", 1)).await;
        insert(&store, Collection::TechStack, &category("backend", 3)).await;
        insert(&store, Collection::TechStack, &category("performance", 2)).await;

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();

        assert_eq!(
            portfolio.tech_stack.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["frontend", "performance", "backend", "tools"]
        );
    }

    #[tokio::test]
    async fn test_custom_allow_list() {
        let store = store_with_profile().await;
        insert(&store, Collection::TechStack, &category("frontend", 1)).await;
        insert(&store, Collection::TechStack, &category("cloud", 2)).await;

        let aggregator =
            PortfolioAggregator::with_categories(store, CategoryAllowList::new(["cloud"]));
        let portfolio = aggregator.get_portfolio().await.unwrap();

        assert_eq!(portfolio.tech_stack.keys().collect::<Vec<_>>(), vec!["cloud"]);
    }

    #[tokio::test]
    async fn test_seeded_portfolio_is_complete() {
        let store = Arc::new(InMemoryStore::new());
        Seeder::new(store.clone())
            .seed(&SeedContent::builtin().unwrap())
            .await
            .unwrap();

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();

        assert_eq!(portfolio.personal.name, "Dwayne Webb");
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(
            portfolio.tech_stack.keys().map(String::as_str).collect::<Vec<_>>(),
            KNOWN_TECH_CATEGORIES.to_vec()
        );
        assert!(portfolio.projects[..3].iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let aggregator = PortfolioAggregator::new(Arc::new(FailingStore));

        let err = aggregator.get_portfolio().await.unwrap_err();
        assert!(matches!(err, PortfolioError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_is_serialization_error() {
        let store = store_with_profile().await;
        store
            .insert(
                Collection::Experiences,
                serde_json::json!({"company": "NoFields"}).as_object().cloned().unwrap(),
            )
            .await
            .unwrap();

        let err = PortfolioAggregator::new(store).get_portfolio().await.unwrap_err();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_experience_without_created_at_is_accepted() {
        let store = store_with_profile().await;
        store
            .insert(
                Collection::Experiences,
                serde_json::json!({
                    "company": "Handwritten",
                    "position": "Engineer",
                    "duration": "2018",
                    "description": "d",
                    "achievements": [],
                    "order": 1
                })
                .as_object()
                .cloned()
                .unwrap(),
            )
            .await
            .unwrap();

        let portfolio = PortfolioAggregator::new(store).get_portfolio().await.unwrap();

        assert_eq!(portfolio.experience.len(), 1);
        assert_eq!(portfolio.experience[0].company, "Handwritten");
        assert!(portfolio.experience[0].id.is_some());
    }
}
