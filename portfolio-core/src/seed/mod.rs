mod content;

pub use content::{ExperienceSeed, ProjectSeed, SeedContent, TechStackSeed};

use crate::common::error::Result;
use crate::storage::{Collection, DocumentStore, Serialization};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A profile document already existed; nothing was written
    AlreadySeeded,
    Seeded {
        experiences: usize,
        projects: usize,
        categories: usize,
    },
}

/// Populates default content when the store has no profile yet.
///
/// Check-then-insert: two seeders racing on an empty store can both insert.
/// Run it once during single-instance startup.
pub struct Seeder {
    store: Arc<dyn DocumentStore>,
}

impl Seeder {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn seed(&self, content: &SeedContent) -> Result<SeedOutcome> {
        if self
            .store
            .find_one(Collection::PortfolioConfig)
            .await?
            .is_some()
        {
            debug!("Portfolio config present, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let now = Utc::now();

        self.store
            .insert(
                Collection::PortfolioConfig,
                Serialization::encode(&content.config(now))?,
            )
            .await?;

        for seed in &content.experiences {
            self.store
                .insert(
                    Collection::Experiences,
                    Serialization::encode(&seed.to_experience(now))?,
                )
                .await?;
        }

        for seed in &content.projects {
            self.store
                .insert(
                    Collection::Projects,
                    Serialization::encode(&seed.to_project(now))?,
                )
                .await?;
        }

        for seed in &content.tech_stack {
            self.store
                .insert(
                    Collection::TechStack,
                    Serialization::encode(&seed.to_category())?,
                )
                .await?;
        }

        let outcome = SeedOutcome::Seeded {
            experiences: content.experiences.len(),
            projects: content.projects.len(),
            categories: content.tech_stack.len(),
        };
        info!("Seeded default portfolio content: {:?}", outcome);
        Ok(outcome)
    }
}
