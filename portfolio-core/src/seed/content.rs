use crate::common::error::{PortfolioError, Result};
use crate::domain::*;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("../../content/default.toml");

/// Static content payload for the seeder. Data only; no timestamps or ids.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedContent {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub looking_for: LookingForInfo,
    #[serde(default)]
    pub experiences: Vec<ExperienceSeed>,
    #[serde(default)]
    pub projects: Vec<ProjectSeed>,
    #[serde(default)]
    pub tech_stack: Vec<TechStackSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceSeed {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSeed {
    pub title: String,
    pub description: String,
    pub impact: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechStackSeed {
    pub category: String,
    pub technologies: Vec<String>,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub order: i64,
}

impl SeedContent {
    /// Content shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CONTENT)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            PortfolioError::SeedContent(format!("Failed to read '{}': {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let content: SeedContent =
            toml::from_str(raw).map_err(|e| PortfolioError::SeedContent(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Category names double as keys in the portfolio response, so a payload
    /// may not define one twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.tech_stack {
            if !seen.insert(entry.category.as_str()) {
                return Err(PortfolioError::SeedContent(format!(
                    "duplicate tech stack category '{}'",
                    entry.category
                )));
            }
        }
        Ok(())
    }

    pub fn config(&self, now: DateTime<Utc>) -> PortfolioConfig {
        PortfolioConfig {
            id: None,
            personal: self.personal.clone(),
            about: self.about.clone(),
            looking_for: self.looking_for.clone(),
            updated_at: now,
        }
    }
}

impl ExperienceSeed {
    pub fn to_experience(&self, now: DateTime<Utc>) -> Experience {
        Experience {
            id: None,
            company: self.company.clone(),
            position: self.position.clone(),
            duration: self.duration.clone(),
            description: self.description.clone(),
            achievements: self.achievements.clone(),
            order: self.order,
            created_at: now,
        }
    }
}

impl ProjectSeed {
    pub fn to_project(&self, now: DateTime<Utc>) -> Project {
        Project {
            id: None,
            title: self.title.clone(),
            description: self.description.clone(),
            impact: self.impact.clone(),
            tech: self.tech.clone(),
            order: self.order,
            featured: self.featured,
            created_at: now,
        }
    }
}

impl TechStackSeed {
    pub fn to_category(&self) -> TechStackCategory {
        TechStackCategory {
            id: None,
            category: self.category.clone(),
            technologies: self.technologies.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            order: self.order,
        }
    }
}
