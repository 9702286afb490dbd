use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub summary: String,
    pub experience: String,
    pub expertise: String,
    pub mindset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookingForInfo {
    pub title: String,
    pub description: String,
}

/// Singleton profile document; one per deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub looking_for: LookingForInfo,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStackCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub technologies: Vec<String>,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub order: i64,
}

/// Composite read-model returned by `GET /portfolio`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    /// Keyed by category, in category `order`
    pub tech_stack: IndexMap<String, Vec<String>>,
    pub looking_for: LookingForInfo,
}

/// Legacy audit record. Its `id` is generated here, not by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    #[serde(default)]
    pub client_name: Option<String>,
}
