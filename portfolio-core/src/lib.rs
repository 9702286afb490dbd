pub mod aggregator;
pub mod common;
pub mod domain;
pub mod seed;
pub mod status_log;
pub mod storage;

#[cfg(feature = "db")]
pub mod database;

pub use aggregator::{CategoryAllowList, PortfolioAggregator};
pub use common::error::{PortfolioError, Result};
pub use domain::*;
pub use seed::{SeedContent, SeedOutcome, Seeder};
pub use status_log::StatusLog;

// Re-export database manager when db feature is enabled
#[cfg(feature = "db")]
pub use database::{DatabaseConfig, DatabaseManager};
