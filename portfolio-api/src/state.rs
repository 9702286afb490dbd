use portfolio_core::storage::DocumentStore;
use portfolio_core::{CategoryAllowList, PortfolioAggregator, StatusLog};
use std::sync::Arc;

/// Shared state for handlers; every component wraps the same store handle
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<PortfolioAggregator>,
    pub status_log: Arc<StatusLog>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, categories: CategoryAllowList) -> Self {
        Self {
            aggregator: Arc::new(PortfolioAggregator::with_categories(
                store.clone(),
                categories,
            )),
            status_log: Arc::new(StatusLog::new(store)),
        }
    }
}
