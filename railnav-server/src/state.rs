//! Shared application state.

use std::sync::Arc;

use railnav_core::RailNetwork;
use tokio::sync::Semaphore;

use crate::config::ServerConfig;

/// Caps applied to client supplied query sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub max_search_results: usize,
    pub max_alternatives: usize,
}

impl From<&ServerConfig> for QueryLimits {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_search_results: config.max_search_results,
            max_alternatives: config.max_alternatives,
        }
    }
}

impl Default for QueryLimits {
    fn default() -> Self {
        QueryLimits::from(&ServerConfig::default())
    }
}

/// The network is loaded once at start-up and only read afterwards
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<RailNetwork>,
    pub limits: QueryLimits,
    /// Held by every search running on the blocking pool until it returns,
    /// even when the request that started it has timed out
    pub search_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(network: RailNetwork, limits: QueryLimits, concurrent_searches: usize) -> Self {
        Self {
            network: Arc::new(network),
            limits,
            search_permits: Arc::new(Semaphore::new(concurrent_searches)),
        }
    }
}
