//! HTTP JSON surface over a saved railway network.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::AppError;
pub use routes::create_router;
pub use state::{AppState, QueryLimits};
