pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod search;
pub mod text;

pub use api::{create_router, AppState};
pub use catalog::MovieCatalog;
pub use config::ServiceConfig;
pub use error::{MoviedexError, Result};
pub use models::*;
pub use search::SearchEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
