pub mod config;
pub mod error;
pub mod log;
pub mod models;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use log::{Log, LogError};
pub use models::Record;
pub use routes::create_router;
pub use state::AppState;
