//! Username/password authentication API: signup, login, and a token-gated
//! user listing over Postgres.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod users;

pub use app::build_app;
pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
