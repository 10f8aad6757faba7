use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod memory;
pub mod repo;
pub mod repo_types;

pub use memory::MemoryUserStore;
pub use repo::{PgUserStore, StoreError, UserStore};
pub use repo_types::{NewUser, PublicUser, User};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::users_routes())
}
