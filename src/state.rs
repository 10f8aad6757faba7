use std::sync::Arc;

use crate::{auth::JwtKeys, config::AppConfig, users::UserStore};

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> Self {
        let jwt = JwtKeys::from_config(&config.jwt);
        Self {
            users,
            config: Arc::new(config),
            jwt,
        }
    }
}
