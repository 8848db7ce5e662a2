use std::sync::Arc;

use ojgate_config::{CorsConfig, JwtConfig};

use crate::modules::problems::{InMemoryProblemStore, ProblemStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub store: Arc<dyn ProblemStore>,
}

impl AppState {
    pub fn new(jwt_config: JwtConfig, cors_config: CorsConfig, store: Arc<dyn ProblemStore>) -> Self {
        Self {
            jwt_config,
            cors_config,
            store,
        }
    }
}

/// Builds state from the environment with an empty in-memory store.
pub fn init_app_state() -> AppState {
    AppState::new(
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        Arc::new(InMemoryProblemStore::new()),
    )
}
