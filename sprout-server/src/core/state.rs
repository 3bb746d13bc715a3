use std::sync::Arc;

use crate::auth::{AuthorizationPolicy, JwtService};
use crate::core::Config;
use crate::db::Store;

/// Server state - shared handles for every request
///
/// Cloning is cheap: the store and services are behind `Arc`.
/// Nothing here is mutated after startup except the store's
/// concurrent maps; the signing secret is read-only.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory entity store
    pub store: Store,
    /// JWT token service (shared, read-only)
    pub jwt_service: Arc<JwtService>,
    /// Route authorization rules
    pub policy: Arc<AuthorizationPolicy>,
}

impl ServerState {
    pub fn new(
        config: Config,
        store: Store,
        jwt_service: Arc<JwtService>,
        policy: Arc<AuthorizationPolicy>,
    ) -> Self {
        Self {
            config,
            store,
            jwt_service,
            policy,
        }
    }

    /// Build the full state from configuration: empty store, JWT
    /// service from the configured secret, default policy table.
    pub fn initialize(config: &Config) -> Self {
        let store = Store::new();
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let policy = Arc::new(AuthorizationPolicy::default_rules());
        Self::new(config.clone(), store, jwt_service, policy)
    }

    /// Get the JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Get the entity store
    pub fn get_store(&self) -> Store {
        self.store.clone()
    }
}
