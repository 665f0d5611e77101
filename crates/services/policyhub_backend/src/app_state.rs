// --- File: crates/services/policyhub_backend/src/app_state.rs ---
use crate::service_factory::PolicyHubServiceFactory;
use policyhub_common::services::ServiceFactory;
use policyhub_config::AppConfig;
use policyhub_db::DbClient;
use std::sync::Arc;

/// Everything the routers are built from.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_client: DbClient,
    pub service_factory: Arc<dyn ServiceFactory>,
}

/// Builder for AppState, mainly so tests can swap in their own services.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    db_client: DbClient,
    service_factory: Option<Arc<dyn ServiceFactory>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>, db_client: DbClient) -> Self {
        Self {
            config,
            db_client,
            service_factory: None,
        }
    }

    /// Set the service factory.
    pub fn with_service_factory(mut self, service_factory: Arc<dyn ServiceFactory>) -> Self {
        self.service_factory = Some(service_factory);
        self
    }

    /// Build the AppState, falling back to [`PolicyHubServiceFactory`].
    pub fn build(self) -> AppState {
        AppState {
            config: self.config,
            db_client: self.db_client,
            service_factory: self
                .service_factory
                .unwrap_or_else(|| Arc::new(PolicyHubServiceFactory::new())),
        }
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>, db_client: DbClient) -> AppStateBuilder {
        AppStateBuilder::new(config, db_client)
    }

    /// State with the production service factory.
    pub fn new(config: Arc<AppConfig>, db_client: DbClient) -> Self {
        Self::builder(config, db_client).build()
    }
}
