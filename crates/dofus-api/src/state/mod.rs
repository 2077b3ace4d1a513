//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and configuration.

use std::sync::Arc;

use dofus_common::AppConfig;
use dofus_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration, absent when the state is assembled by hand
    config: Option<Arc<AppConfig>>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Some(Arc::new(config)),
        }
    }

    /// State around a ready-made service context, without process configuration
    pub fn from_context(service_context: ServiceContext) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: None,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> Option<&AppConfig> {
        self.config.as_deref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &self.config.as_ref().map(|_| "AppConfig"))
            .finish()
    }
}
