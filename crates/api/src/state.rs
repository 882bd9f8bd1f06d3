use std::sync::Arc;

use reelgen_pipeline::ExtensionPipeline;
use reelgen_providers::ProviderRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The registry is
/// immutable after startup; handlers never mutate shared state.
#[derive(Clone)]
pub struct AppState {
    /// All provider adapters, assembled at startup.
    pub registry: Arc<ProviderRegistry>,
    /// Extension chain runner.
    pub pipeline: Arc<ExtensionPipeline>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
