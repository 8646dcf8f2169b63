use std::sync::Arc;

use crate::ats::scorer::{AtsScorer, LocalAtsScorer, RemoteAtsScorer};
use crate::backend_client::{BackendClient, BackendError};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Used directly for the backend health probe.
    pub backend: BackendClient,
    /// Tried first. Default: RemoteAtsScorer against the analysis backend.
    pub primary_scorer: Arc<dyn AtsScorer>,
    /// Used when the primary fails. Default: LocalAtsScorer.
    pub fallback_scorer: Arc<dyn AtsScorer>,
}

impl AppState {
    /// Wires the default remote-then-local scorers from `config`.
    pub fn from_config(config: Config) -> Result<Self, BackendError> {
        let backend = BackendClient::new(
            config.analysis_backend_url.clone(),
            config.ats_backend_timeout,
        )?;
        let primary_scorer = Arc::new(RemoteAtsScorer::new(
            backend.clone(),
            config.ats_backend_path.clone(),
        ));
        let fallback_scorer = Arc::new(LocalAtsScorer::new(config.ats_variance_seed));

        Ok(Self {
            config,
            backend,
            primary_scorer,
            fallback_scorer,
        })
    }
}
