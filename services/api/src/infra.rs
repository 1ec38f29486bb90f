use intern_match::config::AppConfig;
use intern_match::context::AppContext;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the shared context and loads the catalog before any request arrives.
pub(crate) fn build_context(config: &AppConfig) -> Arc<AppContext> {
    let context = Arc::new(AppContext::from_config(config));
    let loaded = context.loaded();

    match &loaded.warning {
        Some(warning) => warn!(path = %loaded.path.display(), "{warning}"),
        None => info!(
            path = %loaded.path.display(),
            postings = loaded.catalog.len(),
            source = loaded.source.label(),
            "catalog ready"
        ),
    }

    context
}
