use metrics_exporter_prometheus::PrometheusHandle;
use mindmatch::config::MatchingConfig;
use mindmatch::error::AppError;
use mindmatch::matching::{ConcernKeywordTable, RecommendationEngine};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine once at startup, honoring a configured replacement
/// keyword vocabulary when one is present.
pub(crate) fn build_engine(config: &MatchingConfig) -> Result<RecommendationEngine, AppError> {
    let table = match &config.keyword_table_path {
        Some(path) => {
            let table = ConcernKeywordTable::from_path(path)?;
            info!(path = %path.display(), concerns = table.len(), "loaded keyword vocabulary");
            table
        }
        None => ConcernKeywordTable::default(),
    };

    Ok(RecommendationEngine::new(table))
}
