use std::sync::Arc;

use crate::assessment::careers::CareerMatcher;
use crate::assessment::config::AssessmentConfig;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only scoring tables, loaded once at startup.
    pub assessment: Arc<AssessmentConfig>,
    /// Pluggable career matcher. Default: RiasecCareerMatcher.
    pub career_matcher: Arc<dyn CareerMatcher>,
}
