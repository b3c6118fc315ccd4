//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::careers::{Career, CareerRecommendation, MatchContext};
use crate::assessment::config::Locale;
use crate::assessment::pipeline::{build_assessment_report, AssessmentReport};
use crate::assessment::quadrant::{get_quadrant_results, QuadrantResult};
use crate::assessment::riasec::{generate_riasec_pattern, RiasecPattern, DEFAULT_PATTERN_SIZE};
use crate::assessment::scores::{InterestScores, TraitScores};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuadrantsRequest {
    pub traits: TraitScores,
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuadrantsResponse {
    pub locale: Locale,
    pub quadrants: Vec<QuadrantResult>,
}

#[derive(Debug, Deserialize)]
pub struct RiasecPatternRequest {
    pub interests: InterestScores,
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub interests: InterestScores,
    pub traits: TraitScores,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerMatchRequest {
    pub interests: InterestScores,
    pub traits: TraitScores,
    pub careers: Vec<Career>,
    pub locale: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CareerMatchResponse {
    pub recommendations: Vec<CareerRecommendation>,
    pub matcher_backend: String, // "riasec" — for transparency
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuadrantSummary {
    pub key: String,
    pub title: String,
    pub labels: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assessment/quadrants
pub async fn handle_quadrants(
    State(state): State<AppState>,
    Json(request): Json<QuadrantsRequest>,
) -> Result<Json<QuadrantsResponse>, AppError> {
    request.traits.validate()?;
    let locale = state.assessment.resolve_locale(request.locale.as_deref())?;

    let quadrants = get_quadrant_results(&request.traits, &state.assessment, &locale);
    Ok(Json(QuadrantsResponse { locale, quadrants }))
}

/// POST /api/v1/assessment/riasec-pattern
pub async fn handle_riasec_pattern(
    Json(request): Json<RiasecPatternRequest>,
) -> Result<Json<RiasecPattern>, AppError> {
    request.interests.validate()?;
    let top_n = request.top_n.unwrap_or(DEFAULT_PATTERN_SIZE);
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }
    Ok(Json(generate_riasec_pattern(&request.interests, top_n)))
}

/// POST /api/v1/assessment/report
///
/// Full pipeline: quadrants, RIASEC pattern, trait levels and generated report text.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    request.interests.validate()?;
    request.traits.validate()?;
    let locale = state.assessment.resolve_locale(request.locale.as_deref())?;

    let report =
        build_assessment_report(&request.interests, &request.traits, &locale, &state.assessment);
    info!(
        "Assessment report generated (riasec={}, locale={locale})",
        report.riasec.short_pattern
    );
    Ok(Json(report))
}

/// POST /api/v1/assessment/career-match
///
/// Ranks the supplied careers against the user's interests and explains each match.
pub async fn handle_career_match(
    State(state): State<AppState>,
    Json(request): Json<CareerMatchRequest>,
) -> Result<Json<CareerMatchResponse>, AppError> {
    request.interests.validate()?;
    request.traits.validate()?;
    if request.careers.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "careers cannot be empty".to_string(),
        ));
    }
    let locale = state.assessment.resolve_locale(request.locale.as_deref())?;
    let limit = request
        .limit
        .unwrap_or(state.config.career_recommendation_limit);
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let ctx = MatchContext {
        interests: &request.interests,
        traits: &request.traits,
        locale: &locale,
        config: &state.assessment,
    };
    let recommendations = state
        .career_matcher
        .recommend(&ctx, &request.careers, limit)
        .await?;

    Ok(Json(CareerMatchResponse {
        recommendations,
        matcher_backend: state.career_matcher.backend().to_string(),
    }))
}

/// GET /api/v1/assessment/quadrants
pub async fn handle_list_quadrants(
    State(state): State<AppState>,
    Query(params): Query<LocaleQuery>,
) -> Result<Json<Vec<QuadrantSummary>>, AppError> {
    let locale = state.assessment.resolve_locale(params.locale.as_deref())?;
    let summaries = state
        .assessment
        .quadrants
        .iter()
        .map(|q| QuadrantSummary {
            key: q.key.clone(),
            title: state.assessment.text(&q.title, &locale).to_string(),
            labels: q.labels.iter().map(|l| l.name.clone()).collect(),
        })
        .collect();
    Ok(Json(summaries))
}

/// GET /api/v1/assessment/quadrants/:key
pub async fn handle_get_quadrant(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> Result<Json<QuadrantSummary>, AppError> {
    let locale = state.assessment.resolve_locale(params.locale.as_deref())?;
    let quadrant = state
        .assessment
        .quadrant(&key)
        .ok_or_else(|| AppError::NotFound(format!("Quadrant {key} not found")))?;

    Ok(Json(QuadrantSummary {
        key: quadrant.key.clone(),
        title: state.assessment.text(&quadrant.title, &locale).to_string(),
        labels: quadrant.labels.iter().map(|l| l.name.clone()).collect(),
    }))
}
