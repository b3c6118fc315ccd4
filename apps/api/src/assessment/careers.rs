//! Career recommendations — pluggable, trait-based matcher that ranks a career
//! catalogue against a user's RIASEC interests.
//!
//! Default: `RiasecCareerMatcher` (pure-Rust, deterministic).
//! `AppState` holds an `Arc<dyn CareerMatcher>` so another backend can be swapped in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::config::{AssessmentConfig, Locale};
use crate::assessment::report::{explain_career_match, traits_at_level, TraitLevel};
use crate::assessment::riasec::{generate_riasec_pattern, DEFAULT_PATTERN_SIZE};
use crate::assessment::scores::{InterestScores, RiasecDimension, TraitScores};
use crate::errors::AppError;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub id: Uuid,
    pub title: String,
    /// RIASEC letters or names, e.g. `["S", "A"]` or `["Social"]`.
    #[serde(default)]
    pub riasec_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub career_id: Uuid,
    pub title: String,
    pub match_score: u32, // 0 – 100
    pub explanation: Vec<String>,
}

/// Everything a matcher needs for one request.
pub struct MatchContext<'a> {
    pub interests: &'a InterestScores,
    pub traits: &'a TraitScores,
    pub locale: &'a Locale,
    pub config: &'a AssessmentConfig,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap recommendation backends without touching the handler.
#[async_trait]
pub trait CareerMatcher: Send + Sync {
    async fn recommend(
        &self,
        ctx: &MatchContext<'_>,
        careers: &[Career],
        limit: usize,
    ) -> Result<Vec<CareerRecommendation>, AppError>;

    /// Backend label surfaced in responses.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RiasecCareerMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Ranks careers by the user's mean interest score over each career's RIASEC tags.
///
/// Algorithm:
/// 1. Parse each career tag into a RIASEC dimension (unrecognised tags ignored, duplicates collapsed)
/// 2. match_score = mean(interest score of each recognised dimension), rounded; 0 when none
/// 3. Sort descending by match_score; ties keep catalogue order
/// 4. Attach `explain_career_match` sentences and truncate to `limit`
pub struct RiasecCareerMatcher;

#[async_trait]
impl CareerMatcher for RiasecCareerMatcher {
    async fn recommend(
        &self,
        ctx: &MatchContext<'_>,
        careers: &[Career],
        limit: usize,
    ) -> Result<Vec<CareerRecommendation>, AppError> {
        Ok(rank_careers(ctx, careers, limit))
    }

    fn backend(&self) -> &'static str {
        "riasec"
    }
}

pub fn career_match_score(interests: &InterestScores, tags: &[String]) -> u32 {
    let mut dimensions: Vec<RiasecDimension> = Vec::new();
    for d in tags.iter().filter_map(|t| RiasecDimension::from_tag(t)) {
        if !dimensions.contains(&d) {
            dimensions.push(d);
        }
    }
    if dimensions.is_empty() {
        return 0;
    }
    let sum: f64 = dimensions.iter().map(|d| interests.get(*d)).sum();
    (sum / dimensions.len() as f64).round().clamp(0.0, 100.0) as u32
}

fn rank_careers(
    ctx: &MatchContext<'_>,
    careers: &[Career],
    limit: usize,
) -> Vec<CareerRecommendation> {
    let pattern = generate_riasec_pattern(ctx.interests, DEFAULT_PATTERN_SIZE);
    let high = traits_at_level(ctx.traits, &ctx.config.levels, TraitLevel::High);

    let mut scored: Vec<(u32, &Career)> = careers
        .iter()
        .map(|c| (career_match_score(ctx.interests, &c.riasec_tags), c))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(match_score, career)| CareerRecommendation {
            career_id: career.id,
            title: career.title.clone(),
            match_score,
            explanation: explain_career_match(
                &career.riasec_tags,
                &pattern,
                &high,
                ctx.config,
                ctx.locale,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests() -> InterestScores {
        InterestScores {
            realistic: 20.0,
            investigative: 60.0,
            artistic: 75.0,
            social: 88.0,
            enterprising: 30.0,
            conventional: 10.0,
        }
    }

    fn traits() -> TraitScores {
        TraitScores {
            openness: 80.0,
            conscientiousness: 50.0,
            extraversion: 50.0,
            agreeableness: 50.0,
            neuroticism: 50.0,
        }
    }

    fn career(title: &str, tags: &[&str]) -> Career {
        Career {
            id: Uuid::new_v4(),
            title: title.to_string(),
            riasec_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_match_score_is_mean_of_tag_interests() {
        let tags = vec!["S".to_string(), "A".to_string()];
        // (88 + 75) / 2 = 81.5 → 82
        assert_eq!(career_match_score(&interests(), &tags), 82);
    }

    #[test]
    fn test_match_score_ignores_unknown_and_duplicate_tags() {
        let tags = vec!["S".to_string(), "social".to_string(), "healthcare".to_string()];
        assert_eq!(career_match_score(&interests(), &tags), 88);
        assert_eq!(career_match_score(&interests(), &["remote".to_string()]), 0);
    }

    #[tokio::test]
    async fn test_recommendations_sorted_and_limited() {
        let config = AssessmentConfig::embedded().unwrap();
        let locale = Locale::new("en");
        let (i, t) = (interests(), traits());
        let ctx = MatchContext {
            interests: &i,
            traits: &t,
            locale: &locale,
            config: &config,
        };
        let careers = vec![
            career("Accountant", &["C", "E"]),
            career("Counselor", &["S", "I"]),
            career("Graphic Designer", &["A", "R"]),
            career("Teacher", &["S", "A"]),
        ];

        let recs = RiasecCareerMatcher.recommend(&ctx, &careers, 3).await.unwrap();
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Teacher", "Counselor", "Graphic Designer"]);
        assert_eq!(recs[0].match_score, 82);
        assert_eq!(recs[0].explanation.len(), 2);
        assert_eq!(
            recs[0].explanation[1],
            "Its creative and exploratory work suits your curiosity."
        );
    }

    #[tokio::test]
    async fn test_ties_keep_catalogue_order() {
        let config = AssessmentConfig::embedded().unwrap();
        let locale = Locale::new("en");
        let (i, t) = (interests(), traits());
        let ctx = MatchContext {
            interests: &i,
            traits: &t,
            locale: &locale,
            config: &config,
        };
        let careers = vec![career("B", &["S"]), career("A", &["Social"])];
        let recs = RiasecCareerMatcher
            .recommend(&ctx, &careers, DEFAULT_RECOMMENDATION_LIMIT)
            .await
            .unwrap();
        assert_eq!(recs[0].title, "B");
        assert_eq!(recs[1].title, "A");
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(RiasecCareerMatcher.backend(), "riasec");
    }
}
