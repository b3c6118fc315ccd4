//! Full assessment report: raw scores → quadrants → RIASEC pattern → report text.

use serde::{Deserialize, Serialize};

use crate::assessment::config::{AssessmentConfig, Locale};
use crate::assessment::quadrant::{get_quadrant_results, QuadrantResult};
use crate::assessment::report::{generate_report_text, trait_levels, GeneratedReport, TraitLevelEntry};
use crate::assessment::riasec::{generate_riasec_pattern, RiasecPattern, DEFAULT_PATTERN_SIZE};
use crate::assessment::scores::{InterestScores, TraitScores};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub locale: Locale,
    pub quadrants: Vec<QuadrantResult>,
    pub riasec: RiasecPattern,
    pub trait_levels: Vec<TraitLevelEntry>,
    pub report: GeneratedReport,
}

pub fn build_assessment_report(
    interests: &InterestScores,
    traits: &TraitScores,
    locale: &Locale,
    config: &AssessmentConfig,
) -> AssessmentReport {
    AssessmentReport {
        locale: locale.clone(),
        quadrants: get_quadrant_results(traits, config, locale),
        riasec: generate_riasec_pattern(interests, DEFAULT_PATTERN_SIZE),
        trait_levels: trait_levels(traits, &config.levels),
        report: generate_report_text(interests, traits, locale, config),
    }
}
