//! RIASEC pattern — top-N Holland dimensions as a letter code ("SAI") and a joined name.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::assessment::config::{AssessmentConfig, Locale};
use crate::assessment::scores::{InterestScores, RiasecDimension};

/// Size of the pattern shown on reports.
pub const DEFAULT_PATTERN_SIZE: usize = 3;
/// Size of the pattern substituted into the summary sentence.
pub const SUMMARY_PATTERN_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: RiasecDimension,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiasecPattern {
    /// All six dimensions, highest first.
    pub scores: Vec<DimensionScore>,
    pub top: Vec<RiasecDimension>,
    pub letters: Vec<String>,
    /// e.g. "SAI"
    pub short_pattern: String,
    /// e.g. "Social-Artistic-Investigative"
    pub full_pattern: String,
}

impl RiasecPattern {
    pub fn contains_letter(&self, dimension: RiasecDimension) -> bool {
        self.top.contains(&dimension)
    }
}

/// Sorts dimensions by score (descending) and takes the top `top_n`.
///
/// Tied scores keep the canonical R, I, A, S, E, C order. `top_n` above six is clamped.
pub fn generate_riasec_pattern(interests: &InterestScores, top_n: usize) -> RiasecPattern {
    let mut scores: Vec<DimensionScore> = RiasecDimension::ALL
        .iter()
        .map(|d| DimensionScore {
            dimension: *d,
            score: interests.get(*d),
        })
        .collect();

    // sort_by is stable, so canonical order survives ties; -0.0 and 0.0 compare equal
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let top: Vec<RiasecDimension> = scores
        .iter()
        .take(top_n.min(RiasecDimension::ALL.len()))
        .map(|s| s.dimension)
        .collect();

    let letters: Vec<String> = top.iter().map(|d| d.letter().to_string()).collect();
    let short_pattern = letters.concat();
    let full_pattern = top
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join("-");

    RiasecPattern {
        scores,
        top,
        letters,
        short_pattern,
        full_pattern,
    }
}

/// The full pattern with dimension names translated for `locale`.
pub fn localized_full_pattern(
    pattern: &RiasecPattern,
    config: &AssessmentConfig,
    locale: &Locale,
) -> String {
    pattern
        .top
        .iter()
        .map(|d| dimension_name(*d, config, locale))
        .collect::<Vec<_>>()
        .join("-")
}

/// Localized display name, falling back to the English name.
pub fn dimension_name(
    dimension: RiasecDimension,
    config: &AssessmentConfig,
    locale: &Locale,
) -> String {
    config
        .report
        .riasec_names
        .get(&dimension)
        .map(|t| config.text(t, locale))
        .filter(|s| !s.is_empty())
        .unwrap_or(dimension.name())
        .to_string()
}
