#![allow(dead_code)]

//! Quadrant scoring — weighted aggregation of Big Five traits, softmax distribution
//! and primary label selection.
//!
//! Pipeline per quadrant:
//! 1. Normalize each trait to 0–1 (÷100)
//! 2. raw(label) = Σ normalized(trait) × weight(label, trait), missing weights contribute 0
//! 3. Softmax over the quadrant's raw scores, ×100, rounded independently per label
//! 4. Primary label = first label (config order) holding the maximum percentage

use serde::{Deserialize, Serialize};

use crate::assessment::config::{AssessmentConfig, Locale, QuadrantDefinition};
use crate::assessment::scores::{BigFiveTrait, TraitScores};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: u32,
}

/// Softmax distribution for one quadrant, labels in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantScores {
    pub quadrant: String,
    pub scores: Vec<LabelScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantResult {
    pub quadrant: String,
    pub title: String,
    pub scores: Vec<LabelScore>,
    pub primary_label: String,
    pub primary_score: u32,
    pub description: String,
}

/// Raw weighted score per label, in label order.
pub fn weighted_label_scores(
    traits: &TraitScores,
    quadrant: &QuadrantDefinition,
) -> Vec<(String, f64)> {
    quadrant
        .labels
        .iter()
        .map(|label| {
            let raw = BigFiveTrait::ALL
                .iter()
                .map(|t| {
                    let weight = label.weights.get(t.key()).copied().unwrap_or(0.0);
                    (traits.get(*t) / 100.0) * weight
                })
                .sum::<f64>();
            (label.name.clone(), raw)
        })
        .collect()
}

/// Numerically-stable softmax scaled to integer percentages.
///
/// Each entry is rounded on its own, so the total may land a point or two off 100.
pub fn softmax_percentages(raw: &[f64]) -> Vec<u32> {
    if raw.is_empty() {
        return vec![];
    }

    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = raw.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.iter()
        .map(|e| ((e / sum) * 100.0).round() as u32)
        .collect()
}

/// Highest-scoring label. Ties go to the earliest label.
pub fn primary_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    let mut best: Option<&LabelScore> = None;
    for s in scores {
        match best {
            Some(b) if s.score <= b.score => {}
            _ => best = Some(s),
        }
    }
    best
}

/// Softmax distribution for a single quadrant.
pub fn score_quadrant(traits: &TraitScores, quadrant: &QuadrantDefinition) -> QuadrantScores {
    let raw = weighted_label_scores(traits, quadrant);
    let values: Vec<f64> = raw.iter().map(|(_, v)| *v).collect();
    let percentages = softmax_percentages(&values);

    QuadrantScores {
        quadrant: quadrant.key.clone(),
        scores: raw
            .into_iter()
            .zip(percentages)
            .map(|((label, _), score)| LabelScore { label, score })
            .collect(),
    }
}

/// Distributions for every configured quadrant, in configuration order.
pub fn compute_quadrant_scores(
    traits: &TraitScores,
    config: &AssessmentConfig,
) -> Vec<QuadrantScores> {
    config
        .quadrants
        .iter()
        .map(|q| score_quadrant(traits, q))
        .collect()
}

/// Quadrant distributions with their primary label and localized description.
pub fn get_quadrant_results(
    traits: &TraitScores,
    config: &AssessmentConfig,
    locale: &Locale,
) -> Vec<QuadrantResult> {
    config
        .quadrants
        .iter()
        .map(|quadrant| {
            let QuadrantScores { quadrant: key, scores } = score_quadrant(traits, quadrant);

            let (primary_label, primary_score) = primary_label(&scores)
                .map(|p| (p.label.clone(), p.score))
                .unwrap_or_default();

            let description = quadrant
                .labels
                .iter()
                .find(|l| l.name == primary_label)
                .map(|l| config.text(&l.description, locale).to_string())
                .unwrap_or_default();

            QuadrantResult {
                quadrant: key,
                title: config.text(&quadrant.title, locale).to_string(),
                scores,
                primary_label,
                primary_score,
                description,
            }
        })
        .collect()
}
