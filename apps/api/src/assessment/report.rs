//! Report text generation — trait leveling, Big Five descriptor, strengths,
//! environment fit, development recommendations and career-match explanations.
//!
//! All text comes from `ReportConfig` tables. A missing table entry is skipped,
//! never an error; list sections are padded with generic fallbacks so they are
//! never empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::config::{AssessmentConfig, LevelBoundaries, Locale, LocalizedText};
use crate::assessment::riasec::{
    dimension_name, generate_riasec_pattern, localized_full_pattern, RiasecPattern,
    DEFAULT_PATTERN_SIZE, SUMMARY_PATTERN_SIZE,
};
use crate::assessment::scores::{BigFiveTrait, InterestScores, RiasecDimension, TraitScores};

pub const MIN_STRENGTHS: usize = 4;
pub const MAX_STRENGTHS: usize = 6;
pub const MIN_DEVELOPMENT: usize = 3;
pub const MAX_DEVELOPMENT: usize = 5;
pub const MAX_CAREER_SENTENCES: usize = 2;

const RIASEC_PLACEHOLDER: &str = "{riasecPattern}";
const BIG_FIVE_PLACEHOLDER: &str = "{bigFivePattern}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    High,
    Average,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitLevelEntry {
    #[serde(rename = "trait")]
    pub trait_: BigFiveTrait,
    pub score: f64,
    pub level: TraitLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub summary: String,
    pub riasec_pattern: String,
    pub big_five_pattern: String,
    pub strengths: Vec<String>,
    pub thrives_in: Vec<String>,
    pub may_struggle_with: Vec<String>,
    pub development_recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait leveling
// ────────────────────────────────────────────────────────────────────────────

pub fn classify_trait(score: f64, boundaries: &LevelBoundaries) -> TraitLevel {
    if score <= boundaries.low_max {
        TraitLevel::Low
    } else if score <= boundaries.average_max {
        TraitLevel::Average
    } else {
        TraitLevel::High
    }
}

/// Level for every trait, in OCEAN order.
pub fn trait_levels(traits: &TraitScores, boundaries: &LevelBoundaries) -> Vec<TraitLevelEntry> {
    BigFiveTrait::ALL
        .iter()
        .map(|t| {
            let score = traits.get(*t);
            TraitLevelEntry {
                trait_: *t,
                score,
                level: classify_trait(score, boundaries),
            }
        })
        .collect()
}

pub fn traits_at_level(
    traits: &TraitScores,
    boundaries: &LevelBoundaries,
    level: TraitLevel,
) -> Vec<BigFiveTrait> {
    trait_levels(traits, boundaries)
        .into_iter()
        .filter(|e| e.level == level)
        .map(|e| e.trait_)
        .collect()
}

/// "High Openness, Low Conscientiousness, Low Neuroticism". Average traits are omitted;
/// an all-average profile yields the configured balanced descriptor.
pub fn generate_big_five_pattern(
    traits: &TraitScores,
    config: &AssessmentConfig,
    locale: &Locale,
) -> String {
    let report = &config.report;
    let template = config.text(&report.trait_phrase_template, locale);

    let phrases: Vec<String> = trait_levels(traits, &config.levels)
        .into_iter()
        .filter_map(|entry| {
            let level_word = match entry.level {
                TraitLevel::High => config.text(&report.level_words.high, locale),
                TraitLevel::Low => config.text(&report.level_words.low, locale),
                TraitLevel::Average => return None,
            };
            let trait_name = report
                .trait_names
                .get(&entry.trait_)
                .map(|t| config.text(t, locale))
                .unwrap_or(entry.trait_.key());
            Some(
                template
                    .replace("{level}", level_word)
                    .replace("{trait}", trait_name),
            )
        })
        .collect();

    if phrases.is_empty() {
        config.text(&report.balanced_profile, locale).to_string()
    } else {
        phrases.join(", ")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report assembly
// ────────────────────────────────────────────────────────────────────────────

pub fn generate_report_text(
    interests: &InterestScores,
    traits: &TraitScores,
    locale: &Locale,
    config: &AssessmentConfig,
) -> GeneratedReport {
    let report = &config.report;
    let high = traits_at_level(traits, &config.levels, TraitLevel::High);
    let low = traits_at_level(traits, &config.levels, TraitLevel::Low);
    let neuroticism = classify_trait(traits.neuroticism, &config.levels);

    let summary_pattern = generate_riasec_pattern(interests, SUMMARY_PATTERN_SIZE);
    let full_pattern = generate_riasec_pattern(interests, DEFAULT_PATTERN_SIZE);
    let big_five_pattern = generate_big_five_pattern(traits, config, locale);

    let summary = config
        .text(&report.summary_template, locale)
        .replace(
            RIASEC_PLACEHOLDER,
            &localized_full_pattern(&summary_pattern, config, locale),
        )
        .replace(BIG_FIVE_PLACEHOLDER, &big_five_pattern);

    // Strengths: high-trait pairs, then the top interest, padded with generics
    let mut strengths = Vec::new();
    for (i, a) in high.iter().enumerate() {
        for b in &high[i + 1..] {
            if let Some(pair) = report.strength_pairs.iter().find(|p| p.matches(*a, *b)) {
                push_text(&mut strengths, config.text(&pair.text, locale));
            }
        }
    }
    if let Some(top) = full_pattern.top.first() {
        if let Some(text) = report.interest_strengths.get(top) {
            push_text(&mut strengths, config.text(text, locale));
        }
    }
    pad_with_fallbacks(&mut strengths, &report.generic_strengths, config, locale, MIN_STRENGTHS);
    strengths.truncate(MAX_STRENGTHS);

    // Environment fit
    let mut thrives_in = entries_for(&high, &report.thrives_in, config, locale);
    if neuroticism == TraitLevel::Low {
        push_text(&mut thrives_in, config.text(&report.thrives_low_neuroticism, locale));
    }
    if thrives_in.is_empty() {
        debug!("No trait-derived thrives_in entries; using fallback");
        push_text(&mut thrives_in, config.text(&report.fallback_thrives_in, locale));
    }

    let mut may_struggle_with = entries_for(&low, &report.struggles_with, config, locale);
    if neuroticism == TraitLevel::High {
        push_text(
            &mut may_struggle_with,
            config.text(&report.struggles_high_neuroticism, locale),
        );
    }
    if may_struggle_with.is_empty() {
        debug!("No trait-derived may_struggle_with entries; using fallback");
        push_text(
            &mut may_struggle_with,
            config.text(&report.fallback_struggles_with, locale),
        );
    }

    // Development recommendations
    let mut development_recommendations = entries_for(&low, &report.development, config, locale);
    if neuroticism == TraitLevel::High {
        push_text(
            &mut development_recommendations,
            config.text(&report.development_high_neuroticism, locale),
        );
    }
    pad_with_fallbacks(
        &mut development_recommendations,
        &report.generic_development,
        config,
        locale,
        MIN_DEVELOPMENT,
    );
    development_recommendations.truncate(MAX_DEVELOPMENT);

    GeneratedReport {
        summary,
        riasec_pattern: full_pattern.short_pattern,
        big_five_pattern,
        strengths,
        thrives_in,
        may_struggle_with,
        development_recommendations,
    }
}

/// Up to two sentences explaining why a career fits, from RIASEC tag overlap and
/// high traits. Falls back to one generic sentence.
pub fn explain_career_match(
    career_tags: &[String],
    pattern: &RiasecPattern,
    high_traits: &[BigFiveTrait],
    config: &AssessmentConfig,
    locale: &Locale,
) -> Vec<String> {
    let texts = &config.report.career_match;
    let mut sentences = Vec::new();

    let mut overlap: Vec<RiasecDimension> = Vec::new();
    for dimension in career_tags.iter().filter_map(|t| RiasecDimension::from_tag(t)) {
        if pattern.contains_letter(dimension) && !overlap.contains(&dimension) {
            overlap.push(dimension);
        }
    }
    if !overlap.is_empty() {
        let dimensions = overlap
            .iter()
            .map(|d| dimension_name(*d, config, locale))
            .collect::<Vec<_>>()
            .join(", ");
        push_text(
            &mut sentences,
            &config
                .text(&texts.riasec_overlap, locale)
                .replace("{dimensions}", &dimensions),
        );
    }

    for t in high_traits.iter().filter(|t| **t != BigFiveTrait::Neuroticism) {
        if sentences.len() >= MAX_CAREER_SENTENCES {
            break;
        }
        if let Some(text) = texts.trait_fit.get(t) {
            push_text(&mut sentences, config.text(text, locale));
        }
    }

    if sentences.is_empty() {
        push_text(&mut sentences, config.text(&texts.generic, locale));
    }
    sentences.truncate(MAX_CAREER_SENTENCES);
    sentences
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn push_text(items: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        items.push(text.to_string());
    }
}

/// Table entries for each trait, skipping neuroticism (handled separately) and missing keys.
fn entries_for(
    traits: &[BigFiveTrait],
    table: &BTreeMap<BigFiveTrait, LocalizedText>,
    config: &AssessmentConfig,
    locale: &Locale,
) -> Vec<String> {
    let mut out = Vec::new();
    for t in traits.iter().filter(|t| **t != BigFiveTrait::Neuroticism) {
        if let Some(text) = table.get(t) {
            push_text(&mut out, config.text(text, locale));
        }
    }
    out
}

/// Appends fallbacks in order until `min` items are present; never repeats an item.
fn pad_with_fallbacks(
    items: &mut Vec<String>,
    fallbacks: &[LocalizedText],
    config: &AssessmentConfig,
    locale: &Locale,
    min: usize,
) {
    for fallback in fallbacks {
        if items.len() >= min {
            break;
        }
        let text = config.text(fallback, locale);
        if !text.is_empty() && !items.iter().any(|i| i == text) {
            items.push(text.to_string());
        }
    }
}
