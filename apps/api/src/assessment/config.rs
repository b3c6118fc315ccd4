#![allow(dead_code)]

//! Assessment configuration — quadrant weight tables, level boundaries and report text tables.
//!
//! Loaded once at startup and shared read-only as `Arc<AssessmentConfig>`.
//! Every scoring function takes the config explicitly; nothing reads global state.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::assessment::scores::{BigFiveTrait, RiasecDimension};
use crate::errors::ScoringError;

/// Default configuration payload compiled into the binary.
pub const DEFAULT_CONFIG_JSON: &str = include_str!("../../config/assessment.json");

// ────────────────────────────────────────────────────────────────────────────
// Locale handling
// ────────────────────────────────────────────────────────────────────────────

/// Language tag, e.g. `en` or `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

// Tags from config files go through the same normalization as request tags.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Locale::new)
    }
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A piece of text keyed by locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(entries: [(&str, &str); N]) -> Self {
        LocalizedText(
            entries
                .into_iter()
                .map(|(l, t)| (Locale::new(l), t.to_string()))
                .collect(),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Config data model
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive upper bounds for the Low and Average trait levels. Anything above
/// `average_max` is High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBoundaries {
    pub low_max: f64,
    pub average_max: f64,
}

impl Default for LevelBoundaries {
    fn default() -> Self {
        Self {
            low_max: 33.0,
            average_max: 66.0,
        }
    }
}

/// One label inside a quadrant. `weights` maps trait keys (`"openness"` …) to signed weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDefinition {
    pub name: String,
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub description: LocalizedText,
}

/// A behavioural quadrant. Label order is significant: it is the tie-break order
/// for primary label selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadrantDefinition {
    pub key: String,
    pub title: LocalizedText,
    pub labels: Vec<LabelDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelWords {
    pub high: LocalizedText,
    pub average: LocalizedText,
    pub low: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthPair {
    pub traits: [BigFiveTrait; 2],
    pub text: LocalizedText,
}

impl StrengthPair {
    /// Order-insensitive pair match.
    pub fn matches(&self, a: BigFiveTrait, b: BigFiveTrait) -> bool {
        (self.traits[0] == a && self.traits[1] == b) || (self.traits[0] == b && self.traits[1] == a)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatchText {
    /// Template with a `{dimensions}` placeholder.
    pub riasec_overlap: LocalizedText,
    pub trait_fit: BTreeMap<BigFiveTrait, LocalizedText>,
    pub generic: LocalizedText,
}

/// Lookup tables and templates used by the report text generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Template with `{riasecPattern}` and `{bigFivePattern}` placeholders.
    pub summary_template: LocalizedText,
    /// Template with `{level}` and `{trait}` placeholders.
    pub trait_phrase_template: LocalizedText,
    pub level_words: LevelWords,
    pub balanced_profile: LocalizedText,
    pub trait_names: BTreeMap<BigFiveTrait, LocalizedText>,
    pub riasec_names: BTreeMap<RiasecDimension, LocalizedText>,
    pub strength_pairs: Vec<StrengthPair>,
    pub interest_strengths: BTreeMap<RiasecDimension, LocalizedText>,
    pub generic_strengths: Vec<LocalizedText>,
    pub thrives_in: BTreeMap<BigFiveTrait, LocalizedText>,
    pub thrives_low_neuroticism: LocalizedText,
    pub fallback_thrives_in: LocalizedText,
    pub struggles_with: BTreeMap<BigFiveTrait, LocalizedText>,
    pub struggles_high_neuroticism: LocalizedText,
    pub fallback_struggles_with: LocalizedText,
    pub development: BTreeMap<BigFiveTrait, LocalizedText>,
    pub development_high_neuroticism: LocalizedText,
    pub generic_development: Vec<LocalizedText>,
    pub career_match: CareerMatchText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    #[serde(default)]
    pub levels: LevelBoundaries,
    pub quadrants: Vec<QuadrantDefinition>,
    pub report: ReportConfig,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading & validation
// ────────────────────────────────────────────────────────────────────────────

impl AssessmentConfig {
    /// Parses and validates a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let config: AssessmentConfig = serde_json::from_str(json)
            .map_err(|e| ScoringError::InvalidConfig(format!("malformed JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded default configuration.
    pub fn embedded() -> Result<Self, ScoringError> {
        Self::from_json(DEFAULT_CONFIG_JSON)
    }

    /// Loads from `path` when given, otherwise falls back to the embedded payload.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read assessment config at {}", path.display())
                })?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid assessment config at {}", path.display()))?
            }
            None => Self::embedded().context("Embedded assessment config is invalid")?,
        };

        info!(
            "Assessment config loaded: {} quadrants, locales [{}]",
            config.quadrants.len(),
            config
                .locales
                .iter()
                .map(Locale::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(config)
    }

    /// Fails fast on configuration faults that would otherwise degrade silently.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let invalid = |msg: String| Err(ScoringError::InvalidConfig(msg));

        if !self.locales.contains(&self.default_locale) {
            return invalid(format!(
                "default_locale '{}' is not listed in locales",
                self.default_locale
            ));
        }
        if self.report.summary_template.get(&self.default_locale).is_none() {
            return invalid(format!(
                "summary_template has no '{}' variant",
                self.default_locale
            ));
        }

        let levels = &self.levels;
        if !(levels.low_max.is_finite() && levels.average_max.is_finite())
            || levels.low_max >= levels.average_max
        {
            return invalid(format!(
                "levels.low_max ({}) must be below levels.average_max ({})",
                levels.low_max, levels.average_max
            ));
        }

        if self.quadrants.is_empty() {
            return invalid("at least one quadrant is required".to_string());
        }
        for quadrant in &self.quadrants {
            if quadrant.labels.is_empty() {
                return invalid(format!("quadrant '{}' has no labels", quadrant.key));
            }
            for label in &quadrant.labels {
                for (trait_key, weight) in &label.weights {
                    if BigFiveTrait::from_key(trait_key).is_none() {
                        return invalid(format!(
                            "quadrant '{}' label '{}' references unknown trait '{trait_key}'",
                            quadrant.key, label.name
                        ));
                    }
                    if !weight.is_finite() {
                        return invalid(format!(
                            "quadrant '{}' label '{}' has a non-finite weight for '{trait_key}'",
                            quadrant.key, label.name
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Replaces the default locale, e.g. from the `DEFAULT_LOCALE` env var.
    pub fn with_default_locale(mut self, tag: &str) -> Result<Self, ScoringError> {
        let locale = Locale::new(tag);
        if !self.locales.contains(&locale) {
            return Err(ScoringError::UnsupportedLocale(locale.to_string()));
        }
        self.default_locale = locale;
        self.validate()?;
        Ok(self)
    }

    /// Resolves a requested locale tag, falling back to the default when absent.
    pub fn resolve_locale(&self, requested: Option<&str>) -> Result<Locale, ScoringError> {
        match requested {
            None => Ok(self.default_locale.clone()),
            Some(tag) => {
                let locale = Locale::new(tag);
                if self.locales.contains(&locale) {
                    Ok(locale)
                } else {
                    Err(ScoringError::UnsupportedLocale(tag.to_string()))
                }
            }
        }
    }

    /// Localized lookup: requested locale, then the default locale, then empty.
    pub fn text<'a>(&'a self, text: &'a LocalizedText, locale: &Locale) -> &'a str {
        text.get(locale)
            .or_else(|| text.get(&self.default_locale))
            .unwrap_or("")
    }

    pub fn quadrant(&self, key: &str) -> Option<&QuadrantDefinition> {
        self.quadrants.iter().find(|q| q.key == key)
    }
}
