#![allow(dead_code)]

//! Input score vectors — Big Five traits and RIASEC interests, both on a 0–100 scale.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Big Five (OCEAN) trait percentages as produced by the assessment backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// RIASEC (Holland Code) interest percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestScores {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    /// Canonical OCEAN order.
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    /// Key used in configuration weight maps.
    pub fn key(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "openness",
            BigFiveTrait::Conscientiousness => "conscientiousness",
            BigFiveTrait::Extraversion => "extraversion",
            BigFiveTrait::Agreeableness => "agreeableness",
            BigFiveTrait::Neuroticism => "neuroticism",
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "O",
            BigFiveTrait::Conscientiousness => "C",
            BigFiveTrait::Extraversion => "E",
            BigFiveTrait::Agreeableness => "A",
            BigFiveTrait::Neuroticism => "N",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiasecDimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecDimension {
    /// Canonical Holland order. Also the tie-break order for pattern sorting.
    pub const ALL: [RiasecDimension; 6] = [
        RiasecDimension::Realistic,
        RiasecDimension::Investigative,
        RiasecDimension::Artistic,
        RiasecDimension::Social,
        RiasecDimension::Enterprising,
        RiasecDimension::Conventional,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "R",
            RiasecDimension::Investigative => "I",
            RiasecDimension::Artistic => "A",
            RiasecDimension::Social => "S",
            RiasecDimension::Enterprising => "E",
            RiasecDimension::Conventional => "C",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "Realistic",
            RiasecDimension::Investigative => "Investigative",
            RiasecDimension::Artistic => "Artistic",
            RiasecDimension::Social => "Social",
            RiasecDimension::Enterprising => "Enterprising",
            RiasecDimension::Conventional => "Conventional",
        }
    }

    /// Parses a career tag: either the single letter or the full name, case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|d| {
            d.letter().eq_ignore_ascii_case(tag) || d.name().eq_ignore_ascii_case(tag)
        })
    }
}

impl TraitScores {
    pub fn get(&self, trait_: BigFiveTrait) -> f64 {
        match trait_ {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Rejects NaN, infinities and values outside [0, 100].
    pub fn validate(&self) -> Result<(), ScoringError> {
        for t in BigFiveTrait::ALL {
            check_range(&format!("traits.{}", t.key()), self.get(t))?;
        }
        Ok(())
    }
}

impl InterestScores {
    pub fn get(&self, dimension: RiasecDimension) -> f64 {
        match dimension {
            RiasecDimension::Realistic => self.realistic,
            RiasecDimension::Investigative => self.investigative,
            RiasecDimension::Artistic => self.artistic,
            RiasecDimension::Social => self.social,
            RiasecDimension::Enterprising => self.enterprising,
            RiasecDimension::Conventional => self.conventional,
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for d in RiasecDimension::ALL {
            let field = format!("interests.{}", d.name().to_lowercase());
            check_range(&field, self.get(d))?;
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}
