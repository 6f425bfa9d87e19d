//! Configuration for the heuristic analyzer.
//!
//! Every scoring constant lives here as data: term lists, phrase boosts,
//! per-dimension keyword weights and feature adjustments, the normalization
//! choice and the confidence threshold. The built-in [`Default`] is the
//! canonical table; `analyzer.toml` at the repository root spells out the
//! same values so a copy can be edited and loaded with `--config`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, DimensionMap};
use crate::error::{AnalyzerError, Result};
use crate::features::{BoostKind, FeatureKey};
use crate::text::normalize;

/// Main configuration structure loaded from `analyzer.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Type resolution and confidence
    pub resolution: ResolutionConfig,
    /// Feature-bag term lists and boosted phrases
    pub features: FeatureConfig,
    /// Per-dimension scoring rules
    pub scoring: ScoringConfig,
}

/// Type resolution configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Candidates below this confidence fall back to the nearest type.
    pub confidence_threshold: f64,
    /// Total absolute deviation that maps to zero confidence.
    pub max_deviation: f64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            confidence_threshold: 0.65,
            max_deviation: 4.0,
        }
    }
}

/// How a raw dimension score is brought onto the reference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreNormalization {
    /// Use the raw score as is.
    None,
    /// Divide the raw score by the number of tokens analyzed.
    TokenCount,
    /// `tanh(raw)`: keeps the sign, stays inside (-1, 1), never decreases.
    #[default]
    Saturating,
}

/// Dimension scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub normalization: ScoreNormalization,
    /// Share of the questionnaire when chat history is also given.
    /// 0.5 joins both texts before extraction; 1.0 ignores chat history.
    pub questionnaire_weight: f64,
    pub dimensions: DimensionMap<DimensionRule>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            normalization: ScoreNormalization::Saturating,
            questionnaire_weight: 0.5,
            dimensions: DimensionMap::from_fn(default_rule),
        }
    }
}

/// Scoring rule for one dimension. Positive contributions push toward the
/// first letter of the pair (E, S, T, J).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRule {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    /// Multiplier for `positive hits - negative hits`.
    pub keyword_weight: f64,
    /// Signed bonus per occurrence of each phrase.
    #[serde(default)]
    pub phrases: Vec<PhraseBonus>,
    /// Weighted feature-bag values added to the score.
    #[serde(default)]
    pub adjustments: Vec<FeatureAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseBonus {
    pub phrase: String,
    pub bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAdjustment {
    pub feature: FeatureKey,
    pub weight: f64,
}

/// Feature extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub social_terms: Vec<String>,
    pub solitary_terms: Vec<String>,
    pub abstract_terms: Vec<String>,
    pub concrete_terms: Vec<String>,
    pub logical_terms: Vec<String>,
    pub emotional_terms: Vec<String>,
    pub structured_terms: Vec<String>,
    pub flexible_terms: Vec<String>,
    pub collective_pronouns: Vec<String>,
    pub self_pronouns: Vec<String>,
    pub boosts: Vec<BoostPhrase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostPhrase {
    pub kind: BoostKind,
    pub phrase: String,
    pub bonus: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            social_terms: terms(&[
                "team", "friend", "friends", "party", "social", "socializing", "energy",
                "outgoing", "people", "crowd",
            ]),
            solitary_terms: terms(&[
                "alone", "read", "reading", "individual", "quiet", "introspective",
                "solitude", "independent",
            ]),
            abstract_terms: terms(&[
                "theory", "theories", "future", "possibility", "possibilities", "idea",
                "ideas", "concept", "concepts", "hypothesis", "metaphor", "visionary",
                "innovative", "innovation", "imagination", "speculative", "creativity",
                "creative",
            ]),
            concrete_terms: terms(&[
                "fact", "facts", "practical", "now", "detail", "details", "realistic",
                "hands-on", "physical", "proven", "concrete", "routines", "moment",
            ]),
            logical_terms: terms(&[
                "logic", "logical", "objective", "analysis", "analyze", "critique",
                "reason", "reasoning", "systematic", "efficiency", "rational",
                "questioning",
            ]),
            emotional_terms: terms(&[
                "feel", "feeling", "feelings", "value", "values", "harmony", "empathy",
                "compassion", "kindness", "sensitive", "emotions", "emotional",
            ]),
            structured_terms: terms(&[
                "plan", "planning", "organize", "organized", "deadline", "schedule",
                "goal", "goals", "strict", "efficient", "structure", "structured",
                "routine", "routines", "rules", "order",
            ]),
            flexible_terms: terms(&[
                "flexible", "spontaneous", "spontaneity", "adapt", "adapting", "open",
                "explore", "exploring", "improvise", "brainstorming",
            ]),
            collective_pronouns: terms(&["we", "us", "our"]),
            self_pronouns: terms(&["i", "me", "my", "myself"]),
            boosts: vec![
                boost(BoostKind::AbstractThinking, "thinking outside the box", 4.0),
                boost(BoostKind::FuturePlanning, "long-term impact", 4.0),
                boost(BoostKind::EmotionalAwareness, "understanding emotions", 4.0),
                boost(BoostKind::LogicalDecisionMaking, "rational decision making", 4.0),
                boost(BoostKind::ExcitementSeeking, "love excitement", 4.0),
                boost(BoostKind::DeepConversation, "deep conversation", 3.0),
            ],
        }
    }
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn phrase(phrase: &str, bonus: f64) -> PhraseBonus {
    PhraseBonus {
        phrase: phrase.to_string(),
        bonus,
    }
}

fn adjust(feature: FeatureKey, weight: f64) -> FeatureAdjustment {
    FeatureAdjustment { feature, weight }
}

fn boost(kind: BoostKind, phrase: &str, bonus: f64) -> BoostPhrase {
    BoostPhrase {
        kind,
        phrase: phrase.to_string(),
        bonus,
    }
}

fn default_rule(dim: Dimension) -> DimensionRule {
    match dim {
        Dimension::Ei => DimensionRule {
            positive_terms: terms(&[
                "team", "social", "we", "group", "talk", "debate", "debating", "discussion",
                "discussions", "party", "socializing", "outgoing", "brainstorming", "together",
            ]),
            negative_terms: terms(&[
                "alone", "individual", "solo", "quiet", "reserved", "solitary",
                "independently", "introspection",
            ]),
            keyword_weight: 1.5,
            phrases: vec![
                phrase("being around people", 1.0),
                phrase("time alone", -1.0),
            ],
            adjustments: vec![
                adjust(FeatureKey::SocialTerms, 0.8),
                adjust(FeatureKey::SolitaryTerms, -0.8),
                adjust(FeatureKey::PronounBalance, 0.5),
                adjust(FeatureKey::ExcitementSeeking, 0.2),
                adjust(FeatureKey::DeepConversation, -0.2),
            ],
        },
        Dimension::Sn => DimensionRule {
            positive_terms: terms(&[
                "fact", "facts", "detail", "details", "practical", "proven", "methods",
                "routines", "realistic", "concrete", "experience", "present", "tangible",
                "moment", "experiencing", "hands-on",
            ]),
            negative_terms: terms(&[
                "theory", "theories", "future", "idea", "ideas", "possibility",
                "possibilities", "vision", "innovation", "innovative", "imagination",
                "abstract", "speculative", "potential", "creativity", "creative", "dream",
                "dreams", "meaning",
            ]),
            keyword_weight: 1.5,
            phrases: vec![
                phrase("step-by-step", 1.0),
                phrase("new ideas", -1.0),
                phrase("creative solutions", -1.0),
                phrase("big-picture", -1.0),
            ],
            adjustments: vec![
                adjust(FeatureKey::ConcreteTerms, 0.4),
                adjust(FeatureKey::AbstractTerms, -0.4),
                adjust(FeatureKey::AbstractThinking, -0.2),
                adjust(FeatureKey::FuturePlanning, -0.2),
            ],
        },
        Dimension::Tf => DimensionRule {
            positive_terms: terms(&[
                "logic", "logical", "objective", "analysis", "analyze", "critique", "reason",
                "reasoning", "questioning", "challenging", "critical", "rational", "proven",
                "methods", "evidence", "data", "systematic", "efficiency",
            ]),
            negative_terms: terms(&[
                "feel", "feelings", "value", "values", "harmony", "empathy", "emotions",
                "emotional", "compassion", "kindness", "caring", "helping",
            ]),
            keyword_weight: 1.5,
            phrases: vec![
                phrase("strategic thinking", 1.0),
                phrase("critical thinking", 1.0),
                phrase("helping others", -1.0),
            ],
            adjustments: vec![
                adjust(FeatureKey::LogicalTerms, 0.3),
                adjust(FeatureKey::EmotionalTerms, -0.3),
                adjust(FeatureKey::LogicalDecisionMaking, 0.2),
                adjust(FeatureKey::EmotionalAwareness, -0.2),
            ],
        },
        Dimension::Jp => DimensionRule {
            positive_terms: terms(&[
                "plan", "planning", "organize", "organized", "deadline", "deadlines",
                "schedule", "structure", "structured", "routine", "routines", "rules", "order",
            ]),
            negative_terms: terms(&[
                "flexible", "spontaneous", "spontaneity", "adapt", "adapting", "open",
                "explore", "exploring", "improvise", "brainstorming", "moment",
            ]),
            keyword_weight: 1.5,
            phrases: vec![
                phrase("in advance", 1.0),
                phrase("go with the flow", -1.0),
                phrase("love trying new things", -1.0),
            ],
            adjustments: vec![
                adjust(FeatureKey::StructuredTerms, 0.3),
                adjust(FeatureKey::FlexibleTerms, -0.3),
                adjust(FeatureKey::ExcitementSeeking, -0.2),
            ],
        },
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file and validate it.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns `Ok(AnalyzerConfig)` if successful, or an error if the file
    /// cannot be read, parsed, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text. Sections and keys
    /// that are left out keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AnalyzerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every constant the analyzer relies on.
    pub fn validate(&self) -> Result<()> {
        let resolution = &self.resolution;
        if !(0.0..=1.0).contains(&resolution.confidence_threshold) {
            return Err(AnalyzerError::invalid_config(
                "resolution.confidence_threshold",
                "must be within [0, 1]",
            ));
        }
        if !resolution.max_deviation.is_finite() || resolution.max_deviation <= 0.0 {
            return Err(AnalyzerError::invalid_config(
                "resolution.max_deviation",
                "must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.scoring.questionnaire_weight) {
            return Err(AnalyzerError::invalid_config(
                "scoring.questionnaire_weight",
                "must be within [0, 1]",
            ));
        }

        for (dim, rule) in self.scoring.dimensions.iter() {
            let field = |name: &str| format!("scoring.dimensions.{}.{}", dim.label(), name);
            check_terms(&field("positive_terms"), &rule.positive_terms)?;
            check_terms(&field("negative_terms"), &rule.negative_terms)?;
            check_finite(&field("keyword_weight"), rule.keyword_weight)?;
            for p in &rule.phrases {
                check_phrase(&field("phrases"), &p.phrase)?;
                check_finite(&field("phrases"), p.bonus)?;
            }
            for a in &rule.adjustments {
                check_finite(&field("adjustments"), a.weight)?;
            }
        }

        let features = &self.features;
        for (name, list) in [
            ("social_terms", &features.social_terms),
            ("solitary_terms", &features.solitary_terms),
            ("abstract_terms", &features.abstract_terms),
            ("concrete_terms", &features.concrete_terms),
            ("logical_terms", &features.logical_terms),
            ("emotional_terms", &features.emotional_terms),
            ("structured_terms", &features.structured_terms),
            ("flexible_terms", &features.flexible_terms),
            ("collective_pronouns", &features.collective_pronouns),
            ("self_pronouns", &features.self_pronouns),
        ] {
            check_terms(&format!("features.{}", name), list)?;
        }

        let mut seen = HashSet::new();
        for b in &features.boosts {
            check_phrase("features.boosts", &b.phrase)?;
            check_finite("features.boosts", b.bonus)?;
            if !seen.insert(b.kind) {
                return Err(AnalyzerError::invalid_config(
                    "features.boosts",
                    format!("boost {:?} is configured more than once", b.kind),
                ));
            }
        }
        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyzerError::invalid_config(field, "must be a finite number"))
    }
}

fn check_phrase(field: &str, phrase: &str) -> Result<()> {
    if phrase.trim().is_empty() {
        return Err(AnalyzerError::invalid_config(field, "phrases must not be empty"));
    }
    Ok(())
}

/// Token lists match single tokens; a term that normalizes to nothing or to
/// several words could never match and belongs in a phrase list instead.
fn check_terms(field: &str, terms: &[String]) -> Result<()> {
    for term in terms {
        let normalized = normalize(term);
        match normalized.split_whitespace().count() {
            1 => {}
            0 => {
                return Err(AnalyzerError::invalid_config(
                    field,
                    format!("term {:?} is empty after normalization", term),
                ))
            }
            _ => {
                return Err(AnalyzerError::invalid_config(
                    field,
                    format!("term {:?} has several words; use a phrase instead", term),
                ))
            }
        }
    }
    Ok(())
}
