//! The analysis pipeline: normalize, extract features, score, resolve.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::dictionary::ReferenceDictionary;
use crate::dimension::{Dimension, DimensionMap};
use crate::error::Result;
use crate::features::{FeatureBag, FeatureExtractor};
use crate::resolver::TypeResolver;
use crate::scoring::{DimensionScorer, DimensionSignal};
use crate::text::{phrase_text, tokenize};
use crate::types::{PersonalityType, TypeCode};

/// Score and human-readable evidence for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DimensionBreakdown {
    pub score: f64,
    pub indicators: Vec<String>,
}

/// Result of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub confidence: f64,
    pub breakdown: DimensionMap<DimensionBreakdown>,
    pub best_match: PersonalityType,
}

impl AnalysisResult {
    /// Result for input with nothing to classify.
    pub fn unknown() -> Self {
        AnalysisResult {
            type_code: TypeCode::Unknown,
            confidence: 0.0,
            breakdown: DimensionMap::default(),
            best_match: PersonalityType::ALL[0],
        }
    }

    pub fn scores(&self) -> DimensionMap<f64> {
        self.breakdown.map(|_, b| b.score)
    }
}

struct Source {
    tokens: Vec<String>,
    features: FeatureBag,
    signals: DimensionMap<DimensionSignal>,
}

/// Heuristic personality analyzer.
///
/// Holds the compiled configuration and a shared handle to the reference
/// dictionary. `analyze` takes `&self` and keeps no state between calls, so
/// one analyzer can serve any number of threads.
pub struct Analyzer {
    config: AnalyzerConfig,
    dictionary: Arc<ReferenceDictionary>,
    extractor: FeatureExtractor,
    scorer: DimensionScorer,
    resolver: TypeResolver,
}

impl Analyzer {
    /// Build an analyzer from a configuration and a dictionary.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: AnalyzerConfig, dictionary: Arc<ReferenceDictionary>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, dictionary))
    }

    fn build(config: AnalyzerConfig, dictionary: Arc<ReferenceDictionary>) -> Self {
        Analyzer {
            extractor: FeatureExtractor::new(&config.features),
            scorer: DimensionScorer::new(&config.scoring),
            resolver: TypeResolver::new(Arc::clone(&dictionary), &config.resolution),
            config,
            dictionary,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Arc<ReferenceDictionary> {
        &self.dictionary
    }

    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    fn read(&self, text: &str) -> Source {
        let tokens = tokenize(text);
        let phrases = phrase_text(text);
        let features = self.extractor.extract(&tokens, &phrases);
        let signals = self.scorer.signals(&tokens, &phrases, &features);
        Source {
            tokens,
            features,
            signals,
        }
    }

    /// Classify a questionnaire answer, optionally with chat history.
    ///
    /// Never fails. A questionnaire with no word tokens yields
    /// [`AnalysisResult::unknown`] whatever the chat history holds. At equal
    /// weighting the chat history is prepended to the questionnaire and the
    /// joined text is analyzed as one; any other weight scores the two
    /// separately and blends the raw scores.
    pub fn analyze(&self, questionnaire: &str, chat_history: Option<&str>) -> AnalysisResult {
        let source = self.read(questionnaire);
        if source.tokens.is_empty() {
            debug!("no questionnaire tokens to analyze");
            return AnalysisResult::unknown();
        }

        let (chat_text, chat) = match chat_history.map(|text| (text, self.read(text))) {
            Some((text, chat)) if !chat.tokens.is_empty() => (text, chat),
            _ => return self.finish(source, None),
        };

        if self.scorer.concatenates_sources() {
            let joined = self.read(&format!("{} {}", chat_text, questionnaire));
            return self.finish(joined, None);
        }
        self.finish(source, Some(chat))
    }

    fn finish(&self, questionnaire: Source, chat: Option<Source>) -> AnalysisResult {
        let token_count =
            questionnaire.tokens.len() + chat.as_ref().map_or(0, |c| c.tokens.len());
        debug!(
            questionnaire_tokens = questionnaire.tokens.len(),
            chat_tokens = chat.as_ref().map_or(0, |c| c.tokens.len()),
            "analyzing"
        );

        let q_raw = questionnaire.signals.map(|_, s| s.raw());
        let c_raw = chat.as_ref().map(|c| c.signals.map(|_, s| s.raw()));
        let scores = self.scorer.score(&q_raw, c_raw.as_ref(), token_count);
        let resolution = self.resolver.resolve(&scores);

        let mut signals = questionnaire.signals;
        let mut features = questionnaire.features;
        if let Some(chat) = &chat {
            for dim in Dimension::ALL {
                signals[dim].absorb_hits(&chat.signals[dim]);
            }
            features = features.merged(&chat.features);
        }

        let breakdown = DimensionMap::from_fn(|dim| DimensionBreakdown {
            score: scores[dim],
            indicators: indicators(&signals[dim], &features),
        });

        AnalysisResult {
            type_code: TypeCode::Known(resolution.personality_type),
            confidence: resolution.confidence,
            breakdown,
            best_match: resolution.best_match,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::build(
            AnalyzerConfig::default(),
            Arc::new(ReferenceDictionary::builtin()),
        )
    }
}

fn indicators(signal: &DimensionSignal, features: &FeatureBag) -> Vec<String> {
    let mut out: Vec<String> = signal
        .active_features
        .iter()
        .map(|key| features.describe(*key))
        .collect();
    out.extend(signal.positive_hits.iter().map(|t| format!("+{}", t)));
    out.extend(signal.negative_hits.iter().map(|t| format!("-{}", t)));
    out.extend(
        signal
            .phrase_hits
            .iter()
            .map(|(phrase, bonus)| format!("\"{}\" ({:+})", phrase, bonus)),
    );
    out
}

/// Analyze with the built-in configuration and dictionary.
pub fn analyze(questionnaire: &str, chat_history: Option<&str>) -> AnalysisResult {
    static DEFAULT: OnceLock<Analyzer> = OnceLock::new();
    DEFAULT
        .get_or_init(Analyzer::default)
        .analyze(questionnaire, chat_history)
}
