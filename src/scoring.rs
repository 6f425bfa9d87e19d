//! Dimension scoring.
//!
//! Each dimension gets a raw score from three signals: the keyword
//! differential, per-occurrence phrase bonuses and the feature-bag
//! adjustment. At equal weighting the chat history and the questionnaire are
//! scored as one joined text; otherwise their raw scores are blended. Either
//! way the result is normalized onto the [-1, 1] scale of the reference
//! dictionary.

use tracing::debug;

use crate::config::{ScoreNormalization, ScoringConfig};
use crate::dimension::{Dimension, DimensionMap};
use crate::features::{FeatureBag, FeatureKey};
use crate::text::{count_phrase, TermSet};

/// The three signals behind one raw dimension score, plus what triggered them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionSignal {
    /// `(positive hits - negative hits) * keyword_weight`
    pub keyword: f64,
    /// Sum of phrase bonuses, one per occurrence.
    pub phrase: f64,
    /// Sum of `feature value * weight` over the dimension's adjustments.
    pub adjustment: f64,
    /// Distinct positive terms found, in order of first appearance.
    pub positive_hits: Vec<String>,
    /// Distinct negative terms found, in order of first appearance.
    pub negative_hits: Vec<String>,
    /// Phrases found, with their signed bonus.
    pub phrase_hits: Vec<(String, f64)>,
    /// Adjustment features with a non-zero value.
    pub active_features: Vec<FeatureKey>,
}

impl DimensionSignal {
    pub fn raw(&self) -> f64 {
        self.keyword + self.phrase + self.adjustment
    }

    /// Fold the hits of another source into this one. Scores are left alone;
    /// blending happens on raw values.
    pub fn absorb_hits(&mut self, other: &DimensionSignal) {
        push_distinct(&mut self.positive_hits, &other.positive_hits);
        push_distinct(&mut self.negative_hits, &other.negative_hits);
        for hit in &other.phrase_hits {
            if !self.phrase_hits.iter().any(|(p, _)| p == &hit.0) {
                self.phrase_hits.push(hit.clone());
            }
        }
        for key in &other.active_features {
            if !self.active_features.contains(key) {
                self.active_features.push(*key);
            }
        }
    }
}

fn push_distinct(into: &mut Vec<String>, from: &[String]) {
    for item in from {
        if !into.contains(item) {
            into.push(item.clone());
        }
    }
}

struct CompiledRule {
    positive: TermSet,
    negative: TermSet,
    keyword_weight: f64,
    phrases: Vec<(String, f64)>,
    adjustments: Vec<(FeatureKey, f64)>,
}

impl CompiledRule {
    fn signal(&self, tokens: &[String], phrase_text: &str, features: &FeatureBag) -> DimensionSignal {
        let mut positive_hits = Vec::new();
        let mut negative_hits = Vec::new();
        let mut positive = 0u32;
        let mut negative = 0u32;
        for token in tokens {
            // a term listed on both sides cancels out
            if self.positive.contains(token) {
                positive += 1;
                if !positive_hits.contains(token) {
                    positive_hits.push(token.clone());
                }
            }
            if self.negative.contains(token) {
                negative += 1;
                if !negative_hits.contains(token) {
                    negative_hits.push(token.clone());
                }
            }
        }
        let keyword = (f64::from(positive) - f64::from(negative)) * self.keyword_weight;

        let mut phrase = 0.0;
        let mut phrase_hits = Vec::new();
        for (text, bonus) in &self.phrases {
            let occurrences = count_phrase(phrase_text, text);
            if occurrences > 0 {
                phrase += occurrences as f64 * bonus;
                phrase_hits.push((text.clone(), *bonus));
            }
        }

        let mut adjustment = 0.0;
        let mut active_features = Vec::new();
        for (key, weight) in &self.adjustments {
            let value = features.value(*key);
            if value != 0.0 {
                adjustment += value * weight;
                active_features.push(*key);
            }
        }

        DimensionSignal {
            keyword,
            phrase,
            adjustment,
            positive_hits,
            negative_hits,
            phrase_hits,
            active_features,
        }
    }
}

/// Compiled per-dimension rules. Built once from [`ScoringConfig`].
pub struct DimensionScorer {
    rules: DimensionMap<CompiledRule>,
    normalization: ScoreNormalization,
    questionnaire_weight: f64,
}

impl DimensionScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        let rules = config.dimensions.map(|_, rule| CompiledRule {
            positive: TermSet::new(&rule.positive_terms),
            negative: TermSet::new(&rule.negative_terms),
            keyword_weight: rule.keyword_weight,
            phrases: rule
                .phrases
                .iter()
                .map(|p| (p.phrase.to_lowercase(), p.bonus))
                .collect(),
            adjustments: rule
                .adjustments
                .iter()
                .map(|a| (a.feature, a.weight))
                .collect(),
        });
        DimensionScorer {
            rules,
            normalization: config.normalization,
            questionnaire_weight: config.questionnaire_weight,
        }
    }

    /// True when chat history and questionnaire carry equal weight, in which
    /// case the caller joins the two texts before extraction instead of
    /// blending separate scores.
    pub fn concatenates_sources(&self) -> bool {
        self.questionnaire_weight == 0.5
    }

    /// Score one text on every dimension.
    pub fn signals(
        &self,
        tokens: &[String],
        phrase_text: &str,
        features: &FeatureBag,
    ) -> DimensionMap<DimensionSignal> {
        self.rules
            .map(|_, rule| rule.signal(tokens, phrase_text, features))
    }

    /// Combine questionnaire and chat raw scores.
    ///
    /// With weight `w` the result is `(w*q + (1-w)*c) / max(w, 1-w)`, so the
    /// heavier source always counts at full strength and `w = 0.5` adds the
    /// two sources together.
    pub fn blend(
        &self,
        questionnaire: &DimensionMap<f64>,
        chat: Option<&DimensionMap<f64>>,
    ) -> DimensionMap<f64> {
        let chat = match chat {
            Some(chat) => chat,
            None => return *questionnaire,
        };
        let w = self.questionnaire_weight;
        let scale = w.max(1.0 - w);
        DimensionMap::from_fn(|dim| (w * questionnaire[dim] + (1.0 - w) * chat[dim]) / scale)
    }

    /// Bring raw scores onto the reference scale. Non-finite results become 0.
    pub fn normalize(&self, raw: &DimensionMap<f64>, token_count: usize) -> DimensionMap<f64> {
        raw.map(|_, &value| {
            let score = match self.normalization {
                ScoreNormalization::None => value,
                ScoreNormalization::TokenCount if token_count == 0 => 0.0,
                ScoreNormalization::TokenCount => value / token_count as f64,
                ScoreNormalization::Saturating => value.tanh(),
            };
            if score.is_finite() {
                score
            } else {
                0.0
            }
        })
    }

    /// Blend and normalize in one step, logging the intermediate values.
    pub fn score(
        &self,
        questionnaire: &DimensionMap<f64>,
        chat: Option<&DimensionMap<f64>>,
        token_count: usize,
    ) -> DimensionMap<f64> {
        let raw = self.blend(questionnaire, chat);
        let scores = self.normalize(&raw, token_count);
        for dim in Dimension::ALL {
            debug!(dimension = %dim, raw = raw[dim], score = scores[dim], "dimension score");
        }
        scores
    }
}
