//! Feature extraction: fixed term-list counters and boosted phrases.
//!
//! A [`FeatureBag`] is built fresh for every analyzed text. The counters are
//! token-membership counts over the term lists in [`FeatureConfig`]; the
//! boosts carry a fixed bonus when their phrase appears anywhere in the text.

use serde::{Deserialize, Serialize};

use crate::config::FeatureConfig;
use crate::text::{count_phrase, TermSet};

/// Phrase-triggered boosts. Each one is worth its configured bonus or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    AbstractThinking,
    FuturePlanning,
    EmotionalAwareness,
    LogicalDecisionMaking,
    ExcitementSeeking,
    DeepConversation,
}

impl BoostKind {
    pub const ALL: [BoostKind; 6] = [
        BoostKind::AbstractThinking,
        BoostKind::FuturePlanning,
        BoostKind::EmotionalAwareness,
        BoostKind::LogicalDecisionMaking,
        BoostKind::ExcitementSeeking,
        BoostKind::DeepConversation,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Any value a [`FeatureBag`] can contribute to a dimension adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    SocialTerms,
    SolitaryTerms,
    AbstractTerms,
    ConcreteTerms,
    LogicalTerms,
    EmotionalTerms,
    StructuredTerms,
    FlexibleTerms,
    /// `(collective - self) / (collective + self + 1)`, in (-1, 1).
    PronounBalance,
    AbstractThinking,
    FuturePlanning,
    EmotionalAwareness,
    LogicalDecisionMaking,
    ExcitementSeeking,
    DeepConversation,
}

impl FeatureKey {
    pub fn label(self) -> &'static str {
        match self {
            FeatureKey::SocialTerms => "Social terms",
            FeatureKey::SolitaryTerms => "Solitary terms",
            FeatureKey::AbstractTerms => "Abstract terms",
            FeatureKey::ConcreteTerms => "Concrete terms",
            FeatureKey::LogicalTerms => "Logical terms",
            FeatureKey::EmotionalTerms => "Emotional terms",
            FeatureKey::StructuredTerms => "Structured terms",
            FeatureKey::FlexibleTerms => "Flexible terms",
            FeatureKey::PronounBalance => "We/I balance",
            FeatureKey::AbstractThinking => "Abstract thinking boost",
            FeatureKey::FuturePlanning => "Future planning boost",
            FeatureKey::EmotionalAwareness => "Emotional awareness boost",
            FeatureKey::LogicalDecisionMaking => "Logical decision boost",
            FeatureKey::ExcitementSeeking => "Excitement seeking boost",
            FeatureKey::DeepConversation => "Deep conversation boost",
        }
    }
}

/// Per-text feature record. Created per call, discarded after scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureBag {
    pub social_terms: u32,
    pub solitary_terms: u32,
    pub abstract_terms: u32,
    pub concrete_terms: u32,
    pub logical_terms: u32,
    pub emotional_terms: u32,
    pub structured_terms: u32,
    pub flexible_terms: u32,
    pub collective_pronouns: u32,
    pub self_pronouns: u32,
    /// Boost values indexed by [`BoostKind`]; zero when the phrase is absent.
    pub boosts: [f64; 6],
    pub token_count: usize,
}

impl FeatureBag {
    pub fn boost(&self, kind: BoostKind) -> f64 {
        self.boosts[kind.index()]
    }

    pub fn pronoun_balance(&self) -> f64 {
        let collective = f64::from(self.collective_pronouns);
        let own = f64::from(self.self_pronouns);
        (collective - own) / (collective + own + 1.0)
    }

    /// Numeric value of a feature as used by dimension adjustments.
    pub fn value(&self, key: FeatureKey) -> f64 {
        match key {
            FeatureKey::SocialTerms => f64::from(self.social_terms),
            FeatureKey::SolitaryTerms => f64::from(self.solitary_terms),
            FeatureKey::AbstractTerms => f64::from(self.abstract_terms),
            FeatureKey::ConcreteTerms => f64::from(self.concrete_terms),
            FeatureKey::LogicalTerms => f64::from(self.logical_terms),
            FeatureKey::EmotionalTerms => f64::from(self.emotional_terms),
            FeatureKey::StructuredTerms => f64::from(self.structured_terms),
            FeatureKey::FlexibleTerms => f64::from(self.flexible_terms),
            FeatureKey::PronounBalance => self.pronoun_balance(),
            FeatureKey::AbstractThinking => self.boost(BoostKind::AbstractThinking),
            FeatureKey::FuturePlanning => self.boost(BoostKind::FuturePlanning),
            FeatureKey::EmotionalAwareness => self.boost(BoostKind::EmotionalAwareness),
            FeatureKey::LogicalDecisionMaking => self.boost(BoostKind::LogicalDecisionMaking),
            FeatureKey::ExcitementSeeking => self.boost(BoostKind::ExcitementSeeking),
            FeatureKey::DeepConversation => self.boost(BoostKind::DeepConversation),
        }
    }

    /// Human-readable rendering of one feature for result breakdowns.
    pub fn describe(&self, key: FeatureKey) -> String {
        match key {
            FeatureKey::PronounBalance => format!(
                "We/I ratio: {}/{}",
                self.collective_pronouns, self.self_pronouns
            ),
            key => format!("{}: {}", key.label(), self.value(key)),
        }
    }

    /// Combine the bags of two texts: counters add, boosts keep the larger.
    pub fn merged(&self, other: &FeatureBag) -> FeatureBag {
        let mut boosts = self.boosts;
        for (slot, value) in boosts.iter_mut().zip(other.boosts) {
            *slot = slot.max(value);
        }
        FeatureBag {
            social_terms: self.social_terms + other.social_terms,
            solitary_terms: self.solitary_terms + other.solitary_terms,
            abstract_terms: self.abstract_terms + other.abstract_terms,
            concrete_terms: self.concrete_terms + other.concrete_terms,
            logical_terms: self.logical_terms + other.logical_terms,
            emotional_terms: self.emotional_terms + other.emotional_terms,
            structured_terms: self.structured_terms + other.structured_terms,
            flexible_terms: self.flexible_terms + other.flexible_terms,
            collective_pronouns: self.collective_pronouns + other.collective_pronouns,
            self_pronouns: self.self_pronouns + other.self_pronouns,
            boosts,
            token_count: self.token_count + other.token_count,
        }
    }
}

struct BoostRule {
    kind: BoostKind,
    phrase: String,
    bonus: f64,
}

/// Compiled term lists and boost phrases. Built once, shared by every call.
pub struct FeatureExtractor {
    social: TermSet,
    solitary: TermSet,
    abstract_: TermSet,
    concrete: TermSet,
    logical: TermSet,
    emotional: TermSet,
    structured: TermSet,
    flexible: TermSet,
    collective_pronouns: TermSet,
    self_pronouns: TermSet,
    boosts: Vec<BoostRule>,
}

impl FeatureExtractor {
    pub fn new(config: &FeatureConfig) -> Self {
        FeatureExtractor {
            social: TermSet::new(&config.social_terms),
            solitary: TermSet::new(&config.solitary_terms),
            abstract_: TermSet::new(&config.abstract_terms),
            concrete: TermSet::new(&config.concrete_terms),
            logical: TermSet::new(&config.logical_terms),
            emotional: TermSet::new(&config.emotional_terms),
            structured: TermSet::new(&config.structured_terms),
            flexible: TermSet::new(&config.flexible_terms),
            collective_pronouns: TermSet::new(&config.collective_pronouns),
            self_pronouns: TermSet::new(&config.self_pronouns),
            boosts: config
                .boosts
                .iter()
                .map(|b| BoostRule {
                    kind: b.kind,
                    phrase: b.phrase.to_lowercase(),
                    bonus: b.bonus,
                })
                .collect(),
        }
    }

    /// Build the feature bag for one text.
    ///
    /// `tokens` come from [`crate::text::tokenize`] and `phrase_text` from
    /// [`crate::text::phrase_text`] over the same raw input.
    pub fn extract(&self, tokens: &[String], phrase_text: &str) -> FeatureBag {
        let mut boosts = [0.0f64; 6];
        for rule in &self.boosts {
            if count_phrase(phrase_text, &rule.phrase) > 0 {
                let slot = &mut boosts[rule.kind.index()];
                *slot = slot.max(rule.bonus);
            }
        }

        FeatureBag {
            social_terms: self.social.count(tokens),
            solitary_terms: self.solitary.count(tokens),
            abstract_terms: self.abstract_.count(tokens),
            concrete_terms: self.concrete.count(tokens),
            logical_terms: self.logical.count(tokens),
            emotional_terms: self.emotional.count(tokens),
            structured_terms: self.structured.count(tokens),
            flexible_terms: self.flexible.count(tokens),
            collective_pronouns: self.collective_pronouns.count(tokens),
            self_pronouns: self.self_pronouns.count(tokens),
            boosts,
            token_count: tokens.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{phrase_text, tokenize};

    fn extract(text: &str) -> FeatureBag {
        let extractor = FeatureExtractor::new(&FeatureConfig::default());
        extractor.extract(&tokenize(text), &phrase_text(text))
    }

    #[test]
    fn test_counts_term_lists() {
        let bag = extract("Our team threw a party; I stayed alone to read.");
        assert_eq!(bag.social_terms, 2);
        assert_eq!(bag.solitary_terms, 2);
        assert_eq!(bag.collective_pronouns, 1);
        assert_eq!(bag.self_pronouns, 1);
        assert_eq!(bag.token_count, 10);
    }

    #[test]
    fn test_self_pronoun_is_exact_token() {
        let bag = extract("Sometimes time is important");
        assert_eq!(bag.self_pronouns, 0);
    }

    #[test]
    fn test_hyphenated_term_matches_normalized_token() {
        let bag = extract("I like a hands-on approach");
        assert_eq!(bag.concrete_terms, 1);
    }

    #[test]
    fn test_boosts_fire_on_phrases() {
        let bag = extract("Thinking outside the box matters. We had a deep conversation.");
        assert_eq!(bag.boost(BoostKind::AbstractThinking), 4.0);
        assert_eq!(bag.boost(BoostKind::DeepConversation), 3.0);
        assert_eq!(bag.boost(BoostKind::FuturePlanning), 0.0);
        assert_eq!(bag.value(FeatureKey::DeepConversation), 3.0);
    }

    #[test]
    fn test_value_reads_every_feature() {
        let bag = FeatureBag {
            social_terms: 1,
            solitary_terms: 2,
            abstract_terms: 3,
            concrete_terms: 4,
            logical_terms: 5,
            emotional_terms: 6,
            structured_terms: 7,
            flexible_terms: 8,
            boosts: [1.5, 2.5, 3.5, 4.5, 5.5, 6.5],
            ..FeatureBag::default()
        };
        let expected = [
            (FeatureKey::SocialTerms, 1.0),
            (FeatureKey::SolitaryTerms, 2.0),
            (FeatureKey::AbstractTerms, 3.0),
            (FeatureKey::ConcreteTerms, 4.0),
            (FeatureKey::LogicalTerms, 5.0),
            (FeatureKey::EmotionalTerms, 6.0),
            (FeatureKey::StructuredTerms, 7.0),
            (FeatureKey::FlexibleTerms, 8.0),
            (FeatureKey::PronounBalance, 0.0),
            (FeatureKey::AbstractThinking, 1.5),
            (FeatureKey::FuturePlanning, 2.5),
            (FeatureKey::EmotionalAwareness, 3.5),
            (FeatureKey::LogicalDecisionMaking, 4.5),
            (FeatureKey::ExcitementSeeking, 5.5),
            (FeatureKey::DeepConversation, 6.5),
        ];
        for (key, value) in expected {
            assert_eq!(bag.value(key), value, "{:?}", key);
        }
    }

    #[test]
    fn test_boost_is_a_flag_not_a_count() {
        let bag = extract("love excitement, love excitement, love excitement");
        assert_eq!(bag.boost(BoostKind::ExcitementSeeking), 4.0);
    }

    #[test]
    fn test_pronoun_balance_is_bounded() {
        let bag = extract("we we we we");
        assert!(bag.pronoun_balance() > 0.0 && bag.pronoun_balance() < 1.0);
        let bag = extract("i i i i");
        assert!(bag.pronoun_balance() < 0.0 && bag.pronoun_balance() > -1.0);
        assert_eq!(extract("").pronoun_balance(), 0.0);
    }

    #[test]
    fn test_merged_adds_counts_and_keeps_boosts() {
        let a = extract("team party");
        let b = extract("alone, deep conversation");
        let merged = a.merged(&b);
        assert_eq!(merged.social_terms, 2);
        assert_eq!(merged.solitary_terms, 1);
        assert_eq!(merged.boost(BoostKind::DeepConversation), 3.0);
        assert_eq!(merged.token_count, a.token_count + b.token_count);
    }

    #[test]
    fn test_describe_pronoun_ratio() {
        let bag = extract("we planned, I followed");
        assert_eq!(bag.describe(FeatureKey::PronounBalance), "We/I ratio: 1/1");
        assert_eq!(bag.describe(FeatureKey::SocialTerms), "Social terms: 0");
    }
}
