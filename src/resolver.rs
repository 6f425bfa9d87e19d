//! Type resolution: letters by sign, confidence against the candidate's
//! reference entry, and fallback to the nearest type when the candidate is
//! rejected.

use std::sync::Arc;

use tracing::debug;

use crate::config::ResolutionConfig;
use crate::dictionary::ReferenceDictionary;
use crate::dimension::{Dimension, DimensionMap};
use crate::matcher::{l1_distance, FallbackMatcher};
use crate::types::PersonalityType;

/// The type spelled by the score signs, before any fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub letters: [char; 4],
    /// `None` when the letters do not spell a known type.
    pub code: Option<PersonalityType>,
    pub confidence: f64,
}

/// Outcome of resolving a score vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub personality_type: PersonalityType,
    pub confidence: f64,
    pub best_match: PersonalityType,
    /// True when the candidate was rejected and the nearest type was used.
    pub fell_back: bool,
}

#[derive(Debug, Clone)]
pub struct TypeResolver {
    dictionary: Arc<ReferenceDictionary>,
    matcher: FallbackMatcher,
    confidence_threshold: f64,
    max_deviation: f64,
}

impl TypeResolver {
    pub fn new(dictionary: Arc<ReferenceDictionary>, config: &ResolutionConfig) -> Self {
        TypeResolver {
            matcher: FallbackMatcher::new(Arc::clone(&dictionary)),
            dictionary,
            confidence_threshold: config.confidence_threshold,
            max_deviation: config.max_deviation,
        }
    }

    pub fn matcher(&self) -> &FallbackMatcher {
        &self.matcher
    }

    /// `1 - total deviation / max deviation`, clamped to [0, 1].
    pub fn confidence(&self, ty: PersonalityType, scores: &DimensionMap<f64>) -> f64 {
        let deviation = l1_distance(scores, &self.dictionary.expected_scores(ty));
        let confidence = 1.0 - deviation / self.max_deviation;
        if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn candidate(&self, scores: &DimensionMap<f64>) -> Candidate {
        let letters = Dimension::ALL.map(|dim| dim.letter_for(scores[dim]));
        let code = PersonalityType::from_letters(letters);
        let confidence = code.map_or(0.0, |ty| self.confidence(ty, scores));
        Candidate {
            letters,
            code,
            confidence,
        }
    }

    /// Accept the candidate if it is a known type at or above the threshold,
    /// otherwise take the nearest type. The reported confidence is always the
    /// candidate's.
    pub fn resolve(&self, scores: &DimensionMap<f64>) -> Resolution {
        let candidate = self.candidate(scores);
        let letters: String = candidate.letters.iter().collect();
        debug!(
            candidate = %letters,
            confidence = candidate.confidence,
            "resolved candidate"
        );

        match candidate.code {
            Some(ty) if candidate.confidence >= self.confidence_threshold => Resolution {
                personality_type: ty,
                confidence: candidate.confidence,
                best_match: ty,
                fell_back: false,
            },
            _ => {
                let nearest = self.matcher.nearest(scores);
                debug!(
                    nearest = %nearest,
                    threshold = self.confidence_threshold,
                    "candidate rejected, using nearest type"
                );
                Resolution {
                    personality_type: nearest,
                    confidence: candidate.confidence,
                    best_match: nearest,
                    fell_back: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TypeResolver {
        TypeResolver::new(
            Arc::new(ReferenceDictionary::builtin()),
            &ResolutionConfig::default(),
        )
    }

    #[test]
    fn test_candidate_letters_follow_signs() {
        let scores = DimensionMap::from_array([0.5, -0.5, 0.2, 0.0]);
        let candidate = resolver().candidate(&scores);
        assert_eq!(candidate.letters, ['E', 'N', 'T', 'P']);
        assert_eq!(candidate.code, Some(PersonalityType::Entp));
    }

    #[test]
    fn test_confidence_formula() {
        let resolver = resolver();
        // ENTP expects (1.0, -1.0, 0.9, -1.0); deviation 0.5+0.5+0.7+1.0 = 2.7
        let scores = DimensionMap::from_array([0.5, -0.5, 0.2, 0.0]);
        let confidence = resolver.confidence(PersonalityType::Entp, &scores);
        assert!((confidence - (1.0 - 2.7 / 4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let resolver = resolver();
        let far = DimensionMap::from_array([-5.0, 5.0, -5.0, 5.0]);
        assert_eq!(resolver.confidence(PersonalityType::Entp, &far), 0.0);
        let exact = ReferenceDictionary::builtin().expected_scores(PersonalityType::Infj);
        assert_eq!(resolver.confidence(PersonalityType::Infj, &exact), 1.0);
    }

    #[test]
    fn test_confident_candidate_is_kept() {
        let scores = DimensionMap::from_array([0.95, -0.95, 0.9, -0.95]);
        let resolution = resolver().resolve(&scores);
        assert_eq!(resolution.personality_type, PersonalityType::Entp);
        assert_eq!(resolution.best_match, PersonalityType::Entp);
        assert!(!resolution.fell_back);
        assert!(resolution.confidence >= 0.65);
    }

    #[test]
    fn test_low_confidence_falls_back_to_nearest() {
        let scores = DimensionMap::default();
        let resolution = resolver().resolve(&scores);
        assert!(resolution.fell_back);
        assert_eq!(resolution.personality_type, PersonalityType::Isfp);
        assert_eq!(resolution.best_match, resolution.personality_type);
        // candidate INFP: deviation 0.7+0.9+0.85+0.7 = 3.15
        assert!((resolution.confidence - (1.0 - 3.15 / 4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_zero_always_accepts_candidate() {
        let resolver = TypeResolver::new(
            Arc::new(ReferenceDictionary::builtin()),
            &ResolutionConfig {
                confidence_threshold: 0.0,
                ..ResolutionConfig::default()
            },
        );
        let resolution = resolver.resolve(&DimensionMap::default());
        assert_eq!(resolution.personality_type, PersonalityType::Infp);
        assert_eq!(resolution.best_match, PersonalityType::Infp);
    }
}
