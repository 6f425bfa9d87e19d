//! Nearest-type fallback matching.

use std::sync::Arc;

use crate::dictionary::ReferenceDictionary;
use crate::dimension::DimensionMap;
use crate::types::PersonalityType;

/// Sum of absolute per-dimension differences.
pub fn l1_distance(scores: &DimensionMap<f64>, expected: &DimensionMap<f64>) -> f64 {
    scores
        .iter()
        .map(|(dim, score)| (score - expected[dim]).abs())
        .sum()
}

/// Picks the dictionary entry closest to a score vector.
#[derive(Debug, Clone)]
pub struct FallbackMatcher {
    dictionary: Arc<ReferenceDictionary>,
}

impl FallbackMatcher {
    pub fn new(dictionary: Arc<ReferenceDictionary>) -> Self {
        FallbackMatcher { dictionary }
    }

    pub fn distance(&self, ty: PersonalityType, scores: &DimensionMap<f64>) -> f64 {
        l1_distance(scores, &self.dictionary.expected_scores(ty))
    }

    /// The type with the smallest L1 distance. Ties keep the earlier type in
    /// canonical order; a NaN distance never wins.
    pub fn nearest(&self, scores: &DimensionMap<f64>) -> PersonalityType {
        let mut best = (PersonalityType::ALL[0], f64::INFINITY);
        for ty in PersonalityType::ALL {
            let distance = self.distance(ty, scores);
            if distance < best.1 {
                best = (ty, distance);
            }
        }
        best.0
    }

    /// Every type with its distance, closest first. Stable on ties.
    pub fn ranked(&self, scores: &DimensionMap<f64>) -> Vec<(PersonalityType, f64)> {
        let mut ranked: Vec<(PersonalityType, f64)> = PersonalityType::ALL
            .into_iter()
            .map(|ty| (ty, self.distance(ty, scores)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}
