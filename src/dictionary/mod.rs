//! Reference dictionary of the 16 personality types.
//!
//! Each entry carries a description, a communication style and, per
//! dimension, the expected score, exemplar indicators and a weight. The table
//! is built once and shared read-only (typically behind an `Arc`) by the
//! resolver, the fallback matcher and the presentation layer.
//!
//! The JSON form is keyed by type code and uses the field names
//! `description`, `communicationStyle` and `analysisCriteria`:
//!
//! ```json
//! {
//!   "ISTJ": {
//!     "description": "...",
//!     "communicationStyle": "...",
//!     "analysisCriteria": {
//!       "E/I": { "expectedScore": -0.9, "indicators": ["..."], "weight": 0.95 },
//!       "S/N": { "expectedScore": 0.8, "indicators": ["..."], "weight": 0.85 },
//!       "T/F": { "expectedScore": 0.7, "indicators": ["..."], "weight": 0.85 },
//!       "J/P": { "expectedScore": 0.8, "indicators": ["..."], "weight": 0.85 }
//!     }
//!   }
//! }
//! ```

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::dimension::DimensionMap;
use crate::error::{AnalyzerError, Result};
use crate::types::PersonalityType;

/// Expected behaviour of a type on one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionCriteria {
    /// Target score in [-1, 1].
    pub expected_score: f64,
    /// Exemplar terms, most characteristic first.
    pub indicators: Vec<String>,
    /// Relative importance in (0, 1].
    pub weight: f64,
}

/// Immutable description of one personality type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub description: String,
    pub communication_style: String,
    pub analysis_criteria: DimensionMap<DimensionCriteria>,
}

impl ReferenceEntry {
    pub fn expected_scores(&self) -> DimensionMap<f64> {
        self.analysis_criteria.map(|_, c| c.expected_score)
    }
}

/// The full 16-entry table, indexed in canonical type order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDictionary {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceDictionary {
    /// The canonical built-in table.
    pub fn builtin() -> Self {
        let mut entries = builtin::entries();
        entries.sort_by_key(|(ty, _)| ty.index());
        ReferenceDictionary {
            entries: entries.into_iter().map(|(_, entry)| entry).collect(),
        }
    }

    /// Build a table from arbitrary entries. Every type must appear exactly
    /// once and every criterion must be in range.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PersonalityType, ReferenceEntry)>,
    ) -> Result<Self> {
        let mut slots: Vec<Option<ReferenceEntry>> = vec![None; PersonalityType::ALL.len()];
        for (ty, entry) in entries {
            validate_entry(ty, &entry)?;
            if slots[ty.index()].replace(entry).is_some() {
                return Err(AnalyzerError::InvalidDictionary(format!(
                    "{} is defined more than once",
                    ty
                )));
            }
        }

        let missing: Vec<&str> = PersonalityType::ALL
            .iter()
            .filter(|ty| slots[ty.index()].is_none())
            .map(|ty| ty.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(AnalyzerError::InvalidDictionary(format!(
                "missing types: {}",
                missing.join(", ")
            )));
        }

        Ok(ReferenceDictionary {
            entries: slots.into_iter().flatten().collect(),
        })
    }

    /// Parse a JSON table keyed by type code.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, ReferenceEntry> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (code, entry) in raw {
            let ty = code
                .parse::<PersonalityType>()
                .map_err(|_| AnalyzerError::InvalidDictionary(format!("unknown type code {:?}", code)))?;
            entries.push((ty, entry));
        }
        Self::from_entries(entries)
    }

    /// Load a JSON table from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, ty: PersonalityType) -> &ReferenceEntry {
        &self.entries[ty.index()]
    }

    pub fn expected_scores(&self, ty: PersonalityType) -> DimensionMap<f64> {
        self.get(ty).expected_scores()
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonalityType, &ReferenceEntry)> {
        PersonalityType::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for ReferenceDictionary {
    fn default() -> Self {
        ReferenceDictionary::builtin()
    }
}

impl Serialize for ReferenceDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ty, entry) in self.iter() {
            map.serialize_entry(ty.as_str(), entry)?;
        }
        map.end()
    }
}

fn validate_entry(ty: PersonalityType, entry: &ReferenceEntry) -> Result<()> {
    for (dim, criteria) in entry.analysis_criteria.iter() {
        if !(-1.0..=1.0).contains(&criteria.expected_score) {
            return Err(AnalyzerError::InvalidDictionary(format!(
                "{} {}: expected score {} is outside [-1, 1]",
                ty, dim, criteria.expected_score
            )));
        }
        if !(criteria.weight > 0.0 && criteria.weight <= 1.0) {
            return Err(AnalyzerError::InvalidDictionary(format!(
                "{} {}: weight {} is outside (0, 1]",
                ty, dim, criteria.weight
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn test_builtin_covers_all_types_in_order() {
        let dict = ReferenceDictionary::builtin();
        let order: Vec<PersonalityType> = dict.iter().map(|(ty, _)| ty).collect();
        assert_eq!(order, PersonalityType::ALL.to_vec());
    }

    #[test]
    fn test_builtin_criteria_are_valid() {
        let dict = ReferenceDictionary::builtin();
        for (ty, entry) in dict.iter() {
            validate_entry(ty, entry).unwrap();
            assert!(!entry.description.is_empty());
            assert!(!entry.communication_style.is_empty());
        }
    }

    #[test]
    fn test_expected_score_signs_match_type_letters() {
        let dict = ReferenceDictionary::builtin();
        for (ty, entry) in dict.iter() {
            for (dim, criteria) in entry.analysis_criteria.iter() {
                assert_eq!(
                    dim.letter_for(criteria.expected_score),
                    ty.letter(dim),
                    "{} {}",
                    ty,
                    dim
                );
            }
        }
    }

    #[test]
    fn test_known_entry_values() {
        let dict = ReferenceDictionary::builtin();
        let entp = dict.get(PersonalityType::Entp);
        assert_eq!(entp.description, "Innovative and curious debater");
        assert_eq!(entp.analysis_criteria[Dimension::Tf].expected_score, 0.9);
        assert_eq!(
            dict.expected_scores(PersonalityType::Istj),
            DimensionMap::from_array([-0.9, 0.8, 0.7, 0.8])
        );
    }

    #[test]
    fn test_json_round_trip() {
        let dict = ReferenceDictionary::builtin();
        let json = dict.to_json_pretty().unwrap();
        assert!(json.contains("\"communicationStyle\""));
        assert!(json.contains("\"expectedScore\""));
        let back = ReferenceDictionary::from_json_str(&json).unwrap();
        assert_eq!(back, dict);
    }

    #[test]
    fn test_json_missing_type_is_rejected() {
        let dict = ReferenceDictionary::builtin();
        let mut value: serde_json::Value = serde_json::to_value(&dict).unwrap();
        value.as_object_mut().unwrap().remove("INFJ");
        let err = ReferenceDictionary::from_json_str(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("INFJ"));
    }

    #[test]
    fn test_json_out_of_range_score_is_rejected() {
        let dict = ReferenceDictionary::builtin();
        let mut value: serde_json::Value = serde_json::to_value(&dict).unwrap();
        value["ENFP"]["analysisCriteria"]["S/N"]["expectedScore"] = serde_json::json!(-1.5);
        let err = ReferenceDictionary::from_json_str(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("ENFP"));
    }

    #[test]
    fn test_json_unknown_code_is_rejected() {
        let dict = ReferenceDictionary::builtin();
        let mut value: serde_json::Value = serde_json::to_value(&dict).unwrap();
        let istj = value["ISTJ"].clone();
        value.as_object_mut().unwrap().insert("XXXX".to_string(), istj);
        assert!(ReferenceDictionary::from_json_str(&value.to_string()).is_err());
    }

    #[test]
    fn test_load_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(&path, ReferenceDictionary::builtin().to_json_pretty().unwrap()).unwrap();
        let loaded = ReferenceDictionary::load_json(&path).unwrap();
        assert_eq!(loaded, ReferenceDictionary::builtin());
    }
}
