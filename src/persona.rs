//! Chat persona built from a reference entry.
//!
//! Once a user's type is resolved, the chat side talks to them through a
//! persona of that type. The prompt lists the type's description, its
//! communication style, and for each dimension the indicators of its letter,
//! strongest dimensions first.

use std::fmt;

use serde::Serialize;

use crate::dictionary::ReferenceDictionary;
use crate::dimension::Dimension;
use crate::types::PersonalityType;

/// Indicators for one dimension of a persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaTrait {
    pub dimension: Dimension,
    pub letter: char,
    pub weight: f64,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaProfile {
    pub personality_type: PersonalityType,
    pub description: String,
    pub communication_style: String,
    /// Ordered by descending criterion weight, axis order on ties.
    pub traits: Vec<PersonaTrait>,
}

impl PersonaProfile {
    pub fn for_type(dictionary: &ReferenceDictionary, ty: PersonalityType) -> Self {
        let entry = dictionary.get(ty);
        let mut traits: Vec<PersonaTrait> = entry
            .analysis_criteria
            .iter()
            .map(|(dim, criteria)| PersonaTrait {
                dimension: dim,
                letter: ty.letter(dim),
                weight: criteria.weight,
                indicators: criteria.indicators.clone(),
            })
            .collect();
        traits.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        PersonaProfile {
            personality_type: ty,
            description: entry.description.clone(),
            communication_style: entry.communication_style.clone(),
            traits,
        }
    }

    /// System prompt for a chat model playing this persona.
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are a conversational partner with the {} personality type.\n\
             Personality: {}\n\
             Communication style: {}\n",
            self.personality_type, self.description, self.communication_style
        );
        prompt.push_str("\nLet these traits shape your replies:\n");
        for t in &self.traits {
            prompt.push_str(&format!(
                "- {} ({}): {}\n",
                letter_name(t.dimension, self.personality_type),
                t.dimension,
                t.indicators.join(", ")
            ));
        }
        prompt.push_str("\nStay in character and keep replies natural and concise.");
        prompt
    }
}

impl fmt::Display for PersonaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.system_prompt())
    }
}

/// Name of the pole `ty` takes on `dim`.
fn letter_name(dim: Dimension, ty: PersonalityType) -> &'static str {
    let first = ty.letter(dim) == dim.letters().0;
    match (dim, first) {
        (Dimension::Ei, true) => "Extraversion",
        (Dimension::Ei, false) => "Introversion",
        (Dimension::Sn, true) => "Sensing",
        (Dimension::Sn, false) => "Intuition",
        (Dimension::Tf, true) => "Thinking",
        (Dimension::Tf, false) => "Feeling",
        (Dimension::Jp, true) => "Judging",
        (Dimension::Jp, false) => "Perceiving",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traits_follow_type_letters() {
        let dict = ReferenceDictionary::builtin();
        for ty in PersonalityType::ALL {
            let profile = PersonaProfile::for_type(&dict, ty);
            assert_eq!(profile.traits.len(), 4);
            for t in &profile.traits {
                assert_eq!(t.letter, ty.letter(t.dimension));
            }
        }
    }

    #[test]
    fn test_traits_sorted_by_weight() {
        let dict = ReferenceDictionary::builtin();
        let profile = PersonaProfile::for_type(&dict, PersonalityType::Istj);
        assert!(profile.traits.windows(2).all(|w| w[0].weight >= w[1].weight));
        // ISTJ weighs E/I at 0.95, above the other three
        assert_eq!(profile.traits[0].dimension, Dimension::Ei);
    }

    #[test]
    fn test_system_prompt_mentions_entry() {
        let dict = ReferenceDictionary::builtin();
        let profile = PersonaProfile::for_type(&dict, PersonalityType::Entp);
        let prompt = profile.system_prompt();
        assert!(prompt.contains("ENTP"));
        assert!(prompt.contains("Innovative and curious debater"));
        assert!(prompt.contains("Logical and abstract responses"));
        assert!(prompt.contains("Extraversion (E/I)"));
        assert!(prompt.contains("Perceiving (J/P)"));
        assert_eq!(profile.to_string(), prompt);
    }

    #[test]
    fn test_system_prompt_names_each_pole() {
        let dict = ReferenceDictionary::builtin();
        let prompt = PersonaProfile::for_type(&dict, PersonalityType::Isfj).system_prompt();
        for name in ["Introversion (E/I)", "Sensing (S/N)", "Feeling (T/F)", "Judging (J/P)"] {
            assert!(prompt.contains(name), "missing {}", name);
        }
        for name in ["Extraversion", "Intuition", "Thinking", "Perceiving"] {
            assert!(!prompt.contains(name), "unexpected {}", name);
        }
    }
}
