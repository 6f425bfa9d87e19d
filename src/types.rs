//! Personality type codes.
//!
//! [`PersonalityType`] is the closed set of 16 four-letter codes; [`TypeCode`]
//! adds the `UNKNOWN` sentinel used when no text was available to classify.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::dimension::Dimension;
use crate::error::AnalyzerError;

/// One of the 16 valid four-letter personality codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl PersonalityType {
    /// Canonical enumeration order. Fallback matching iterates in this order
    /// and keeps the first type on ties.
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::Istj,
        PersonalityType::Isfj,
        PersonalityType::Infj,
        PersonalityType::Intj,
        PersonalityType::Istp,
        PersonalityType::Isfp,
        PersonalityType::Infp,
        PersonalityType::Intp,
        PersonalityType::Estp,
        PersonalityType::Esfp,
        PersonalityType::Enfp,
        PersonalityType::Entp,
        PersonalityType::Estj,
        PersonalityType::Esfj,
        PersonalityType::Enfj,
        PersonalityType::Entj,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityType::Istj => "ISTJ",
            PersonalityType::Isfj => "ISFJ",
            PersonalityType::Infj => "INFJ",
            PersonalityType::Intj => "INTJ",
            PersonalityType::Istp => "ISTP",
            PersonalityType::Isfp => "ISFP",
            PersonalityType::Infp => "INFP",
            PersonalityType::Intp => "INTP",
            PersonalityType::Estp => "ESTP",
            PersonalityType::Esfp => "ESFP",
            PersonalityType::Enfp => "ENFP",
            PersonalityType::Entp => "ENTP",
            PersonalityType::Estj => "ESTJ",
            PersonalityType::Esfj => "ESFJ",
            PersonalityType::Enfj => "ENFJ",
            PersonalityType::Entj => "ENTJ",
        }
    }

    /// Position in [`PersonalityType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the type spelled by four letters in axis order.
    ///
    /// Returns `None` for any combination that is not a valid code, so
    /// callers never have to trust a concatenation.
    pub fn from_letters(letters: [char; 4]) -> Option<Self> {
        PersonalityType::ALL.into_iter().find(|ty| {
            ty.as_str()
                .chars()
                .zip(letters)
                .all(|(expected, actual)| expected == actual.to_ascii_uppercase())
        })
    }

    /// The letter this type carries on the given axis.
    pub fn letter(self, dim: Dimension) -> char {
        // as_str is always four ASCII letters in axis order
        self.as_str().as_bytes()[dim.index()] as char
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letters = match (chars.next(), chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), Some(d), None) => [a, b, c, d],
            _ => return Err(AnalyzerError::UnknownType(s.to_string())),
        };
        PersonalityType::from_letters(letters).ok_or_else(|| AnalyzerError::UnknownType(s.to_string()))
    }
}

/// A resolved type code, or `UNKNOWN` when there was nothing to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Known(PersonalityType),
    Unknown,
}

impl TypeCode {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeCode::Known(ty) => ty.as_str(),
            TypeCode::Unknown => "UNKNOWN",
        }
    }

    pub fn known(self) -> Option<PersonalityType> {
        match self {
            TypeCode::Known(ty) => Some(ty),
            TypeCode::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, TypeCode::Unknown)
    }
}

impl From<PersonalityType> for TypeCode {
    fn from(ty: PersonalityType) -> Self {
        TypeCode::Known(ty)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_are_distinct_and_indexed() {
        for (i, ty) in PersonalityType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
            assert_eq!(ty.as_str().len(), 4);
        }
        let mut codes: Vec<&str> = PersonalityType::ALL.iter().map(|t| t.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_from_letters_round_trips_every_type() {
        for ty in PersonalityType::ALL {
            let letters = Dimension::ALL.map(|dim| ty.letter(dim));
            assert_eq!(PersonalityType::from_letters(letters), Some(ty));
        }
    }

    #[test]
    fn test_from_letters_rejects_off_axis_letters() {
        assert_eq!(PersonalityType::from_letters(['S', 'E', 'T', 'J']), None);
        assert_eq!(PersonalityType::from_letters(['X', 'N', 'T', 'P']), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("entp".parse::<PersonalityType>().unwrap(), PersonalityType::Entp);
        assert_eq!(" ISTJ ".parse::<PersonalityType>().unwrap(), PersonalityType::Istj);
        assert!("UNKNOWN".parse::<PersonalityType>().is_err());
        assert!("ENT".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn test_type_code_serializes_as_string() {
        let known = serde_json::to_string(&TypeCode::Known(PersonalityType::Infj)).unwrap();
        let unknown = serde_json::to_string(&TypeCode::Unknown).unwrap();
        assert_eq!(known, r#""INFJ""#);
        assert_eq!(unknown, r#""UNKNOWN""#);
    }

    #[test]
    fn test_personality_type_serde_uses_code() {
        let json = serde_json::to_string(&PersonalityType::Esfp).unwrap();
        assert_eq!(json, r#""ESFP""#);
        let back: PersonalityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PersonalityType::Esfp);
    }
}
