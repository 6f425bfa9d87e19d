//! The four personality axes and a fixed-shape map over them.
//!
//! - E/I: Extraversion vs Introversion
//! - S/N: Sensing vs Intuition
//! - T/F: Thinking vs Feeling
//! - J/P: Judging vs Perceiving

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One of the four personality axes. Closed set, fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "E/I")]
    Ei,
    #[serde(rename = "S/N")]
    Sn,
    #[serde(rename = "T/F")]
    Tf,
    #[serde(rename = "J/P")]
    Jp,
}

impl Dimension {
    /// All axes in type-code order (E|I, S|N, T|F, J|P).
    pub const ALL: [Dimension; 4] = [Dimension::Ei, Dimension::Sn, Dimension::Tf, Dimension::Jp];

    pub fn index(self) -> usize {
        match self {
            Dimension::Ei => 0,
            Dimension::Sn => 1,
            Dimension::Tf => 2,
            Dimension::Jp => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Ei => "E/I",
            Dimension::Sn => "S/N",
            Dimension::Tf => "T/F",
            Dimension::Jp => "J/P",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Dimension::ALL.into_iter().find(|dim| dim.label() == label)
    }

    /// The (positive, non-positive) letter pair for this axis.
    pub fn letters(self) -> (char, char) {
        match self {
            Dimension::Ei => ('E', 'I'),
            Dimension::Sn => ('S', 'N'),
            Dimension::Tf => ('T', 'F'),
            Dimension::Jp => ('J', 'P'),
        }
    }

    /// Letter chosen by the sign of a score: strictly positive maps to the
    /// first letter, zero and negative to the second.
    pub fn letter_for(self, score: f64) -> char {
        let (first, second) = self.letters();
        if score > 0.0 {
            first
        } else {
            second
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for every [`Dimension`], always exactly four entries.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(
    try_from = "HashMap<String, T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct DimensionMap<T>([T; 4]);

impl<T> DimensionMap<T> {
    /// Values in axis order: E/I, S/N, T/F, J/P.
    pub fn from_array(values: [T; 4]) -> Self {
        DimensionMap(values)
    }

    pub fn from_fn(f: impl FnMut(Dimension) -> T) -> Self {
        DimensionMap(Dimension::ALL.map(f))
    }

    pub fn get(&self, dim: Dimension) -> &T {
        &self.0[dim.index()]
    }

    pub fn get_mut(&mut self, dim: Dimension) -> &mut T {
        &mut self.0[dim.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> DimensionMap<U> {
        DimensionMap::from_fn(|dim| f(dim, self.get(dim)))
    }
}

impl<T: Default> Default for DimensionMap<T> {
    fn default() -> Self {
        DimensionMap::from_fn(|_| T::default())
    }
}

impl<T> Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dim: Dimension) -> &T {
        self.get(dim)
    }
}

impl<T> IndexMut<Dimension> for DimensionMap<T> {
    fn index_mut(&mut self, dim: Dimension) -> &mut T {
        self.get_mut(dim)
    }
}

impl<T> TryFrom<HashMap<String, T>> for DimensionMap<T> {
    type Error = String;

    fn try_from(mut entries: HashMap<String, T>) -> Result<Self, Self::Error> {
        if let Some(unknown) = entries.keys().find(|k| Dimension::from_label(k).is_none()) {
            return Err(format!("unknown dimension {:?}", unknown));
        }
        let mut take = |dim: Dimension| entries.remove(dim.label());
        match (
            take(Dimension::Ei),
            take(Dimension::Sn),
            take(Dimension::Tf),
            take(Dimension::Jp),
        ) {
            (Some(ei), Some(sn), Some(tf), Some(jp)) => Ok(DimensionMap([ei, sn, tf, jp])),
            (ei, sn, tf, jp) => {
                let present = [ei.is_some(), sn.is_some(), tf.is_some(), jp.is_some()];
                let missing: Vec<&str> = Dimension::ALL
                    .iter()
                    .filter(|dim| !present[dim.index()])
                    .map(|dim| dim.label())
                    .collect();
                Err(format!("missing dimensions: {}", missing.join(", ")))
            }
        }
    }
}

impl<T: Serialize> Serialize for DimensionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(dim.label(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_for_sign() {
        assert_eq!(Dimension::Ei.letter_for(0.4), 'E');
        assert_eq!(Dimension::Ei.letter_for(-0.4), 'I');
        assert_eq!(Dimension::Sn.letter_for(0.0), 'N');
        assert_eq!(Dimension::Jp.letter_for(1e-9), 'J');
    }

    #[test]
    fn test_index_matches_order() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn test_map_serializes_with_labels_in_order() {
        let map = DimensionMap::from_fn(|dim| dim.index());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"E/I":0,"S/N":1,"T/F":2,"J/P":3}"#);
    }

    #[test]
    fn test_map_deserialize_requires_all_dimensions() {
        let full: DimensionMap<u8> =
            serde_json::from_str(r#"{"J/P":4,"E/I":1,"T/F":3,"S/N":2}"#).unwrap();
        assert_eq!(full[Dimension::Ei], 1);
        assert_eq!(full[Dimension::Jp], 4);

        let partial = serde_json::from_str::<DimensionMap<u8>>(r#"{"E/I":1,"S/N":2}"#);
        let err = partial.unwrap_err().to_string();
        assert!(err.contains("T/F"));
        assert!(err.contains("J/P"));

        let extra =
            serde_json::from_str::<DimensionMap<u8>>(r#"{"E/I":1,"S/N":2,"T/F":3,"J/P":4,"X/Y":5}"#);
        assert!(extra.unwrap_err().to_string().contains("X/Y"));
    }
}
