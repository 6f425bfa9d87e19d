//! Accuracy evaluation against a labeled `type,posts` CSV dataset.
//!
//! The expected file is the public MBTI dataset layout: a header row, a
//! `type` column with the four-letter label and a `posts` column where
//! individual posts are separated by `|||`.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::analyzer::Analyzer;
use crate::dimension::{Dimension, DimensionMap};
use crate::error::{AnalyzerError, Result};
use crate::types::{PersonalityType, TypeCode};

#[derive(Debug, Deserialize, Clone)]
struct PostRecord {
    #[serde(rename = "type")]
    label: String,
    posts: String,
}

/// One labeled text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub label: PersonalityType,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub samples: Vec<LabeledSample>,
    /// Rows whose label is not one of the 16 codes.
    pub skipped: usize,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AnalyzerError::io(path, e))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut dataset = Dataset::default();
        for (row, result) in rdr.deserialize().enumerate() {
            let record: PostRecord = result?;
            match record.label.parse::<PersonalityType>() {
                Ok(label) => dataset.samples.push(LabeledSample {
                    label,
                    text: record.posts.replace("|||", " "),
                }),
                Err(_) => {
                    warn!(row = row + 1, label = %record.label, "skipping row with unknown type");
                    dataset.skipped += 1;
                }
            }
        }
        Ok(dataset)
    }

    /// Shuffle with a fixed seed and keep at most `limit` samples.
    pub fn sample(&mut self, limit: usize, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.samples.shuffle(&mut rng);
        self.samples.truncate(limit);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Aggregate accuracy of one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub total: usize,
    pub exact: usize,
    /// Rows whose predicted letter matched the label, per dimension.
    pub per_dimension: DimensionMap<usize>,
    /// Rows whose candidate confidence was under the threshold.
    pub low_confidence: usize,
    pub unknown: usize,
    /// Prediction counts indexed like [`PersonalityType::ALL`].
    pub predicted: [usize; 16],
    pub skipped: usize,
}

impl EvaluationReport {
    fn ratio(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    pub fn accuracy(&self) -> f64 {
        self.ratio(self.exact)
    }

    pub fn dimension_accuracy(&self, dim: Dimension) -> f64 {
        self.ratio(self.per_dimension[dim])
    }
}

/// Run the analyzer over every sample in parallel.
pub fn evaluate(analyzer: &Analyzer, dataset: &Dataset) -> EvaluationReport {
    let threshold = analyzer.config().resolution.confidence_threshold;
    info!(samples = dataset.len(), "evaluating");

    let predictions: Vec<(PersonalityType, TypeCode, f64)> = dataset
        .samples
        .par_iter()
        .map(|sample| {
            let result = analyzer.analyze(&sample.text, None);
            (sample.label, result.type_code, result.confidence)
        })
        .collect();

    let mut report = EvaluationReport {
        total: predictions.len(),
        exact: 0,
        per_dimension: DimensionMap::default(),
        low_confidence: 0,
        unknown: 0,
        predicted: [0; 16],
        skipped: dataset.skipped,
    };

    for (label, code, confidence) in predictions {
        let predicted = match code {
            TypeCode::Known(ty) => ty,
            TypeCode::Unknown => {
                report.unknown += 1;
                continue;
            }
        };
        report.predicted[predicted.index()] += 1;
        if predicted == label {
            report.exact += 1;
        }
        for dim in Dimension::ALL {
            if predicted.letter(dim) == label.letter(dim) {
                report.per_dimension[dim] += 1;
            }
        }
        if confidence < threshold {
            report.low_confidence += 1;
        }
    }
    report
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples: {} (skipped {})", self.total, self.skipped)?;
        writeln!(f, "  Accuracy: {:.2}%", self.accuracy() * 100.0)?;
        writeln!(f, "  vs Random: {:.1}x", self.accuracy() / 0.0625)?;
        for dim in Dimension::ALL {
            writeln!(f, "  {}: {:.2}%", dim, self.dimension_accuracy(dim) * 100.0)?;
        }
        writeln!(
            f,
            "  Below threshold: {} | Unknown: {}",
            self.low_confidence, self.unknown
        )?;
        writeln!(f, "\nPredicted distribution:")?;
        for ty in PersonalityType::ALL {
            let count = self.predicted[ty.index()];
            if count > 0 {
                writeln!(f, "  {}: {}", ty, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "type,posts\n\
        ENTP,I love debating and questioning assumptions|||brainstorming innovative ideas with the team\n\
        ISTJ,I prefer routines and structure|||proven methods over speculative theories\n\
        XXXX,not a real label\n\
        infj,lower case labels still parse\n";

    #[test]
    fn test_from_reader_skips_unknown_labels() {
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.skipped, 1);
        assert_eq!(dataset.samples[0].label, PersonalityType::Entp);
        assert!(!dataset.samples[0].text.contains("|||"));
        assert_eq!(dataset.samples[2].label, PersonalityType::Infj);
    }

    #[test]
    fn test_sample_is_seeded() {
        let mut a = Dataset::from_reader(CSV.as_bytes()).unwrap();
        let mut b = a.clone();
        a.sample(2, 7);
        b.sample(2, 7);
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_evaluate_counts() {
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
        let report = evaluate(&Analyzer::default(), &dataset);
        assert_eq!(report.total, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.predicted.iter().sum::<usize>() + report.unknown, 3);
        assert!(report.exact <= report.total);
        for dim in Dimension::ALL {
            assert!(report.per_dimension[dim] >= report.exact);
        }
        assert!(report.to_string().contains("Accuracy"));
    }

    #[test]
    fn test_empty_report_has_zero_accuracy() {
        let report = evaluate(&Analyzer::default(), &Dataset::default());
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy(), 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, CSV.as_bytes()).unwrap();
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Dataset::load("/nonexistent/mbti.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mbti.csv"));
    }
}
