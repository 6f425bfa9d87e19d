//! persona-mbti: heuristic MBTI classification of free text
//!
//! Classifies a questionnaire answer, optionally with chat history, into one
//! of the 16 MBTI types without any trained model:
//!
//! - **Text Normalizer**: lower-case, strip punctuation, split into tokens
//! - **Feature Extractor**: term-list counters, pronoun balance and boosted phrases
//! - **Dimension Scorer**: keyword differential + phrase bonus + feature adjustment per axis
//! - **Type Resolver**: letters by sign, confidence against the reference entry
//! - **Fallback Matcher**: nearest type by L1 distance when confidence is low
//!
//! All scoring constants come from [`AnalyzerConfig`] (see `analyzer.toml`),
//! and the 16 reference entries from [`ReferenceDictionary`].
//!
//! ## Usage
//!
//! ```
//! use persona_mbti::analyze;
//!
//! let result = analyze(
//!     "I love debating, questioning assumptions, and challenging ideas. \
//!      I prefer brainstorming innovative ideas over traditional methods.",
//!     None,
//! );
//! assert_eq!(result.type_code.as_str(), "ENTP");
//! ```

pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod dimension;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod matcher;
pub mod persona;
pub mod resolver;
pub mod scoring;
pub mod text;
pub mod types;

pub use analyzer::{analyze, AnalysisResult, Analyzer, DimensionBreakdown};
pub use config::{AnalyzerConfig, ScoreNormalization};
pub use dictionary::{DimensionCriteria, ReferenceDictionary, ReferenceEntry};
pub use dimension::{Dimension, DimensionMap};
pub use error::{AnalyzerError, Result};
pub use evaluation::{evaluate, Dataset, EvaluationReport};
pub use persona::PersonaProfile;
pub use types::{PersonalityType, TypeCode};
