//! Properties that hold for every input text.

use persona_mbti::text::tokenize;
use persona_mbti::{Analyzer, AnalyzerConfig, Dimension, PersonalityType};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "I", "we", "me", "our", "team", "alone", "party", "quiet", "debate", "facts", "theory",
    "ideas", "future", "practical", "logic", "feelings", "empathy", "plan", "schedule",
    "spontaneous", "flexible", "explore", "routine", "love", "the", "and", "but", "time",
    "hands-on", "step-by-step", "new", "in", "advance", "deep", "conversation", "!", "?",
    "être", "日本",
];

fn vocabulary_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|words| words.join(" "))
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![vocabulary_text(), ".{0,200}"]
}

proptest! {
    #[test]
    fn breakdown_has_four_dimensions(text in any_text()) {
        let result = Analyzer::default().analyze(&text, None);
        let json = serde_json::to_value(&result).unwrap();
        let breakdown = json["breakdown"].as_object().unwrap();
        prop_assert_eq!(breakdown.len(), 4);
        for dim in Dimension::ALL {
            prop_assert!(breakdown.contains_key(dim.label()));
        }
    }

    #[test]
    fn best_match_is_a_known_type(text in any_text(), chat in proptest::option::of(any_text())) {
        let result = Analyzer::default().analyze(&text, chat.as_deref());
        prop_assert!(PersonalityType::ALL.contains(&result.best_match));
        let json = serde_json::to_value(&result).unwrap();
        prop_assert_ne!(json["bestMatch"].as_str().unwrap(), "UNKNOWN");
    }

    #[test]
    fn confidence_is_within_unit_interval(text in any_text(), chat in proptest::option::of(any_text())) {
        let result = Analyzer::default().analyze(&text, chat.as_deref());
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        for breakdown in result.breakdown.values() {
            prop_assert!(breakdown.score.is_finite());
            prop_assert!((-1.0..=1.0).contains(&breakdown.score));
        }
    }

    #[test]
    fn chat_history_is_prepended_text(text in vocabulary_text(), chat in vocabulary_text()) {
        prop_assume!(!tokenize(&text).is_empty() && !tokenize(&chat).is_empty());
        let analyzer = Analyzer::default();
        let joined = format!("{} {}", chat, text);
        prop_assert_eq!(analyzer.analyze(&text, Some(&chat)), analyzer.analyze(&joined, None));
    }

    #[test]
    fn analysis_is_idempotent(text in any_text(), chat in proptest::option::of(any_text())) {
        let analyzer = Analyzer::default();
        let first = analyzer.analyze(&text, chat.as_deref());
        let second = analyzer.analyze(&text, chat.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn positive_terms_never_lower_their_dimension(
        text in vocabulary_text(),
        dim_index in 0usize..4,
        term_index in any::<prop::sample::Index>(),
        repeats in 1usize..4,
    ) {
        let config = AnalyzerConfig::default();
        let dim = Dimension::ALL[dim_index];
        let terms = &config.scoring.dimensions[dim].positive_terms;
        let term = term_index.get(terms);

        let analyzer = Analyzer::default();
        let before = analyzer.analyze(&text, None).breakdown[dim].score;
        let mut extended = text.clone();
        for _ in 0..repeats {
            extended.push(' ');
            extended.push_str(term);
        }
        let after = analyzer.analyze(&extended, None).breakdown[dim].score;
        prop_assert!(after >= before, "{} {}: {} -> {}", dim, term, before, after);
    }
}
