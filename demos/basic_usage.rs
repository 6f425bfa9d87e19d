//! Basic usage example of the persona-mbti library

use std::error::Error;
use std::sync::Arc;

use persona_mbti::{Analyzer, AnalyzerConfig, PersonaProfile, ReferenceDictionary};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Basic persona-mbti Usage ===\n");

    // 1. Load configuration
    println!("Loading configuration...");
    let config = AnalyzerConfig::load("analyzer.toml").unwrap_or_else(|e| {
        eprintln!("Warning: Could not load analyzer.toml: {}", e);
        eprintln!("Using default configuration\n");
        AnalyzerConfig::default()
    });
    println!("✓ Confidence threshold: {}\n", config.resolution.confidence_threshold);

    // 2. Build the analyzer around the shared reference dictionary
    let dictionary = Arc::new(ReferenceDictionary::builtin());
    let analyzer = Analyzer::new(config, Arc::clone(&dictionary))?;

    // 3. Classify a few answers
    let texts = vec![
        "I love spending time alone reading books and thinking deeply about life",
        "I enjoy being around people and organizing social events",
        "I prefer planning everything in advance and staying organized",
        "I like to keep my options open and be spontaneous",
    ];

    for text in texts {
        let result = analyzer.analyze(text, None);
        println!("Text: \"{}\"", text);
        println!(
            "Prediction: {} (confidence {:.2}, best match {})\n",
            result.type_code, result.confidence, result.best_match
        );
    }

    // 4. Questionnaire plus chat history
    let result = analyzer.analyze(
        "I rely on proven methods rather than speculative theories.",
        Some("I prefer routines and structure in my life."),
    );
    println!("With chat history: {}", serde_json::to_string_pretty(&result)?);

    // 5. Persona for the best match
    println!("\nPersona prompt:\n{}", PersonaProfile::for_type(&dictionary, result.best_match));

    Ok(())
}
