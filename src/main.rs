//! persona-mbti command line interface.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use persona_mbti::{
    evaluate, AnalysisResult, Analyzer, AnalyzerConfig, Dataset, PersonaProfile,
    PersonalityType, ReferenceDictionary,
};

const DEFAULT_CONFIG: &str = "analyzer.toml";

#[derive(Parser, Debug)]
#[command(name = "persona-mbti")]
#[command(about = "Heuristic MBTI personality classifier", version)]
struct Cli {
    /// Analyzer configuration (TOML). Defaults to ./analyzer.toml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Replacement reference dictionary (JSON keyed by type code).
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a questionnaire answer
    Analyze {
        /// Questionnaire text
        text: String,
        /// Chat history to analyze alongside the questionnaire
        #[arg(long)]
        chat: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Measure accuracy on a labeled `type,posts` CSV
    Evaluate {
        csv: PathBuf,
        /// Evaluate a random sample of at most N rows
        #[arg(long)]
        limit: Option<usize>,
        /// Seed for sampling
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List the reference types
    Types {
        /// Export the whole reference dictionary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the chat persona prompt for a type
    Persona {
        #[arg(value_name = "TYPE")]
        personality_type: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let dictionary = match &cli.dictionary {
        Some(path) => {
            info!(path = %path.display(), "loading reference dictionary");
            ReferenceDictionary::load_json(path)?
        }
        None => ReferenceDictionary::builtin(),
    };

    match cli.command {
        Command::Analyze { text, chat, json } => {
            let analyzer = Analyzer::new(config, Arc::new(dictionary))?;
            let result = analyzer.analyze(&text, chat.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&analyzer, &result);
            }
        }
        Command::Evaluate { csv, limit, seed } => {
            let analyzer = Analyzer::new(config, Arc::new(dictionary))?;
            info!(path = %csv.display(), "loading dataset");
            let mut dataset = Dataset::load(&csv)?;
            info!(rows = dataset.len(), skipped = dataset.skipped, "dataset loaded");
            if let Some(limit) = limit {
                dataset.sample(limit, seed);
            }
            let report = evaluate(&analyzer, &dataset);
            println!("{}", report);
        }
        Command::Types { json } => {
            if json {
                println!("{}", dictionary.to_json_pretty()?);
            } else {
                for (ty, entry) in dictionary.iter() {
                    println!("{}  {}", ty, entry.description);
                    println!("      {}", entry.communication_style);
                }
            }
        }
        Command::Persona { personality_type } => {
            let ty: PersonalityType = personality_type.parse()?;
            println!("{}", PersonaProfile::for_type(&dictionary, ty));
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig, Box<dyn Error>> {
    if let Some(path) = path {
        info!(path = %path.display(), "loading configuration");
        return Ok(AnalyzerConfig::load(path)?);
    }
    Ok(AnalyzerConfig::load(DEFAULT_CONFIG).unwrap_or_else(|e| {
        warn!("could not load {}: {}; using default configuration", DEFAULT_CONFIG, e);
        AnalyzerConfig::default()
    }))
}

fn print_result(analyzer: &Analyzer, result: &AnalysisResult) {
    println!("Type: {}", result.type_code);
    println!("Confidence: {:.2}%", result.confidence * 100.0);
    println!("Best match: {}", result.best_match);
    if let Some(ty) = result.type_code.known() {
        println!("  {}", analyzer.dictionary().get(ty).description);
    }
    if !result.type_code.is_unknown() {
        let nearest: Vec<String> = analyzer
            .resolver()
            .matcher()
            .ranked(&result.scores())
            .into_iter()
            .take(3)
            .map(|(ty, distance)| format!("{} ({:.2})", ty, distance))
            .collect();
        println!("Nearest types: {}", nearest.join(", "));
    }
    println!("\nBreakdown:");
    for (dim, breakdown) in result.breakdown.iter() {
        println!("  {}: {:+.3}", dim, breakdown.score);
        for indicator in &breakdown.indicators {
            println!("      {}", indicator);
        }
    }
}
