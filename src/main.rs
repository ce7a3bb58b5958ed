use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tracing::info;

use textmood::config::{Config, ScorerBackend};
use textmood::mood::classifier::MoodClassifier;
use textmood::mood::models::{Failure, Outcome};
use textmood::safety::wordlist::WordlistFilter;
use textmood::sentiment::lexicon::LexiconScorer;
use textmood::sentiment::traits::SentimentScorer;

/// textmood: type a sentence, get a mood.
///
/// Checks the sentence for blocked words, scores its polarity from a word
/// lexicon, and answers with a happy, sad or neutral emoji.
#[derive(Parser)]
#[command(name = "textmood", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the mood of a sentence
    Check {
        /// The sentence to analyze (quote it, or pass the words separately)
        #[arg(required = true)]
        sentence: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also show the polarity and per-word scores
        #[arg(long)]
        verbose: bool,
    },

    /// Explain how the mood is worked out ("teacher mode")
    Explain {
        /// Print only the Graphviz DOT diagram
        #[arg(long)]
        dot: bool,
    },

    /// Show the word list, lexicon and scorer in use
    Status,

    /// Run the browser UI
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: TEXTMOOD_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: TEXTMOOD_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

/// The pieces a command needs, built once from the config.
struct Components {
    filter: Arc<WordlistFilter>,
    /// Present when the scorer is the local lexicon
    lexicon: Option<Arc<LexiconScorer>>,
    classifier: Arc<MoodClassifier>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `check --json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textmood=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            sentence,
            json,
            verbose,
        } => {
            let config = Config::load()?;
            let components = build_components(&config)?;
            let sentence = sentence.join(" ");

            let outcome = components.classifier.evaluate(&sentence).await;
            let result = outcome.clone().into_result();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            textmood::output::terminal::display_result(&sentence, &result);

            if verbose {
                let assessments = match (&outcome, &components.lexicon) {
                    (Outcome::Scored { .. }, Some(lexicon)) => lexicon.assess(&sentence),
                    _ => Vec::new(),
                };
                let censored = matches!(outcome, Outcome::Failed(Failure::UnsafeContent))
                    .then(|| components.filter.censor(&sentence, '*'));
                textmood::output::terminal::display_details(
                    &outcome,
                    &assessments,
                    censored.as_deref(),
                );
            }
        }

        Commands::Explain { dot } => {
            let explanation = textmood::explain::explanation();
            if dot {
                print!("{}", explanation.diagram_dot);
            } else {
                textmood::output::terminal::display_explanation(&explanation);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let components = build_components(&config)?;
            textmood::status::show(
                &config,
                &components.classifier,
                components.lexicon.as_ref().map(|l| l.len()),
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let components = build_components(&config)?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            println!(
                "{}",
                format!("Text-Mood Detector running at http://{bind}:{port}").bold()
            );

            textmood::web::run_server(
                components.classifier,
                components.lexicon.as_ref().map(|l| l.len()),
                port,
                &bind,
            )
            .await?;
        }
    }

    Ok(())
}

/// Build the filter, scorer and classifier for the configured backend.
///
/// The lexicon scorer is kept as a concrete type alongside the trait object
/// so `check --verbose` can show its per-word breakdown.
fn build_components(config: &Config) -> Result<Components> {
    let filter = Arc::new(config.build_filter()?);

    let (scorer, lexicon): (Arc<dyn SentimentScorer>, Option<Arc<LexiconScorer>>) =
        match config.scorer_backend {
            ScorerBackend::Lexicon => {
                let lexicon = Arc::new(config.build_lexicon()?);
                info!(entries = lexicon.len(), "Loaded sentiment lexicon");
                let scorer: Arc<dyn SentimentScorer> = lexicon.clone();
                (scorer, Some(lexicon))
            }
            ScorerBackend::Remote => (config.build_scorer()?, None),
        };

    let classifier = Arc::new(MoodClassifier::new(filter.clone(), scorer));

    Ok(Components {
        filter,
        lexicon,
        classifier,
    })
}
