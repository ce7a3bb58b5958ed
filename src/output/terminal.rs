// Colored terminal output for mood results and teacher mode.
//
// main.rs decides what to show; this module decides how it looks.

use colored::Colorize;

use crate::explain::Explanation;
use crate::mood::models::{Failure, Mood, MoodResult, Outcome};
use crate::sentiment::lexicon::Assessment;

/// Display the emoji and explanation for a classified sentence.
pub fn display_result(sentence: &str, result: &MoodResult) {
    println!(
        "\n  {}  {}",
        result.emoji(),
        colorize_mood(result.mood, &result.explanation)
    );
    println!(
        "     {}",
        format!("\"{}\"", super::truncate_chars(sentence, 80)).dimmed()
    );
}

/// Display how the decision was reached: outcome, polarity and the
/// per-word breakdown from the lexicon.
pub fn display_details(outcome: &Outcome, assessments: &[Assessment], censored: Option<&str>) {
    println!("\n  {}", "Details:".bold());
    println!("    Outcome: {}", outcome.kind());

    match outcome {
        Outcome::Scored { mood, polarity } => {
            println!(
                "    Polarity: {:+.3}  ->  {}",
                polarity,
                colorize_mood(*mood, mood.as_str())
            );
        }
        Outcome::Failed(Failure::ScoringFailure(reason)) => {
            println!("    Scorer error: {}", reason.red());
        }
        Outcome::Failed(_) => {}
    }

    if let Some(censored) = censored {
        println!("    Censored: {}", censored.dimmed());
    }

    if assessments.is_empty() {
        println!("    {}", "No scored words found.".dimmed());
        return;
    }

    println!(
        "\n    {:<16} {:>7} {:>9} {:>8}  {}",
        "Word".dimmed(),
        "Base".dimmed(),
        "Modifier".dimmed(),
        "Score".dimmed(),
        "Negated".dimmed(),
    );
    println!("    {}", "-".repeat(52).dimmed());
    for a in assessments {
        let negated = if a.negated {
            "yes".yellow().to_string()
        } else {
            "no".normal().to_string()
        };
        println!(
            "    {:<16} {:>+7.3} {:>8.2}x {:>+8.3}  {}",
            super::truncate_chars(&a.word, 16),
            a.base_polarity,
            a.modifier,
            a.polarity,
            negated,
        );
    }
}

/// Display the how-it-works text followed by the DOT diagram.
pub fn display_explanation(explanation: &Explanation) {
    println!("\n{}", explanation.title.bold());
    println!();
    println!("{}", explanation.text);
    println!(
        "\n{}",
        "Decision diagram (Graphviz DOT, paste into any Graphviz viewer):".dimmed()
    );
    println!();
    println!("{}", explanation.diagram_dot);
}

/// Colorize text by mood.
fn colorize_mood(mood: Mood, text: &str) -> colored::ColoredString {
    match mood {
        Mood::Happy => text.green().bold(),
        Mood::Sad => text.blue().bold(),
        Mood::Neutral => text.normal(),
    }
}
