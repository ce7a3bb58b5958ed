// "Teacher mode": the how-it-works text and decision diagram.
//
// Shared by `textmood explain` and GET /api/explain so both surfaces tell the
// same story. The diagram is Graphviz DOT source built from the live
// thresholds.

use serde::Serialize;

use crate::mood::models::{Mood, HAPPY_THRESHOLD, MIN_WORDS, SAD_THRESHOLD};

pub const TITLE: &str = "How does this app 'feel' emotions?";

pub const TEXT: &str = "\
This app doesn't *feel* anything! It's just very good at math.
It uses a built-in dictionary where many words are already given a
\"polarity\" score.

  * Positive words (like \"happy\", \"great\", \"love\") have a score > 0.
  * Negative words (like \"sad\", \"bad\", \"angry\") have a score < 0.
  * Neutral words (like \"table\", \"the\", \"is\") have a score of 0.

Little words nearby change the score: \"very\" makes the next word stronger,
and \"not\" flips it around (but only halfway).

The app averages the scores of all the words in your sentence to get a
final score. Then it uses simple if/else logic to pick an emoji.";

/// Everything the teacher-mode panel needs, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub title: &'static str,
    pub text: &'static str,
    pub diagram_dot: String,
    pub happy_threshold: f64,
    pub sad_threshold: f64,
    pub min_words: usize,
}

pub fn explanation() -> Explanation {
    Explanation {
        title: TITLE,
        text: TEXT,
        diagram_dot: diagram_dot(),
        happy_threshold: HAPPY_THRESHOLD,
        sad_threshold: SAD_THRESHOLD,
        min_words: MIN_WORDS,
    }
}

/// Graphviz source for the decision flow.
pub fn diagram_dot() -> String {
    let happy = format!("Score >= {HAPPY_THRESHOLD}");
    let sad = format!("Score <= {SAD_THRESHOLD}");
    let length = format!("At least {MIN_WORDS} words?");
    let (happy_emoji, sad_emoji, neutral_emoji) =
        (Mood::Happy.emoji(), Mood::Sad.emoji(), Mood::Neutral.emoji());

    format!(
        r#"digraph G {{
    rankdir="TB";
    node [shape=box, style=rounded, fontname="Arial"];

    "Your Sentence" [shape=ellipse];
    "{length}" [shape=diamond];
    "Safety Check" [shape=diamond];
    "Analyze Polarity" [shape=box];
    "Result Emoji" [shape=ellipse, style=filled, fillcolor=lightblue];

    "Your Sentence" -> "{length}";
    "{length}" -> "Safety Check" [label="  Yes "];
    "{length}" -> "Result Emoji" [label="  No ({neutral_emoji}) "];
    "Safety Check" -> "Analyze Polarity" [label="  Safe Words "];
    "Safety Check" -> "Result Emoji" [label="  Bad Words ({neutral_emoji}) "];

    subgraph cluster_logic {{
        label = "Decision Logic";
        fontname="Arial";
        "{happy}" [shape=diamond];
        "{sad}" [shape=diamond];

        "Analyze Polarity" -> "{happy}";
        "{happy}" -> "Result Emoji" [label=" Yes (Happy {happy_emoji})"];
        "{happy}" -> "{sad}" [label=" No"];

        "{sad}" -> "Result Emoji" [label=" Yes (Sad {sad_emoji})"];
        "{sad}" -> "Result Emoji" [label=" No (Neutral {neutral_emoji})"];
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_uses_live_thresholds() {
        let dot = diagram_dot();
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("Score >= 0.2"));
        assert!(dot.contains("Score <= -0.2"));
        assert!(dot.contains("At least 2 words?"));
    }

    #[test]
    fn test_diagram_braces_balance() {
        let dot = diagram_dot();
        assert_eq!(dot.matches('{').count(), dot.matches('}').count());
    }
}
