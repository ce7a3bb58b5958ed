// Composition tests: the real filter and scorer wired through the classifier.
//
// These exercise the data flow Config -> WordlistFilter + LexiconScorer ->
// MoodClassifier -> MoodResult with the built-in data files, plus the remote
// scorer against a throwaway local HTTP service.

use std::sync::Arc;

use textmood::config::Config;
use textmood::explain::explanation;
use textmood::mood::classifier::MoodClassifier;
use textmood::mood::models::{
    Failure, Mood, Outcome, NEUTRAL_EXPLANATION, TOO_SHORT_EXPLANATION, UNSAFE_EXPLANATION,
};
use textmood::safety::wordlist::WordlistFilter;
use textmood::sentiment::lexicon::LexiconScorer;

fn default_classifier() -> MoodClassifier {
    Config::default().build_classifier().unwrap()
}

// ============================================================
// Example scenarios
// ============================================================

#[tokio::test]
async fn loving_sentence_is_happy() {
    let result = default_classifier()
        .classify("I love learning about code!")
        .await;
    assert_eq!(result.mood, Mood::Happy);
    assert_eq!(result.emoji(), "😀");
}

#[tokio::test]
async fn single_word_is_too_short() {
    let result = default_classifier().classify("hi").await;
    assert_eq!(result.mood, Mood::Neutral);
    assert_eq!(result.explanation, TOO_SHORT_EXPLANATION);
}

#[tokio::test]
async fn empty_input_is_too_short() {
    let result = default_classifier().classify("").await;
    assert_eq!(result.explanation, TOO_SHORT_EXPLANATION);
}

#[tokio::test]
async fn blocked_word_is_rejected_even_when_positive() {
    let classifier = default_classifier();
    let outcome = classifier.evaluate("you are a wonderful bitch").await;
    assert_eq!(outcome, Outcome::Failed(Failure::UnsafeContent));
    assert_eq!(outcome.into_result().explanation, UNSAFE_EXPLANATION);
}

#[tokio::test]
async fn plain_statement_is_neutral() {
    let result = default_classifier()
        .classify("The table is in the room.")
        .await;
    assert_eq!(result.mood, Mood::Neutral);
    assert_eq!(result.explanation, NEUTRAL_EXPLANATION);
    assert_eq!(result.polarity, Some(0.0));
}

#[tokio::test]
async fn angry_sentence_is_sad() {
    let result = default_classifier()
        .classify("I hate this awful homework")
        .await;
    assert_eq!(result.mood, Mood::Sad);
}

#[tokio::test]
async fn negated_happiness_is_sad() {
    let result = default_classifier().classify("I am not happy").await;
    assert_eq!(result.mood, Mood::Sad);
}

#[tokio::test]
async fn extra_blocked_words_flow_through_config() {
    let config = Config {
        extra_blocked_words: vec!["broccoli".to_string()],
        ..Config::default()
    };
    let classifier = config.build_classifier().unwrap();
    let outcome = classifier.evaluate("I love broccoli so much").await;
    assert_eq!(outcome, Outcome::Failed(Failure::UnsafeContent));
}

#[tokio::test]
async fn shared_classifier_is_idempotent_across_tasks() {
    let classifier = Arc::new(MoodClassifier::new(
        Arc::new(WordlistFilter::builtin()),
        Arc::new(LexiconScorer::builtin()),
    ));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let classifier = classifier.clone();
        handles.push(tokio::spawn(async move {
            classifier.classify("What a great and sunny day").await
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].mood, Mood::Happy);
}

#[test]
fn explanation_matches_classifier_thresholds() {
    let e = explanation();
    assert_eq!(e.happy_threshold, 0.2);
    assert_eq!(e.sad_threshold, -0.2);
    assert_eq!(e.min_words, 2);
    assert!(e.diagram_dot.contains("Safety Check"));
}

// ============================================================
// Remote scorer against a local service
// ============================================================

#[cfg(feature = "web")]
mod remote {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use textmood::sentiment::remote::RemoteScorer;
    use textmood::sentiment::traits::SentimentScorer;

    /// Serve `router` on an ephemeral port and return its /score URL.
    async fn spawn_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/score")
    }

    fn classifier_for(endpoint: String) -> MoodClassifier {
        MoodClassifier::new(
            Arc::new(WordlistFilter::builtin()),
            Arc::new(RemoteScorer::new(endpoint)),
        )
    }

    #[tokio::test]
    async fn remote_polarity_drives_mood() {
        let router = Router::new().route(
            "/score",
            post(|Json(body): Json<serde_json::Value>| async move {
                // Echo-check the request shape, then answer with a sad score
                assert!(body["text"].is_string());
                Json(serde_json::json!({ "polarity": -0.6 }))
            }),
        );
        let endpoint = spawn_service(router).await;

        let scorer = RemoteScorer::new(endpoint.clone());
        assert_eq!(scorer.endpoint(), endpoint);
        assert_eq!(scorer.polarity("any text").await.unwrap(), -0.6);

        let result = classifier_for(endpoint).classify("a rainy day").await;
        assert_eq!(result.mood, Mood::Sad);
        assert_eq!(result.polarity, Some(-0.6));
    }

    #[tokio::test]
    async fn remote_server_error_is_scoring_failure() {
        let router = Router::new().route(
            "/score",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = spawn_service(router).await;

        let outcome = classifier_for(endpoint).evaluate("a rainy day").await;
        assert!(matches!(outcome, Outcome::Failed(Failure::ScoringFailure(_))));
    }

    #[tokio::test]
    async fn remote_out_of_range_score_is_scoring_failure() {
        let router = Router::new().route(
            "/score",
            post(|| async { Json(serde_json::json!({ "polarity": 3.0 })) }),
        );
        let endpoint = spawn_service(router).await;

        let outcome = classifier_for(endpoint).evaluate("a rainy day").await;
        assert!(matches!(outcome, Outcome::Failed(Failure::ScoringFailure(_))));
    }

    #[tokio::test]
    async fn unreachable_service_is_scoring_failure() {
        // Bind and drop to get a port nothing is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = classifier_for(format!("http://{addr}/score"))
            .evaluate("a rainy day")
            .await;
        assert!(matches!(outcome, Outcome::Failed(Failure::ScoringFailure(_))));
    }
}
